// ============================================================================
// Calculateur de ROI (Return On Investment)
// ============================================================================
// Entrées : montant investi, prix d'achat, frais d'entrée, prix de vente,
// frais de sortie. Tous les montants sont dans la même devise.
//
// FORMULES :
//   total_investment = amount + buy_fee
//   tokens_purchased = amount / buy_price        (0 si buy_price <= 0)
//   gross_return     = tokens_purchased * sell_price
//   net_return       = gross_return - sell_fee
//   profit           = net_return - total_investment  (si les deux prix sont saisis)
//   percentage       = profit / total_investment * 100 (0 si total_investment <= 0)
// ============================================================================

use crate::calculator::{parse_input, parse_or_zero, Estimate};
use crate::models::Fiat;

/// Entrées numériques du calculateur (déjà parsées)
///
/// Les prix sont optionnels : sans les deux, le profit n'est pas calculable.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RoiInput {
    pub amount: f64,
    pub buy_price: Option<f64>,
    pub buy_fee: f64,
    pub sell_price: Option<f64>,
    pub sell_fee: f64,
}

/// Profit (ou perte) d'une position
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Profit {
    /// Gain absolu dans la devise de saisie (négatif = perte)
    pub absolute: f64,

    /// Gain en pourcentage du total investi
    pub percentage: f64,
}

/// Résultat du calculateur
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiResult {
    pub tokens_purchased: f64,
    pub total_investment: f64,
    pub gross_return: f64,
    pub net_return: f64,
    pub total_fees: f64,

    /// Pending tant que les deux prix ne sont pas saisis
    pub profit: Estimate<Profit>,
}

impl RoiResult {
    /// Gain absolu, 0 si pas encore calculable
    pub fn absolute_profit(&self) -> f64 {
        self.profit.map(|p| p.absolute).unwrap_or(0.0)
    }

    /// Gain en pourcentage, 0 si pas encore calculable
    pub fn percentage_return(&self) -> f64 {
        self.profit.map(|p| p.percentage).unwrap_or(0.0)
    }

    /// Vrai si la position est gagnante (ou à l'équilibre)
    pub fn is_profit(&self) -> bool {
        self.absolute_profit() >= 0.0
    }
}

/// Calcule le ROI
///
/// Fonction pure : pas d'effet de bord, jamais de NaN.
pub fn calculate_roi(input: &RoiInput) -> RoiResult {
    let buy_price = input.buy_price.unwrap_or(0.0);
    let sell_price = input.sell_price.unwrap_or(0.0);

    let total_investment = input.amount + input.buy_fee;

    // Garde contre la division par zéro
    let tokens_purchased = if buy_price > 0.0 {
        input.amount / buy_price
    } else {
        0.0
    };

    let gross_return = tokens_purchased * sell_price;
    let net_return = gross_return - input.sell_fee;

    let has_both_prices = buy_price > 0.0 && sell_price > 0.0;
    let profit = if has_both_prices {
        let absolute = net_return - total_investment;
        let percentage = if total_investment > 0.0 {
            absolute / total_investment * 100.0
        } else {
            0.0
        };
        Estimate::Ready(Profit {
            absolute,
            percentage,
        })
    } else {
        Estimate::Pending
    };

    RoiResult {
        tokens_purchased,
        total_investment,
        gross_return,
        net_return,
        total_fees: input.buy_fee + input.sell_fee,
        profit,
    }
}

// ============================================================================
// Formulaire de saisie
// ============================================================================

/// Formulaire du calculateur de ROI (champs texte)
///
/// CONCEPT : Séparation saisie / calcul
/// - Le formulaire garde exactement ce que l'utilisateur a tapé
/// - input() convertit en nombres au moment du calcul
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoiForm {
    pub amount: String,
    pub buy_price: String,
    pub buy_fee: String,
    pub sell_price: String,
    pub sell_fee: String,

    /// Ticker du token acheté (affichage)
    pub token: String,

    /// Devise des montants saisis
    pub currency: Fiat,
}

impl RoiForm {
    /// Labels des champs, dans l'ordre de navigation
    pub const FIELD_LABELS: [&'static str; 5] = [
        "Investment amount",
        "Buy price",
        "Buy fees",
        "Sell price",
        "Sell fees",
    ];

    /// Crée un formulaire vide pour un token
    pub fn new(token: &str, currency: Fiat) -> Self {
        Self {
            token: token.to_string(),
            currency,
            ..Self::default()
        }
    }

    /// Accès mutable au champ n° `index`
    pub fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.amount),
            1 => Some(&mut self.buy_price),
            2 => Some(&mut self.buy_fee),
            3 => Some(&mut self.sell_price),
            4 => Some(&mut self.sell_fee),
            _ => None,
        }
    }

    /// Valeur texte du champ n° `index`
    pub fn field(&self, index: usize) -> &str {
        match index {
            0 => &self.amount,
            1 => &self.buy_price,
            2 => &self.buy_fee,
            3 => &self.sell_price,
            4 => &self.sell_fee,
            _ => "",
        }
    }

    /// Convertit les champs texte en entrées numériques
    pub fn input(&self) -> RoiInput {
        RoiInput {
            amount: parse_or_zero(&self.amount),
            buy_price: parse_input(&self.buy_price),
            buy_fee: parse_or_zero(&self.buy_fee),
            sell_price: parse_input(&self.sell_price),
            sell_fee: parse_or_zero(&self.sell_fee),
        }
    }

    /// Calcule le résultat à partir de la saisie courante
    pub fn result(&self) -> RoiResult {
        calculate_roi(&self.input())
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
