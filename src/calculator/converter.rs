// ============================================================================
// Convertisseur crypto <-> fiat
// ============================================================================
// Chaque actif a un prix en USD :
//   - devise fiat : taux fixe (Fiat::usd_rate)
//   - coin        : prix du catalogue
//
// FORMULE : converted = amount * from_usd / to_usd
// ============================================================================

use std::fmt;

use crate::calculator::{parse_input, Estimate};
use crate::catalog::Catalog;
use crate::models::Fiat;

/// Décimales affichées pour le montant converti
const CONVERTED_DECIMALS: usize = 8;

/// Un actif convertible
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asset {
    Fiat(Fiat),
    /// Symbole du coin (ex: "BTC")
    Coin(String),
}

impl Asset {
    /// Code affiché (ex: "USD", "BTC")
    pub fn code(&self) -> &str {
        match self {
            Asset::Fiat(fiat) => fiat.code(),
            Asset::Coin(symbol) => symbol,
        }
    }

    /// Liste des actifs proposés : devises et coins du catalogue, mélangés
    /// et triés par code
    pub fn options(catalog: &Catalog) -> Vec<Asset> {
        let mut options: Vec<Asset> = Fiat::ALL
            .iter()
            .copied()
            .map(Asset::Fiat)
            .chain(catalog.symbols().into_iter().map(Asset::Coin))
            .collect();

        options.sort_by(|a, b| a.code().cmp(b.code()));
        options.dedup_by(|a, b| a.code() == b.code());
        options
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Prix USD d'un actif, 0 si le coin est inconnu
pub fn usd_price(asset: &Asset, catalog: &Catalog) -> f64 {
    match asset {
        Asset::Fiat(fiat) => fiat.usd_rate(),
        Asset::Coin(symbol) => catalog.price_of(symbol).unwrap_or(0.0),
    }
}

/// Convertit `amount` de `from` vers `to`
///
/// Pending si l'actif cible n'a pas de prix (division par zéro).
pub fn convert(amount: f64, from: &Asset, to: &Asset, catalog: &Catalog) -> Estimate<f64> {
    let to_usd = usd_price(to, catalog);
    if to_usd <= 0.0 {
        return Estimate::Pending;
    }
    Estimate::Ready(amount * usd_price(from, catalog) / to_usd)
}

/// État du convertisseur : deux montants liés
///
/// Éditer un côté recalcule l'autre. Une saisie vide (ou invalide) vide
/// l'autre côté.
#[derive(Debug, Clone, PartialEq)]
pub struct Converter {
    pub from: Asset,
    pub to: Asset,
    pub from_text: String,
    pub to_text: String,
}

impl Converter {
    pub fn new(from: Asset, to: Asset) -> Self {
        Self {
            from,
            to,
            from_text: String::new(),
            to_text: String::new(),
        }
    }

    /// Saisie côté source : recalcule la cible
    pub fn set_from_text(&mut self, text: &str, catalog: &Catalog) {
        self.from_text = text.to_string();
        self.to_text = linked_amount(text, &self.from, &self.to, catalog);
    }

    /// Saisie côté cible : recalcule la source
    pub fn set_to_text(&mut self, text: &str, catalog: &Catalog) {
        self.to_text = text.to_string();
        self.from_text = linked_amount(text, &self.to, &self.from, catalog);
    }

    /// Change l'actif source et recalcule la cible
    pub fn set_from(&mut self, asset: Asset, catalog: &Catalog) {
        self.from = asset;
        let text = self.from_text.clone();
        self.set_from_text(&text, catalog);
    }

    /// Change l'actif cible et recalcule la cible
    pub fn set_to(&mut self, asset: Asset, catalog: &Catalog) {
        self.to = asset;
        let text = self.from_text.clone();
        self.set_from_text(&text, catalog);
    }

    /// Inverse source et cible (actifs et montants)
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
        std::mem::swap(&mut self.from_text, &mut self.to_text);
    }

    /// Prix unitaire : combien de `to` pour 1 `from`
    pub fn unit_rate(&self, catalog: &Catalog) -> Estimate<f64> {
        convert(1.0, &self.from, &self.to, catalog)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Asset::Coin("BTC".to_string()), Asset::Fiat(Fiat::Usd))
    }
}

/// Montant converti formaté, ou chaîne vide
fn linked_amount(text: &str, from: &Asset, to: &Asset, catalog: &Catalog) -> String {
    let Some(amount) = parse_input(text) else {
        return String::new();
    };

    match convert(amount, from, to, catalog) {
        Estimate::Ready(value) => format!("{:.*}", CONVERTED_DECIMALS, value),
        Estimate::Pending => String::new(),
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
