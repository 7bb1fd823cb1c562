// ============================================================================
// Enum : Fiat
// ============================================================================
// Table fixe des devises fiat : symbole et taux en USD
// Les taux sont des constantes (pas de service de change)
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Devise fiat supportée
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Fiat {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cad,
    Aud,
}

impl Fiat {
    /// Toutes les devises, dans l'ordre du sélecteur
    pub const ALL: [Fiat; 6] = [Fiat::Usd, Fiat::Eur, Fiat::Gbp, Fiat::Jpy, Fiat::Cad, Fiat::Aud];

    /// Code ISO (ex: "EUR")
    pub fn code(&self) -> &'static str {
        match self {
            Fiat::Usd => "USD",
            Fiat::Eur => "EUR",
            Fiat::Gbp => "GBP",
            Fiat::Jpy => "JPY",
            Fiat::Cad => "CAD",
            Fiat::Aud => "AUD",
        }
    }

    /// Symbole affiché devant les montants
    pub fn symbol(&self) -> &'static str {
        match self {
            Fiat::Usd => "$",
            Fiat::Eur => "€",
            Fiat::Gbp => "£",
            Fiat::Jpy => "¥",
            Fiat::Cad => "C$",
            Fiat::Aud => "A$",
        }
    }

    /// Valeur d'une unité de cette devise en USD
    pub fn usd_rate(&self) -> f64 {
        match self {
            Fiat::Usd => 1.0,
            Fiat::Eur => 1.08,
            Fiat::Gbp => 1.26,
            Fiat::Jpy => 0.0067,
            Fiat::Cad => 0.74,
            Fiat::Aud => 0.65,
        }
    }

    /// Retourne la devise suivante (cycle)
    pub fn next(&self) -> Fiat {
        let index = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Fiat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Parse un code ISO, insensible à la casse
///
/// CONCEPT RUST : FromStr
/// - Permet d'écrire "eur".parse::<Fiat>()
/// - L'erreur est un simple () : l'appelant décide quoi faire
impl FromStr for Fiat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL.iter().copied().find(|f| f.code() == upper).ok_or(())
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fiat_is_usd() {
        assert_eq!(Fiat::default(), Fiat::Usd);
    }

    #[test]
    fn test_fiat_table() {
        assert_eq!(Fiat::Usd.usd_rate(), 1.0);
        assert_eq!(Fiat::Jpy.symbol(), "¥");
        assert_eq!(Fiat::Cad.symbol(), "C$");
        assert_eq!(Fiat::Gbp.usd_rate(), 1.26);
    }

    #[test]
    fn test_fiat_parse() {
        assert_eq!("eur".parse::<Fiat>(), Ok(Fiat::Eur));
        assert_eq!(" AUD ".parse::<Fiat>(), Ok(Fiat::Aud));
        assert!("BTC".parse::<Fiat>().is_err());
    }

    #[test]
    fn test_fiat_cycle() {
        assert_eq!(Fiat::Usd.next(), Fiat::Eur);
        assert_eq!(Fiat::Aud.next(), Fiat::Usd);
    }
}
