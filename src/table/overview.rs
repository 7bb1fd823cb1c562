// ============================================================================
// Structure : CategoryOverview
// ============================================================================
// Résumé d'une catégorie affiché au-dessus du tableau :
// capitalisation totale, volume total et trois "top 3"
// ============================================================================

use crate::models::CoinRecord;

/// Nombre de coins dans chaque top
const TOP_COUNT: usize = 3;

/// Statistiques agrégées d'une catégorie
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryOverview {
    /// Somme des capitalisations (USD)
    pub total_market_cap: f64,

    /// Somme des volumes 24h (USD)
    pub total_volume: f64,

    /// Top 3 par volume
    pub trending: Vec<CoinRecord>,

    /// Top 3 par variation 24h
    pub top_gainers: Vec<CoinRecord>,

    /// Top 3 par capitalisation
    pub largest: Vec<CoinRecord>,
}

impl CategoryOverview {
    /// Calcule le résumé d'une liste de coins
    ///
    /// CONCEPT RUST : fold via sum()
    /// - .map().sum() additionne sans boucle explicite
    pub fn from_coins(coins: &[CoinRecord]) -> Self {
        Self {
            total_market_cap: coins.iter().map(|c| c.market_cap).sum(),
            total_volume: coins.iter().map(|c| c.volume).sum(),
            trending: top_by(coins, |c| c.volume),
            top_gainers: top_by(coins, |c| c.change_24h),
            largest: top_by(coins, |c| c.market_cap),
        }
    }
}

/// Les TOP_COUNT premiers coins par valeur décroissante (tri stable)
fn top_by<F>(coins: &[CoinRecord], value: F) -> Vec<CoinRecord>
where
    F: Fn(&CoinRecord) -> f64,
{
    let mut sorted: Vec<&CoinRecord> = coins.iter().collect();
    sorted.sort_by(|a, b| value(b).total_cmp(&value(a)));
    sorted.into_iter().take(TOP_COUNT).cloned().collect()
}

// ============================================================================
// Tests unitaires
// ============================================================================
