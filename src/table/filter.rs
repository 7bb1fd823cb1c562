// ============================================================================
// Recherche et onglets
// ============================================================================
// - filter_by_query : sous-chaîne insensible à la casse sur le nom OU le ticker
// - filter_by_tab : un onglet ne retire aucun coin, il fixe l'ordre par défaut
// ============================================================================

use crate::models::CoinRecord;

/// Onglets du tableau (ordres prédéfinis)
///
/// CONCEPT : Un onglet est un tri par défaut
/// - Top : capitalisation décroissante
/// - Trending : volume décroissant
/// - Gainers : variation 24h décroissante
/// - Losers : variation 24h croissante
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Top,
    Trending,
    Gainers,
    Losers,
}

impl Tab {
    /// Tous les onglets, dans l'ordre d'affichage
    pub const ALL: [Tab; 4] = [Tab::Top, Tab::Trending, Tab::Gainers, Tab::Losers];

    /// Label affiché dans la barre d'onglets
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Top => "Top",
            Tab::Trending => "Trending",
            Tab::Gainers => "Top Gainers",
            Tab::Losers => "Top Losers",
        }
    }

    /// Onglet associé à une touche numérique ('1' à '4')
    pub fn from_digit(c: char) -> Option<Tab> {
        let index = c.to_digit(10)? as usize;
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Filtre les coins dont le nom ou le ticker contient la recherche
///
/// - Insensible à la casse
/// - Recherche vide (ou seulement des espaces) : liste inchangée
/// - Sinon la recherche est utilisée telle quelle, espaces compris
/// - Idempotent : refiltrer avec la même recherche ne change rien
///
/// CONCEPT RUST : Vec::retain
/// - Filtre en place, sans réallouer
pub fn filter_by_query(mut coins: Vec<CoinRecord>, query: &str) -> Vec<CoinRecord> {
    if query.trim().is_empty() {
        return coins;
    }

    let needle = query.to_lowercase();

    coins.retain(|coin| {
        coin.name.to_lowercase().contains(&needle) || coin.symbol.to_lowercase().contains(&needle)
    });
    coins
}

/// Réordonne les coins selon l'onglet (aucun coin n'est retiré)
///
/// Tri stable : les égalités gardent l'ordre d'entrée.
pub fn filter_by_tab(mut coins: Vec<CoinRecord>, tab: Tab) -> Vec<CoinRecord> {
    match tab {
        Tab::Top => coins.sort_by(|a, b| b.market_cap.total_cmp(&a.market_cap)),
        Tab::Trending => coins.sort_by(|a, b| b.volume.total_cmp(&a.volume)),
        Tab::Gainers => coins.sort_by(|a, b| b.change_24h.total_cmp(&a.change_24h)),
        Tab::Losers => coins.sort_by(|a, b| a.change_24h.total_cmp(&b.change_24h)),
    }
    coins
}

// ============================================================================
// Tests unitaires
// ============================================================================
