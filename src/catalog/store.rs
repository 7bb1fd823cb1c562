// ============================================================================
// Structure : Catalog
// ============================================================================
// Liste immuable des coins disponibles
//
// CONCEPT : Injection de dépendance
// - Pas de variable globale : le catalogue est construit au démarrage
//   puis passé explicitement aux moteurs et à App
// - Les tests construisent leur propre Catalog
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Category, CoinRecord};

/// Catalogue de coins (lecture seule une fois construit)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Date de la photographie des prix (optionnelle)
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Les coins, dans l'ordre du fichier
    pub coins: Vec<CoinRecord>,
}

impl Catalog {
    /// Crée un catalogue à partir d'une liste de coins
    ///
    /// Aucune validation ici : voir `loader::validate` pour les catalogues
    /// venant de l'extérieur.
    pub fn new(coins: Vec<CoinRecord>) -> Self {
        Self {
            updated_at: None,
            coins,
        }
    }

    /// Tous les coins
    pub fn coins(&self) -> &[CoinRecord] {
        &self.coins
    }

    /// Nombre de coins
    pub fn len(&self) -> usize {
        self.coins.len()
    }

    /// Vérifie si le catalogue est vide
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// Coins d'une catégorie (copie, dans l'ordre du catalogue)
    ///
    /// CONCEPT RUST : Iterator chaining
    /// - .filter() garde les coins de la catégorie
    /// - .cloned() transforme &CoinRecord en CoinRecord
    pub fn in_category(&self, category: Category) -> Vec<CoinRecord> {
        self.coins
            .iter()
            .filter(|coin| coin.belongs_to(category))
            .cloned()
            .collect()
    }

    /// Cherche un coin par son identifiant
    pub fn find_by_id(&self, id: &str) -> Option<&CoinRecord> {
        self.coins.iter().find(|coin| coin.id == id)
    }

    /// Cherche un coin par son ticker (insensible à la casse)
    pub fn find_by_symbol(&self, symbol: &str) -> Option<&CoinRecord> {
        self.coins
            .iter()
            .find(|coin| coin.symbol.eq_ignore_ascii_case(symbol))
    }

    /// Prix USD d'un ticker (None si inconnu)
    pub fn price_of(&self, symbol: &str) -> Option<f64> {
        self.find_by_symbol(symbol).map(|coin| coin.price)
    }

    /// Tickers du catalogue
    pub fn symbols(&self) -> Vec<String> {
        self.coins.iter().map(|coin| coin.symbol.clone()).collect()
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(vec![
            CoinRecord::new("bitcoin", "Bitcoin", "BTC", 67245.32, 1.3e12)
                .with_categories(["layer-1", "pow"]),
            CoinRecord::new("fetch-ai", "Fetch.ai", "FET", 2.15, 9.8e8)
                .with_categories(["ai"]),
            CoinRecord::new("ocean-protocol", "Ocean Protocol", "OCEAN", 0.85, 5.6e8)
                .with_categories(["ai", "ethereum"]),
        ])
    }

    #[test]
    fn test_in_category() {
        let catalog = sample();
        assert_eq!(catalog.in_category(Category::All).len(), 3);

        let ai = catalog.in_category(Category::Ai);
        assert_eq!(ai.len(), 2);
        assert_eq!(ai[0].id, "fetch-ai"); // Ordre du catalogue conservé

        assert!(catalog.in_category(Category::Meme).is_empty());
    }

    #[test]
    fn test_find() {
        let catalog = sample();
        assert_eq!(catalog.find_by_id("bitcoin").map(|c| c.symbol.as_str()), Some("BTC"));
        assert_eq!(catalog.find_by_symbol("ocean").map(|c| c.id.as_str()), Some("ocean-protocol"));
        assert_eq!(catalog.price_of("FET"), Some(2.15));
        assert_eq!(catalog.price_of("DOGE"), None);
    }
}
