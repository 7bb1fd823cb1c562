// ============================================================================
// Structure : CoinRecord
// ============================================================================
// Représente une cryptomonnaie du catalogue (valeur immuable)
//
// CONCEPTS RUST :
// 1. #[derive(...)] : génère automatiquement l'implémentation de traits
//    - Debug : permet d'afficher la structure avec {:?}
//    - Clone : permet de dupliquer la valeur (copie défensive avant tri)
//    - PartialEq : permet de comparer deux records avec ==
//
// 2. BTreeSet<String> : ensemble ordonné de tags
//    - Pas de doublons, ordre déterministe à l'affichage
// ============================================================================

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::Category;

/// Une cryptomonnaie avec ses indicateurs de marché
///
/// Les alias serde acceptent aussi les noms camelCase
/// (`marketCap`, `change24h`, ...) pour les catalogues exportés d'un front web.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinRecord {
    /// Identifiant stable et unique (ex: "bitcoin")
    pub id: String,

    /// Nom affiché (ex: "Bitcoin")
    pub name: String,

    /// Ticker (ex: "BTC")
    pub symbol: String,

    /// Prix unitaire en USD
    pub price: f64,

    /// Variation sur 1h en pourcentage (signée)
    #[serde(alias = "change1h")]
    pub change_1h: f64,

    /// Variation sur 24h en pourcentage (signée)
    #[serde(alias = "change24h")]
    pub change_24h: f64,

    /// Variation sur 7 jours en pourcentage (signée)
    #[serde(alias = "change7d")]
    pub change_7d: f64,

    /// Volume échangé sur 24h en USD
    pub volume: f64,

    /// Capitalisation en USD (stockée telle quelle, pas recalculée)
    #[serde(alias = "marketCap")]
    pub market_cap: f64,

    /// Tags de catégorie (ex: "ai", "defi", "layer-1")
    pub categories: BTreeSet<String>,
}

impl CoinRecord {
    /// Constructeur minimal, utilisé surtout par les tests
    ///
    /// Les variations sont à 0 et les tags vides ; on les complète ensuite
    /// avec les méthodes `with_*`.
    pub fn new(id: &str, name: &str, symbol: &str, price: f64, market_cap: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            price,
            change_1h: 0.0,
            change_24h: 0.0,
            change_7d: 0.0,
            volume: 0.0,
            market_cap,
            categories: BTreeSet::new(),
        }
    }

    /// Définit le volume 24h
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    /// Définit les trois variations (1h, 24h, 7j)
    pub fn with_changes(mut self, change_1h: f64, change_24h: f64, change_7d: f64) -> Self {
        self.change_1h = change_1h;
        self.change_24h = change_24h;
        self.change_7d = change_7d;
        self
    }

    /// Ajoute des tags de catégorie
    ///
    /// CONCEPT RUST : IntoIterator générique
    /// - Accepte un tableau, un Vec, un itérateur...
    pub fn with_categories<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Vérifie si le coin porte ce tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.categories.contains(tag)
    }

    /// Vérifie si le coin appartient à la catégorie
    ///
    /// `Category::All` contient tous les coins.
    pub fn belongs_to(&self, category: Category) -> bool {
        match category.tag() {
            Some(tag) => self.has_tag(tag),
            None => true,
        }
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_builder() {
        let coin = CoinRecord::new("bitcoin", "Bitcoin", "BTC", 67245.32, 1.3e12)
            .with_volume(3.8e10)
            .with_changes(0.25, 2.15, 5.32)
            .with_categories(["layer-1", "pow"]);

        assert_eq!(coin.symbol, "BTC");
        assert_eq!(coin.volume, 3.8e10);
        assert!(coin.has_tag("pow"));
        assert!(!coin.has_tag("ai"));
    }

    #[test]
    fn test_belongs_to() {
        let coin = CoinRecord::new("fetch-ai", "Fetch.ai", "FET", 2.15, 9.8e8)
            .with_categories(["ai", "cosmos"]);

        assert!(coin.belongs_to(Category::All));
        assert!(coin.belongs_to(Category::Ai));
        assert!(!coin.belongs_to(Category::Defi));
    }

    #[test]
    fn test_deserialize_camel_case_aliases() {
        let json = r#"{
            "id": "solana", "name": "Solana", "symbol": "SOL", "price": 123.45,
            "change1h": 0.1, "change24h": -1.5, "change7d": 3.0,
            "volume": 1000.0, "marketCap": 54321098765,
            "categories": ["sol", "layer-1"]
        }"#;

        let coin: CoinRecord = serde_json::from_str(json).unwrap();
        assert_eq!(coin.market_cap, 54321098765.0);
        assert_eq!(coin.change_24h, -1.5);
        assert!(coin.belongs_to(Category::Sol));
    }
}
