// ============================================================================
// Enum : Category
// ============================================================================
// Une catégorie = une page du tableau de bord (ETH, AI, DeFi, ...)
//
// CONCEPT : Paramétrage plutôt que duplication
// - Un seul moteur de tableau, réutilisé pour chaque catégorie
// - La catégorie ne porte que le tag du catalogue et le label affiché
// ============================================================================

use serde::{Deserialize, Serialize};

/// Catégorie de coins (une page du dashboard)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Tous les coins du catalogue
    #[default]
    All,
    Eth,
    Bnb,
    Sol,
    SmartContract,
    LayerOne,
    LayerTwo,
    Defi,
    Ai,
    Gaming,
    Infrastructure,
    Rwa,
    Meme,
    Nft,
}

impl Category {
    /// Toutes les catégories, dans l'ordre de navigation
    pub const ALL: [Category; 14] = [
        Category::All,
        Category::Eth,
        Category::Bnb,
        Category::Sol,
        Category::SmartContract,
        Category::LayerOne,
        Category::LayerTwo,
        Category::Defi,
        Category::Ai,
        Category::Gaming,
        Category::Infrastructure,
        Category::Rwa,
        Category::Meme,
        Category::Nft,
    ];

    /// Tag correspondant dans le catalogue (None pour All)
    ///
    /// CONCEPT RUST : &'static str
    /// - Retourne une string littérale (dans le binaire)
    /// - Pas d'allocation
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Category::All => None,
            Category::Eth => Some("eth"),
            Category::Bnb => Some("bnb"),
            Category::Sol => Some("sol"),
            Category::SmartContract => Some("smart-contracts"),
            Category::LayerOne => Some("layer-1"),
            Category::LayerTwo => Some("layer2"),
            Category::Defi => Some("defi"),
            Category::Ai => Some("ai"),
            Category::Gaming => Some("gaming"),
            Category::Infrastructure => Some("infrastructure"),
            Category::Rwa => Some("rwa"),
            Category::Meme => Some("meme"),
            Category::Nft => Some("nft"),
        }
    }

    /// Label court pour l'affichage
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Eth => "ETH",
            Category::Bnb => "BNB",
            Category::Sol => "SOL",
            Category::SmartContract => "Smart Contract",
            Category::LayerOne => "Layer 1",
            Category::LayerTwo => "Layer 2",
            Category::Defi => "DeFi",
            Category::Ai => "AI",
            Category::Gaming => "Gaming",
            Category::Infrastructure => "Infrastructure",
            Category::Rwa => "RWA",
            Category::Meme => "Meme",
            Category::Nft => "NFT",
        }
    }

    /// Titre de la page
    pub fn title(&self) -> String {
        match self {
            Category::All => "Cryptocurrency Prices by Market Cap".to_string(),
            other => format!("{} Crypto Market Overview", other.label()),
        }
    }

    /// Position dans `Category::ALL`
    fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    /// Retourne la catégorie suivante (cycle)
    pub fn next(&self) -> Category {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Retourne la catégorie précédente (cycle)
    pub fn previous(&self) -> Category {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
