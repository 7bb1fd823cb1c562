// ============================================================================
// Module : models
// ============================================================================
// Ce module contient les structures de données partagées par les moteurs
// (tableau, calculateurs) et par l'interface
//
// CONCEPT RUST : Modules et visibilité
// - "pub mod" : déclare un sous-module publique (accessible depuis l'extérieur)
// - Sans "pub", le module serait privé au crate
// ============================================================================

pub mod coin;     // CoinRecord : une ligne du catalogue
pub mod category; // Catégories (pages ETH, AI, DeFi, ...)
pub mod fiat;     // Devises fiat et taux fixes

// Re-export des structures principales pour simplifier les imports
// Au lieu de : use coinboard::models::coin::CoinRecord;
// On peut faire : use coinboard::models::CoinRecord;
pub use category::Category;
pub use coin::CoinRecord;
pub use fiat::Fiat;
