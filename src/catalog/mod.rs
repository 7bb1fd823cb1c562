// ============================================================================
// Module : catalog
// ============================================================================
// Source de données injectée : la liste des coins, chargée une fois au
// démarrage (fichier JSON ou catalogue embarqué dans le binaire)
// ============================================================================

pub mod loader; // Lecture + validation du JSON
pub mod store;  // Structure Catalog et requêtes

// Re-export des éléments principaux
pub use loader::{load_catalog, EMBEDDED_CATALOG};
pub use store::Catalog;
