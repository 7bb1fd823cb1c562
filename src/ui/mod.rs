// ============================================================================
// Module : ui
// ============================================================================
// Gère toute l'interface utilisateur (Terminal User Interface)
// ============================================================================

pub mod events;     // Gestion des événements clavier
pub mod dashboard;  // Rendu de l'interface principale et du tableau
pub mod calculator; // Rendu des écrans ROI, Staking et Convertisseur
pub mod chart;      // Rendu de la courbe de staking

// Re-exports pour simplifier les imports
pub use events::{Event, EventHandler};
pub use dashboard::render;
