// ============================================================================
// Coinboard - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests d'intégration
// ============================================================================

pub mod catalog;    // Catalogue de coins (source de données injectée)
pub mod models;     // Structures de données
pub mod table;      // Moteur du tableau : rang, filtres, tri
pub mod calculator; // Calculateurs : ROI, staking, convertisseur
pub mod format;     // Formatage des nombres
pub mod config;     // Configuration (fichier + environnement)
pub mod app;        // État de l'application
pub mod ui;         // Interface utilisateur
