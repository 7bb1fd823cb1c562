// ============================================================================
// Module : table
// ============================================================================
// Moteur de vue du tableau : classement par capitalisation, recherche,
// onglets (Top, Trending, Gainers, Losers) et tri par colonne
//
// Toutes les fonctions sont pures : mêmes entrées = même sortie,
// aucun état caché. L'état de l'interface vit dans TableView.
// ============================================================================

pub mod filter;   // Recherche texte et onglets
pub mod overview; // Statistiques de la catégorie (totaux, top 3)
pub mod rank;     // Classement par capitalisation
pub mod sort;     // Tri par colonne
pub mod view;     // État du tableau (catégorie, onglet, recherche, tri)

// Re-exports pour simplifier les imports
pub use filter::{filter_by_query, filter_by_tab, Tab};
pub use overview::CategoryOverview;
pub use rank::{rank_by_market_cap, RankMap};
pub use sort::{apply_sort, toggle_sort, ColumnSort, SortDirection, SortKey, SortSpec};
pub use view::{TableRow, TableView};
