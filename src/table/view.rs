// ============================================================================
// Structure : TableView
// ============================================================================
// État du tableau d'une page : catégorie, onglet, recherche et tri
//
// PIPELINE (recalculé à chaque lecture, pas de cache) :
//   catalogue -> coins de la catégorie -> rangs (liste complète)
//             -> recherche -> ordre de l'onglet -> tri explicite
// ============================================================================

use crate::catalog::Catalog;
use crate::models::{Category, CoinRecord};
use crate::table::{
    apply_sort, filter_by_query, filter_by_tab, rank_by_market_cap, toggle_sort, ColumnSort,
    SortDirection, SortKey, SortSpec, Tab,
};

/// Une ligne affichée : le coin et son rang par capitalisation
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub rank: usize,
    pub coin: CoinRecord,
}

/// État du tableau
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    /// Catégorie affichée
    pub category: Category,

    /// Onglet actif
    pub tab: Tab,

    /// Texte de recherche
    pub query: String,

    /// Tri explicite (None = ordre de l'onglet)
    pub sort: SortSpec,
}

impl TableView {
    /// Tri initial d'une page : capitalisation décroissante
    pub const DEFAULT_SORT: ColumnSort = ColumnSort {
        key: SortKey::MarketCap,
        direction: SortDirection::Desc,
    };

    /// Crée la vue d'une catégorie (onglet Top, recherche vide, tri par défaut)
    pub fn new(category: Category) -> Self {
        Self {
            category,
            tab: Tab::Top,
            query: String::new(),
            sort: Some(Self::DEFAULT_SORT),
        }
    }

    /// Change d'onglet : le tri explicite est effacé
    ///
    /// L'ordre de l'onglet s'applique jusqu'au prochain clic sur un en-tête.
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.sort = None;
    }

    /// Clic sur un en-tête de colonne
    pub fn click_header(&mut self, key: SortKey) {
        self.sort = toggle_sort(self.sort, key);
    }

    /// Change de catégorie : la vue repart de zéro
    pub fn select_category(&mut self, category: Category) {
        *self = Self::new(category);
    }

    /// Remplace la recherche
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Calcule les lignes à afficher
    ///
    /// CONCEPT RUST : Ownership dans un pipeline
    /// - in_category() retourne un Vec possédé
    /// - chaque étape consomme le Vec et en retourne un nouveau (move)
    /// - pas de copie inutile entre les étapes
    pub fn rows(&self, catalog: &Catalog) -> Vec<TableRow> {
        let coins = catalog.in_category(self.category);

        // Rangs calculés sur la liste complète de la catégorie
        let ranks = rank_by_market_cap(&coins);

        let coins = filter_by_query(coins, &self.query);
        let coins = filter_by_tab(coins, self.tab);
        let coins = apply_sort(coins, self.sort, &ranks);

        coins
            .into_iter()
            .map(|coin| TableRow {
                rank: ranks.get(&coin.id).copied().unwrap_or(0),
                coin,
            })
            .collect()
    }
}

impl Default for TableView {
    fn default() -> Self {
        Self::new(Category::All)
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CoinRecord::new("bitcoin", "Bitcoin", "BTC", 67000.0, 1.3e12)
                .with_volume(3.8e10)
                .with_changes(0.2, 2.1, 5.3)
                .with_categories(["layer-1"]),
            CoinRecord::new("fetch-ai", "Fetch.ai", "FET", 2.15, 9.8e8)
                .with_volume(1.9e8)
                .with_changes(1.8, 12.5, 38.2)
                .with_categories(["ai"]),
            CoinRecord::new("bittensor", "Bittensor", "TAO", 450.0, 3.4e9)
                .with_volume(1.5e8)
                .with_changes(-0.5, -3.2, 1.0)
                .with_categories(["ai", "layer-1"]),
        ])
    }

    fn ids(rows: &[TableRow]) -> Vec<&str> {
        rows.iter().map(|r| r.coin.id.as_str()).collect()
    }

    #[test]
    fn test_default_view_sorted_by_market_cap() {
        let view = TableView::default();
        let rows = view.rows(&catalog());
        assert_eq!(ids(&rows), vec!["bitcoin", "bittensor", "fetch-ai"]);
        assert_eq!(rows.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_rank_survives_search() {
        let mut view = TableView::default();
        view.set_query("fet");
        let rows = view.rows(&catalog());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].rank, 3);
    }

    #[test]
    fn test_rank_is_per_category() {
        let view = TableView::new(Category::Ai);
        let rows = view.rows(&catalog());
        assert_eq!(ids(&rows), vec!["bittensor", "fetch-ai"]);
        assert_eq!(rows[0].rank, 1);
    }

    #[test]
    fn test_tab_switch_resets_sort() {
        let mut view = TableView::default();
        view.click_header(SortKey::Price);
        assert!(view.sort.is_some());

        view.select_tab(Tab::Losers);
        assert_eq!(view.sort, None);
        let rows = view.rows(&catalog());
        assert_eq!(ids(&rows), vec!["bittensor", "bitcoin", "fetch-ai"]);
    }

    #[test]
    fn test_column_sort_overrides_tab() {
        let mut view = TableView::default();
        view.select_tab(Tab::Gainers);
        view.click_header(SortKey::Volume);
        let rows = view.rows(&catalog());
        assert_eq!(ids(&rows), vec!["bitcoin", "fetch-ai", "bittensor"]);
    }

    #[test]
    fn test_select_category_resets_state() {
        let mut view = TableView::default();
        view.set_query("btc");
        view.select_tab(Tab::Trending);

        view.select_category(Category::Ai);
        assert_eq!(view, TableView::new(Category::Ai));
    }

    #[test]
    fn test_empty_catalog() {
        let view = TableView::default();
        assert!(view.rows(&Catalog::default()).is_empty());
    }
}
