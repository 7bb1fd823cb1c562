// ============================================================================
// Structure : App
// ============================================================================
// Gère l'état global de l'application TUI
//
// CONCEPTS RUST :
// 1. State Management : centraliser l'état dans une seule structure
// 2. Mutabilité contrôlée : &mut self pour modifier l'état
// 3. Pull model : les résultats (lignes, ROI, projection) ne sont jamais
//    stockés, ils sont recalculés depuis l'état à chaque rendu
//
// PATTERN : Cette structure suit le pattern "Application State"
// - Tous les composants de l'UI lisent depuis App
// - Toutes les modifications passent par les méthodes de App
// ============================================================================

use crate::calculator::{
    chart_series, project, Asset, ChartPoint, Converter, Estimate, RoiForm, RoiResult,
    StakingForm, StakingParams, StakingProjection,
};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::format::usd_to;
use crate::models::{Category, CoinRecord, Fiat};
use crate::table::{CategoryOverview, SortKey, Tab, TableRow, TableView};

// ============================================================================
// Enum : Screen
// ============================================================================
// CONCEPT RUST : Enums pour state machines
// - Un seul écran actif à la fois
// - Tab fait défiler les écrans dans l'ordre de ALL
// ============================================================================

/// Écrans de l'application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Tableau des coins d'une catégorie
    Table,

    /// Calculateur de ROI
    Roi,

    /// Calculateur de staking
    Staking,

    /// Convertisseur crypto <-> fiat
    Converter,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Table, Screen::Roi, Screen::Staking, Screen::Converter];

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Table => "Market",
            Screen::Roi => "ROI",
            Screen::Staking => "Staking",
            Screen::Converter => "Converter",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Screen {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Screen {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

/// État principal de l'application
pub struct App {
    /// Indique si l'application doit continuer à tourner
    pub running: bool,

    /// Catalogue de coins (injecté au démarrage)
    pub catalog: Catalog,

    /// Écran actuellement affiché
    pub current_screen: Screen,

    /// Indique si l'utilisateur a demandé à quitter (attend confirmation)
    /// CONCEPT : Two-step quit pour éviter les sorties accidentelles
    /// - Première pression de 'q' : confirm_quit = true
    /// - Deuxième pression de 'q' : running = false (quit réel)
    /// - N'importe quelle autre touche : confirm_quit = false (annulation)
    pub confirm_quit: bool,

    // ------------------------------------------------------------------------
    // Tableau
    // ------------------------------------------------------------------------
    /// Catégorie, onglet, recherche et tri
    pub table: TableView,

    /// Index de la ligne sélectionnée
    pub selected_index: usize,

    /// Colonne sous le curseur (index dans SortKey::ALL)
    pub column_cursor: usize,

    /// Mode saisie de la recherche
    /// CONCEPT : Modal input (Vim-like)
    /// - La recherche est appliquée à chaque touche
    /// - Enter garde la recherche, ESC restaure la précédente
    pub searching: bool,

    /// Recherche active avant d'entrer en mode saisie (pour ESC)
    previous_query: String,

    // ------------------------------------------------------------------------
    // Calculateurs
    // ------------------------------------------------------------------------
    /// Devise d'affichage des calculateurs
    pub display_currency: Fiat,

    /// Coin utilisé par les calculateurs (index dans le catalogue)
    pub calc_coin: usize,

    /// Champ ayant le focus sur l'écran courant
    pub focused_field: usize,

    pub roi_form: RoiForm,
    pub staking_form: StakingForm,
    pub converter: Converter,

    /// Actifs proposés par le convertisseur
    pub asset_options: Vec<Asset>,

    /// Nombre de points de la courbe de staking
    pub chart_points: usize,
}

impl App {
    /// Crée l'application à partir d'un catalogue et de la configuration
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        let asset_options = Asset::options(&catalog);
        let mut app = Self {
            running: true,
            current_screen: Screen::Table,
            confirm_quit: false,
            table: TableView::new(config.default_category),
            selected_index: 0,
            column_cursor: 0,
            searching: false,
            previous_query: String::new(),
            display_currency: config.display_currency,
            calc_coin: 0,
            focused_field: 0,
            roi_form: RoiForm::default(),
            staking_form: StakingForm::default(),
            converter: Converter::default(),
            asset_options,
            chart_points: config.chart_points,
            catalog,
        };
        app.sync_calculator_coin();
        app
    }

    /// Quitte l'application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Vérifie si l'application doit continuer
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Demande la confirmation de quitter
    pub fn request_quit(&mut self) {
        self.confirm_quit = true;
    }

    /// Annule la demande de quit
    pub fn cancel_quit(&mut self) {
        self.confirm_quit = false;
    }

    /// Vérifie si on attend la confirmation de quit
    pub fn is_awaiting_quit_confirmation(&self) -> bool {
        self.confirm_quit
    }

    // ========================================================================
    // Écrans
    // ========================================================================

    /// Passe à l'écran suivant
    pub fn next_screen(&mut self) {
        self.show_screen(self.current_screen.next());
    }

    /// Passe à l'écran précédent
    pub fn previous_screen(&mut self) {
        self.show_screen(self.current_screen.previous());
    }

    /// Affiche un écran donné (le focus revient au premier champ)
    pub fn show_screen(&mut self, screen: Screen) {
        self.current_screen = screen;
        self.focused_field = 0;
    }

    // ========================================================================
    // Tableau
    // ========================================================================

    /// Lignes visibles du tableau (recalculées à chaque appel)
    pub fn rows(&self) -> Vec<TableRow> {
        self.table.rows(&self.catalog)
    }

    /// Résumé de la catégorie courante
    pub fn overview(&self) -> CategoryOverview {
        CategoryOverview::from_coins(&self.catalog.in_category(self.table.category))
    }

    /// Coin de la ligne sélectionnée
    pub fn selected_row(&self) -> Option<TableRow> {
        self.rows().into_iter().nth(self.selected_index)
    }

    /// Navigue vers le haut dans le tableau
    ///
    /// CONCEPT RUST : Saturating arithmetic
    /// - saturating_sub() : soustrait mais ne descend pas en dessous de 0
    pub fn navigate_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Navigue vers le bas dans le tableau
    pub fn navigate_down(&mut self) {
        let max_index = self.rows().len().saturating_sub(1);
        self.selected_index = (self.selected_index + 1).min(max_index);
    }

    /// Ramène la sélection dans les bornes après un filtrage
    fn clamp_selection(&mut self) {
        let max_index = self.rows().len().saturating_sub(1);
        self.selected_index = self.selected_index.min(max_index);
    }

    /// Sélectionne un onglet (Top, Trending, Gainers, Losers)
    pub fn select_tab(&mut self, tab: Tab) {
        self.table.select_tab(tab);
        self.selected_index = 0;
    }

    /// Catégorie suivante
    pub fn next_category(&mut self) {
        self.select_category(self.table.category.next());
    }

    /// Catégorie précédente
    pub fn previous_category(&mut self) {
        self.select_category(self.table.category.previous());
    }

    fn select_category(&mut self, category: Category) {
        self.table.select_category(category);
        self.selected_index = 0;
    }

    /// Déplace le curseur de colonne vers la gauche
    pub fn column_left(&mut self) {
        self.column_cursor = self.column_cursor.saturating_sub(1);
    }

    /// Déplace le curseur de colonne vers la droite
    pub fn column_right(&mut self) {
        self.column_cursor = (self.column_cursor + 1).min(SortKey::ALL.len() - 1);
    }

    /// Colonne sous le curseur
    pub fn cursor_key(&self) -> SortKey {
        SortKey::ALL[self.column_cursor.min(SortKey::ALL.len() - 1)]
    }

    /// Trie (ou inverse le tri) sur la colonne sous le curseur
    pub fn sort_by_cursor(&mut self) {
        self.table.click_header(self.cursor_key());
    }

    // ========================================================================
    // Recherche (mode saisie)
    // ========================================================================

    /// Entre en mode recherche
    pub fn start_input(&mut self) {
        self.searching = true;
        self.previous_query = self.table.query.clone();
    }

    /// Annule la saisie et restaure la recherche précédente
    pub fn cancel_input(&mut self) {
        self.searching = false;
        let previous = std::mem::take(&mut self.previous_query);
        self.table.set_query(previous);
        self.clamp_selection();
    }

    /// Valide la saisie et retourne la recherche retenue
    pub fn submit_input(&mut self) -> String {
        self.searching = false;
        self.previous_query.clear();
        self.table.query.clone()
    }

    /// Ajoute un caractère à la recherche
    pub fn append_char(&mut self, c: char) {
        self.table.query.push(c);
        self.selected_index = 0;
    }

    /// Supprime le dernier caractère de la recherche
    pub fn backspace(&mut self) {
        self.table.query.pop();
        self.clamp_selection();
    }

    /// Vérifie si on est en mode saisie
    pub fn is_in_input_mode(&self) -> bool {
        self.searching
    }

    // ========================================================================
    // Calculateurs
    // ========================================================================

    /// Coin utilisé par les calculateurs
    pub fn calculator_coin(&self) -> Option<&CoinRecord> {
        self.catalog.coins().get(self.calc_coin)
    }

    /// Prix du coin des calculateurs dans la devise d'affichage (0 si aucun)
    pub fn market_price(&self) -> f64 {
        self.calculator_coin()
            .map(|coin| usd_to(self.display_currency, coin.price))
            .unwrap_or(0.0)
    }

    /// Coin suivant pour les calculateurs
    pub fn next_calculator_coin(&mut self) {
        if !self.catalog.is_empty() {
            self.calc_coin = (self.calc_coin + 1) % self.catalog.len();
            self.sync_calculator_coin();
        }
    }

    /// Coin précédent pour les calculateurs
    pub fn previous_calculator_coin(&mut self) {
        let len = self.catalog.len();
        if len > 0 {
            self.calc_coin = (self.calc_coin + len - 1) % len;
            self.sync_calculator_coin();
        }
    }

    /// Ouvre le calculateur de ROI sur le coin sélectionné du tableau
    pub fn open_roi_for_selection(&mut self) {
        if let Some(row) = self.selected_row() {
            if let Some(index) = self.catalog.coins().iter().position(|c| c.id == row.coin.id) {
                self.calc_coin = index;
                self.sync_calculator_coin();
            }
        }
        self.show_screen(Screen::Roi);
    }

    /// Devise d'affichage suivante
    pub fn next_currency(&mut self) {
        self.display_currency = self.display_currency.next();
        self.roi_form.currency = self.display_currency;
    }

    /// Recopie le coin et la devise dans le formulaire ROI
    fn sync_calculator_coin(&mut self) {
        let token = self
            .calculator_coin()
            .map(|coin| coin.symbol.clone())
            .unwrap_or_default();
        self.roi_form.token = token;
        self.roi_form.currency = self.display_currency;
    }

    /// Nombre de champs texte de l'écran courant
    pub fn field_count(&self) -> usize {
        match self.current_screen {
            Screen::Table => 0,
            Screen::Roi => RoiForm::FIELD_LABELS.len(),
            Screen::Staking => StakingForm::FIELD_LABELS.len(),
            Screen::Converter => 2,
        }
    }

    /// Champ précédent
    pub fn focus_up(&mut self) {
        self.focused_field = self.focused_field.saturating_sub(1);
    }

    /// Champ suivant
    pub fn focus_down(&mut self) {
        let max_index = self.field_count().saturating_sub(1);
        self.focused_field = (self.focused_field + 1).min(max_index);
    }

    /// Tape un caractère dans le champ qui a le focus
    pub fn type_char(&mut self, c: char) {
        self.edit_focused(|text| text.push(c));
    }

    /// Efface le dernier caractère du champ qui a le focus
    pub fn erase_char(&mut self) {
        self.edit_focused(|text| {
            text.pop();
        });
    }

    /// Applique une modification au champ qui a le focus
    ///
    /// CONCEPT RUST : FnOnce(&mut String)
    /// - La closure reçoit le champ à modifier
    /// - Le convertisseur recalcule ensuite le côté opposé
    fn edit_focused<F: FnOnce(&mut String)>(&mut self, edit: F) {
        let index = self.focused_field;
        match self.current_screen {
            Screen::Table => {}
            Screen::Roi => {
                if let Some(field) = self.roi_form.field_mut(index) {
                    edit(field);
                }
            }
            Screen::Staking => {
                if let Some(field) = self.staking_form.field_mut(index) {
                    edit(field);
                }
            }
            Screen::Converter => {
                if index == 0 {
                    let mut text = self.converter.from_text.clone();
                    edit(&mut text);
                    self.converter.set_from_text(&text, &self.catalog);
                } else {
                    let mut text = self.converter.to_text.clone();
                    edit(&mut text);
                    self.converter.set_to_text(&text, &self.catalog);
                }
            }
        }
    }

    /// Résultat ROI courant
    pub fn roi_result(&self) -> RoiResult {
        self.roi_form.result()
    }

    /// Paramètres de staking courants (prix du coin des calculateurs)
    pub fn staking_params(&self) -> StakingParams {
        self.staking_form.params(self.market_price())
    }

    /// Projection de staking courante
    pub fn staking_projection(&self) -> Estimate<StakingProjection> {
        project(&self.staking_params())
    }

    /// Courbe de staking courante
    pub fn staking_chart(&self) -> Vec<ChartPoint> {
        chart_series(&self.staking_params(), self.chart_points)
    }

    /// Actif suivant pour le côté du convertisseur qui a le focus
    pub fn next_asset(&mut self) {
        self.cycle_asset(1);
    }

    /// Actif précédent pour le côté du convertisseur qui a le focus
    pub fn previous_asset(&mut self) {
        self.cycle_asset(self.asset_options.len().saturating_sub(1));
    }

    fn cycle_asset(&mut self, step: usize) {
        let len = self.asset_options.len();
        if len == 0 {
            return;
        }
        let current = if self.focused_field == 0 {
            &self.converter.from
        } else {
            &self.converter.to
        };
        let index = self
            .asset_options
            .iter()
            .position(|asset| asset == current)
            .unwrap_or(0);
        let asset = self.asset_options[(index + step) % len].clone();

        if self.focused_field == 0 {
            self.converter.set_from(asset, &self.catalog);
        } else {
            self.converter.set_to(asset, &self.catalog);
        }
    }

    /// Inverse les deux côtés du convertisseur
    pub fn swap_converter(&mut self) {
        self.converter.swap();
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::AmountUnit;

    fn app() -> App {
        let catalog = Catalog::new(vec![
            CoinRecord::new("bitcoin", "Bitcoin", "BTC", 50_000.0, 1.0e12)
                .with_volume(3.0e10)
                .with_changes(0.1, 1.0, 2.0)
                .with_categories(["layer-1"]),
            CoinRecord::new("ethereum", "Ethereum", "ETH", 2_500.0, 3.0e11)
                .with_volume(1.0e10)
                .with_changes(0.3, 4.0, -1.0)
                .with_categories(["layer-1", "smart-contracts"]),
            CoinRecord::new("fetch-ai", "Fetch.ai", "FET", 2.0, 1.0e9)
                .with_volume(2.0e8)
                .with_changes(1.0, -5.0, 10.0)
                .with_categories(["ai"]),
        ]);
        App::new(catalog, &Config::default())
    }

    #[test]
    fn test_app_creation() {
        let app = app();
        assert!(app.is_running());
        assert_eq!(app.current_screen, Screen::Table);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.roi_form.token, "BTC");
        assert_eq!(app.rows().len(), 3);
    }

    #[test]
    fn test_app_quit() {
        let mut app = app();
        app.request_quit();
        assert!(app.is_awaiting_quit_confirmation());
        app.cancel_quit();
        assert!(!app.is_awaiting_quit_confirmation());

        app.quit();
        assert!(!app.is_running());
    }

    #[test]
    fn test_navigation() {
        let mut app = app();

        app.navigate_down();
        app.navigate_down();
        assert_eq!(app.selected_index, 2);

        // Navigate down au max : reste à 2
        app.navigate_down();
        assert_eq!(app.selected_index, 2);

        app.navigate_up();
        app.navigate_up();
        app.navigate_up();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_screen_cycle() {
        let mut app = app();
        app.focused_field = 3;
        app.next_screen();
        assert_eq!(app.current_screen, Screen::Roi);
        assert_eq!(app.focused_field, 0);

        app.previous_screen();
        app.previous_screen();
        assert_eq!(app.current_screen, Screen::Converter);
    }

    #[test]
    fn test_search_mode() {
        let mut app = app();
        app.start_input();
        for c in "eth".chars() {
            app.append_char(c);
        }
        assert!(app.is_in_input_mode());
        assert_eq!(app.rows().len(), 1);

        app.cancel_input();
        assert!(!app.is_in_input_mode());
        assert_eq!(app.table.query, "");
        assert_eq!(app.rows().len(), 3);

        app.start_input();
        app.append_char('f');
        assert_eq!(app.submit_input(), "f");
        assert_eq!(app.rows()[0].coin.symbol, "FET");
    }

    #[test]
    fn test_column_cursor_sort() {
        let mut app = app();
        app.column_left();
        assert_eq!(app.cursor_key(), SortKey::Rank);

        for _ in 0..20 {
            app.column_right();
        }
        assert_eq!(app.cursor_key(), SortKey::MarketCap);

        // Même colonne que le tri initial : inversion
        app.sort_by_cursor();
        let symbols: Vec<String> = app.rows().into_iter().map(|r| r.coin.symbol).collect();
        assert_eq!(symbols, vec!["FET", "ETH", "BTC"]);
    }

    #[test]
    fn test_category_change_resets_selection() {
        let mut app = app();
        app.navigate_down();
        app.next_category();
        assert_eq!(app.table.category, Category::Eth);
        assert_eq!(app.selected_index, 0);

        app.previous_category();
        app.previous_category();
        assert_eq!(app.table.category, Category::Nft);
    }

    #[test]
    fn test_open_roi_for_selection() {
        let mut app = app();
        app.select_tab(Tab::Gainers);
        app.open_roi_for_selection();
        assert_eq!(app.current_screen, Screen::Roi);
        assert_eq!(app.roi_form.token, "ETH");
    }

    #[test]
    fn test_typing_into_roi_form() {
        let mut app = app();
        app.show_screen(Screen::Roi);
        for c in "1000".chars() {
            app.type_char(c);
        }
        app.focus_down();
        app.type_char('5');
        app.type_char('0');
        app.erase_char();
        assert_eq!(app.roi_form.amount, "1000");
        assert_eq!(app.roi_form.buy_price, "5");

        for _ in 0..10 {
            app.focus_down();
        }
        assert_eq!(app.focused_field, 4);
    }

    #[test]
    fn test_staking_uses_market_price_in_display_currency() {
        let mut app = app();
        app.staking_form.amount_unit = AmountUnit::Fiat;
        app.staking_form.amount = "100000".to_string();
        app.staking_form.rate = "5".to_string();
        app.staking_form.duration = "365".to_string();

        let projection = app.staking_projection().unwrap_or_default();
        assert_eq!(projection.principal, 2.0);

        app.next_currency();
        assert_eq!(app.display_currency, Fiat::Eur);
        assert_eq!(app.roi_form.currency, Fiat::Eur);
        assert!((app.market_price() - 50_000.0 / 1.08).abs() < 1e-6);
        assert!(!app.staking_chart().is_empty());
    }

    #[test]
    fn test_converter_editing() {
        let mut app = app();
        app.show_screen(Screen::Converter);
        app.type_char('2');
        assert_eq!(app.converter.to_text, "100000.00000000");

        app.focus_down();
        app.erase_char();
        assert_eq!(app.converter.to_text, "100000.0000000");
        // Options : AUD BTC CAD ETH EUR FET GBP JPY USD
        app.previous_asset();
        assert_eq!(app.converter.to, Asset::Fiat(Fiat::Jpy));

        app.swap_converter();
        assert_eq!(app.converter.from, Asset::Fiat(Fiat::Jpy));
        assert_eq!(app.converter.to, Asset::Coin("BTC".to_string()));

        app.next_asset();
        assert_eq!(app.converter.to, Asset::Fiat(Fiat::Cad));
    }

    #[test]
    fn test_calculator_coin_cycle() {
        let mut app = app();
        app.previous_calculator_coin();
        assert_eq!(app.roi_form.token, "FET");
        app.next_calculator_coin();
        assert_eq!(app.roi_form.token, "BTC");
    }
}
