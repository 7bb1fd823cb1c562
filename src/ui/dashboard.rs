// ============================================================================
// Dashboard - Rendu de l'interface principale
// ============================================================================
// Dessine l'interface TUI en utilisant les widgets de ratatui
//
// Écran tableau :
//   header (titre de la catégorie, date du catalogue)
//   overview (totaux et top 3)
//   onglets (Top, Trending, Gainers, Losers)
//   tableau des coins
//   footer (raccourcis ou ligne de recherche)
//
// CONCEPTS RATATUI :
// 1. Layout : découpage de l'espace en zones
// 2. Table : lignes et colonnes avec en-têtes
// 3. Tabs : barre d'onglets avec sélection
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Tabs},
    Frame,
};

use crate::app::{App, Screen};
use crate::format::{format_compact, format_number, format_percent};
use crate::models::CoinRecord;
use crate::table::{SortKey, Tab, TableRow};
use crate::ui::calculator;

// ============================================================================
// Fonction principale de rendu
// ============================================================================

/// Dessine l'interface complète
///
/// CONCEPT RUST : Routing avec match sur enum
/// - Le compilateur garantit l'exhaustivité (tous les écrans gérés)
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Barre des écrans
            Constraint::Min(0),    // Contenu
            Constraint::Length(3), // Footer
        ])
        .split(frame.size())
        .to_vec();

    render_screen_bar(frame, app, chunks[0]);

    match app.current_screen {
        Screen::Table => render_table_screen(frame, app, chunks[1]),
        Screen::Roi => calculator::render_roi(frame, app, chunks[1]),
        Screen::Staking => calculator::render_staking(frame, app, chunks[1]),
        Screen::Converter => calculator::render_converter(frame, app, chunks[1]),
    }

    if app.is_in_input_mode() {
        render_input_footer(frame, app, chunks[2]);
    } else {
        render_footer(frame, app, chunks[2]);
    }
}

/// Barre de sélection des écrans (Tab pour changer)
fn render_screen_bar(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Screen::ALL.iter().map(|s| Line::from(s.label())).collect();
    let selected = Screen::ALL
        .iter()
        .position(|s| *s == app.current_screen)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Coinboard ")
                .title_alignment(Alignment::Center),
        )
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

// ============================================================================
// Écran tableau
// ============================================================================

fn render_table_screen(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Titre de la catégorie
            Constraint::Length(6), // Overview
            Constraint::Length(3), // Onglets
            Constraint::Min(0),    // Tableau
        ])
        .split(area)
        .to_vec();

    render_header(frame, app, chunks[0]);
    render_overview(frame, app, chunks[1]);
    render_tabs(frame, app, chunks[2]);
    render_table(frame, app, chunks[3]);
}

/// Titre de la catégorie et date du catalogue
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let updated = app
        .catalog
        .updated_at
        .map(|date| date.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let line = Line::from(vec![
        Span::styled(
            app.table.category.title(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("[{}]", app.table.category.label()),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("   "),
        Span::styled(format!("Data: {}", updated), Style::default().fg(Color::Gray)),
    ]);

    let paragraph = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Totaux et top 3 de la catégorie
fn render_overview(frame: &mut Frame, app: &App, area: Rect) {
    let overview = app.overview();

    let names = |coins: &[CoinRecord]| -> String {
        if coins.is_empty() {
            return "-".to_string();
        }
        coins
            .iter()
            .map(|c| c.symbol.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let label = Style::default().fg(Color::Gray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let text = vec![
        Line::from(vec![
            Span::styled("Market cap: ", label),
            Span::styled(format_compact(overview.total_market_cap), value),
            Span::raw("    "),
            Span::styled("24h volume: ", label),
            Span::styled(format_compact(overview.total_volume), value),
        ]),
        Line::from(vec![
            Span::styled("🔥 Trending: ", label),
            Span::raw(names(&overview.trending)),
        ]),
        Line::from(vec![
            Span::styled("🚀 Top gainers: ", label),
            Span::styled(names(&overview.top_gainers), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("🏦 Largest: ", label),
            Span::raw(names(&overview.largest)),
        ]),
    ];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Overview "),
    );

    frame.render_widget(paragraph, area);
}

/// Barre d'onglets Top / Trending / Gainers / Losers
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.label())))
        .collect();
    let selected = Tab::ALL.iter().position(|t| *t == app.table.tab).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

    frame.render_widget(tabs, area);
}

/// Tableau des coins
///
/// CONCEPT RATATUI : Table + TableState
/// - TableState porte la ligne sélectionnée (et le scroll)
/// - render_stateful_widget() fait défiler pour garder la sélection visible
fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let rows = app.rows();
    let title = if app.table.query.is_empty() {
        format!(" {} coins ", rows.len())
    } else {
        format!(" {} coins matching \"{}\" ", rows.len(), app.table.query)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);

    if rows.is_empty() {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No coins found", Style::default().fg(Color::Gray))),
        ])
        .block(block)
        .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(SortKey::ALL.iter().map(|key| header_cell(app, *key)))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let body: Vec<Row> = rows.iter().map(table_row).collect();

    let widths = [
        Constraint::Length(4),  // #
        Constraint::Min(20),    // Coin
        Constraint::Length(16), // Prix
        Constraint::Length(11), // 1h
        Constraint::Length(11), // 24h
        Constraint::Length(11), // 7d
        Constraint::Length(11), // Volume
        Constraint::Length(11), // Market cap
    ];

    let table = Table::new(body, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(table, area, &mut state);
}

/// En-tête de colonne : flèche si triée, couleur si sous le curseur
fn header_cell(app: &App, key: SortKey) -> Cell<'static> {
    let arrow = match app.table.sort {
        Some(sort) if sort.key == key => sort.direction.arrow(),
        _ => "",
    };

    let style = if app.cursor_key() == key {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default().fg(Color::Yellow)
    };

    Cell::from(format!("{}{}", key.header(), arrow)).style(style)
}

/// Une ligne du tableau
fn table_row(row: &TableRow) -> Row<'static> {
    let coin = &row.coin;
    let change = |value: f64| {
        let color = if value >= 0.0 { Color::Green } else { Color::Red };
        Cell::from(format_percent(value)).style(Style::default().fg(color))
    };

    Row::new(vec![
        Cell::from(row.rank.to_string()),
        Cell::from(format!("{} ({})", coin.name, coin.symbol)),
        Cell::from(format!("${}", format_number(coin.price))),
        change(coin.change_1h),
        change(coin.change_24h),
        change(coin.change_7d),
        Cell::from(format_compact(coin.volume)),
        Cell::from(format_compact(coin.market_cap)),
    ])
}

// ============================================================================
// Footer : Instructions
// ============================================================================

/// Style d'une touche dans le footer
fn key_style(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Dessine le footer avec les raccourcis clavier
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let shortcuts = if app.is_awaiting_quit_confirmation() {
        Line::from(vec![
            Span::styled("⚠  Appuyez sur ", key_style(Color::Yellow)),
            Span::styled(
                "[q]",
                key_style(Color::Red).add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::styled(
                " à nouveau pour quitter, ou n'importe quelle autre touche pour annuler ⚠",
                key_style(Color::Yellow),
            ),
        ])
    } else {
        let keys: &[(&str, &str)] = match app.current_screen {
            Screen::Table => &[
                ("[q]", " Quit  "),
                ("[Tab]", " Screen  "),
                ("[1-4]", " Tab  "),
                ("[[ ]]", " Category  "),
                ("[↑↓]", " Select  "),
                ("[←→ s]", " Sort  "),
                ("[/]", " Search  "),
                ("[Enter]", " ROI"),
            ],
            Screen::Roi => &[
                ("[q]", " Quit  "),
                ("[Tab]", " Screen  "),
                ("[↑↓]", " Field  "),
                ("[[ ]]", " Token  "),
                ("[c]", " Currency"),
            ],
            Screen::Staking => &[
                ("[q]", " Quit  "),
                ("[Tab]", " Screen  "),
                ("[↑↓]", " Field  "),
                ("[[ ]]", " Token  "),
                ("[u]", " Unit  "),
                ("[r]", " APR/APY  "),
                ("[f]", " Compounding  "),
                ("[d]", " Duration  "),
                ("[c]", " Currency"),
            ],
            Screen::Converter => &[
                ("[q]", " Quit  "),
                ("[Tab]", " Screen  "),
                ("[↑↓]", " Side  "),
                ("[[ ]]", " Asset  "),
                ("[x]", " Swap"),
            ],
        };

        Line::from(
            keys.iter()
                .flat_map(|(key, label)| {
                    [
                        Span::styled(*key, key_style(Color::Yellow)),
                        Span::raw(*label),
                    ]
                })
                .collect::<Vec<_>>(),
        )
    };

    let paragraph = Paragraph::new(vec![shortcuts])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Dessine le footer en mode recherche avec la ligne de saisie
fn render_input_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green)); // Vert pour indiquer mode input

    let input_line = Line::from(vec![
        Span::styled("Search: ", key_style(Color::Cyan)),
        Span::styled(app.table.query.as_str(), Style::default().fg(Color::White)),
        Span::styled(
            "█", // Curseur
            Style::default().fg(Color::White).add_modifier(Modifier::SLOW_BLINK),
        ),
        Span::raw("   "),
        Span::styled("[Enter]", key_style(Color::Green)),
        Span::raw(" Keep  "),
        Span::styled("[ESC]", key_style(Color::Red)),
        Span::raw(" Cancel"),
    ]);

    let paragraph = Paragraph::new(input_line)
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}
