// ============================================================================
// Calculateurs - Rendu des écrans ROI, Staking et Convertisseur
// ============================================================================
// Chaque écran : formulaire à gauche, résultats à droite
// Les résultats sont recalculés à chaque rendu depuis l'état de App
// ============================================================================

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::calculator::{AmountUnit, Estimate, RoiForm, StakingForm};
use crate::format::{format_money, format_number};
use crate::models::Fiat;
use crate::ui::chart;

/// Placeholder affiché tant qu'un résultat n'est pas calculable
const PENDING: &str = "—";

// ============================================================================
// Helpers de mise en page
// ============================================================================

/// Découpe une zone en deux colonnes (formulaire | résultats)
fn split_columns(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area)
        .to_vec()
}

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", title))
}

/// Ligne "label : valeur" d'un champ texte, surlignée si elle a le focus
fn field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let (marker, style) = if focused {
        ("▶ ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    } else {
        ("  ", Style::default().fg(Color::White))
    };
    let cursor = if focused { "█" } else { "" };

    Line::from(vec![
        Span::styled(marker, style),
        Span::styled(format!("{:<18}", label), Style::default().fg(Color::Gray)),
        Span::styled(value, style),
        Span::styled(cursor, Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ])
}

/// Ligne "label : valeur" d'un résultat
fn result_line<'a>(label: &'a str, value: String, color: Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<20}", label), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])
}

/// Ligne d'option (toggle) : "label : valeur  [touche]"
fn option_line<'a>(label: &'a str, value: String, key: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{:<18}", label), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::Cyan)),
        Span::styled(format!("  {}", key), Style::default().fg(Color::DarkGray)),
    ])
}

fn profit_color(value: f64) -> Color {
    if value >= 0.0 {
        Color::Green
    } else {
        Color::Red
    }
}

/// Ligne indiquant le token et son prix de marché
fn token_line(app: &App) -> Line<'static> {
    let text = match app.calculator_coin() {
        Some(coin) => format!(
            "{} ({}) @ {}",
            coin.name,
            coin.symbol,
            format_money(app.display_currency, app.market_price())
        ),
        None => "No coin in catalog".to_string(),
    };
    option_line("Token", text, "[ ]")
}

// ============================================================================
// Écran ROI
// ============================================================================

pub fn render_roi(frame: &mut Frame, app: &App, area: Rect) {
    let columns = split_columns(area);
    let form = &app.roi_form;
    let currency = form.currency;

    // Formulaire
    let mut lines = vec![
        token_line(app),
        option_line("Currency", currency.code().to_string(), "[c]"),
        Line::from(""),
    ];
    for (i, label) in RoiForm::FIELD_LABELS.iter().enumerate() {
        lines.push(field_line(label, form.field(i), app.focused_field == i));
    }
    frame.render_widget(Paragraph::new(lines).block(panel("ROI calculator")), columns[0]);

    // Résultats
    let result = app.roi_result();
    let money = |value: f64| format_money(currency, value);
    let tokens = format!("{} {}", format_number(result.tokens_purchased), form.token);

    let mut lines = vec![
        result_line("Tokens purchased", tokens, Color::White),
        result_line("Total investment", money(result.total_investment), Color::White),
        result_line("Gross return", money(result.gross_return), Color::White),
        result_line("Net return", money(result.net_return), Color::White),
        result_line("Total fees", money(result.total_fees), Color::Yellow),
        Line::from(""),
    ];

    match result.profit {
        Estimate::Ready(profit) => {
            let color = profit_color(profit.absolute);
            let label = if profit.absolute >= 0.0 { "Profit" } else { "Loss" };
            lines.push(result_line(label, money(profit.absolute), color));
            lines.push(result_line("ROI", format!("{:+.2}%", profit.percentage), color));
        }
        Estimate::Pending => {
            lines.push(result_line("Profit", PENDING.to_string(), Color::DarkGray));
            lines.push(Line::from(Span::styled(
                "Enter buy and sell prices to compute the return",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines).block(panel("Results")), columns[1]);
}

// ============================================================================
// Écran Staking
// ============================================================================

pub fn render_staking(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(14), Constraint::Min(0)])
        .split(area)
        .to_vec();
    let columns = split_columns(rows[0]);

    let form = &app.staking_form;
    let currency = app.display_currency;

    // Formulaire
    let amount_unit = match form.amount_unit {
        AmountUnit::Token => app
            .calculator_coin()
            .map(|coin| coin.symbol.clone())
            .unwrap_or_else(|| "tokens".to_string()),
        AmountUnit::Fiat => currency.code().to_string(),
    };

    let mut lines = vec![
        token_line(app),
        option_line("Currency", currency.code().to_string(), "[c]"),
        option_line("Amount in", amount_unit, "[u]"),
        option_line("Rate basis", form.basis.label().to_string(), "[r]"),
        option_line("Compounding", form.compounding.label().to_string(), "[f]"),
        option_line("Duration unit", form.duration_unit.label().to_string(), "[d]"),
        Line::from(""),
    ];
    for (i, label) in StakingForm::FIELD_LABELS.iter().enumerate() {
        lines.push(field_line(label, form.field(i), app.focused_field == i));
    }
    frame.render_widget(Paragraph::new(lines).block(panel("Staking calculator")), columns[0]);

    // Résultats
    let lines = match app.staking_projection() {
        Estimate::Ready(projection) => {
            let bucket = |label: &'static str, tokens: f64, fiat: f64| {
                result_line(
                    label,
                    format!("{} tokens  ({})", format_number(tokens), format_money(currency, fiat)),
                    profit_color(tokens),
                )
            };
            vec![
                result_line(
                    "Effective APY",
                    format!("{:.2}%", projection.effective_rate * 100.0),
                    Color::Cyan,
                ),
                result_line(
                    "Principal",
                    format!("{} tokens", format_number(projection.principal)),
                    Color::White,
                ),
                result_line(
                    "Final balance",
                    format!(
                        "{} tokens  ({})",
                        format_number(projection.final_tokens),
                        format_money(currency, projection.final_tokens * projection.display_price)
                    ),
                    Color::White,
                ),
                Line::from(""),
                bucket("Daily (avg)", projection.daily.tokens, projection.daily.fiat),
                bucket("Monthly (avg)", projection.monthly.tokens, projection.monthly.fiat),
                bucket("Yearly (avg)", projection.yearly.tokens, projection.yearly.fiat),
                bucket("Total return", projection.total.tokens, projection.total.fiat),
            ]
        }
        Estimate::Pending => vec![
            result_line("Total return", PENDING.to_string(), Color::DarkGray),
            Line::from(Span::styled(
                "Enter amount, rate and duration to project rewards",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };
    frame.render_widget(Paragraph::new(lines).block(panel("Projected rewards")), columns[1]);

    chart::render_staking_chart(frame, app, rows[1]);
}

// ============================================================================
// Écran Convertisseur
// ============================================================================

pub fn render_converter(frame: &mut Frame, app: &App, area: Rect) {
    let columns = split_columns(area);
    let converter = &app.converter;

    let lines = vec![
        option_line("From", converter.from.to_string(), "[ ]"),
        field_line("Amount", &converter.from_text, app.focused_field == 0),
        Line::from(""),
        option_line("To", converter.to.to_string(), "[ ]"),
        field_line("Amount", &converter.to_text, app.focused_field == 1),
    ];
    frame.render_widget(Paragraph::new(lines).block(panel("Converter")), columns[0]);

    let rate = match converter.unit_rate(&app.catalog) {
        Estimate::Ready(rate) => format!("1 {} = {} {}", converter.from, format_number(rate), converter.to),
        Estimate::Pending => format!("No price for {}", converter.to),
    };

    let mut lines = vec![result_line("Rate", rate, Color::Cyan), Line::from("")];
    lines.extend(Fiat::ALL.iter().map(|fiat| {
        option_line(
            fiat.code(),
            format!("{} per USD", format_number(1.0 / fiat.usd_rate())),
            fiat.symbol(),
        )
    }));
    frame.render_widget(Paragraph::new(lines).block(panel("Rates")), columns[1]);
}
