// ============================================================================
// Chart - Courbe de croissance du staking
// ============================================================================
// Affiche le solde (en devise d'affichage) au fil de la durée du stake
//
// CONCEPTS RATATUI :
// 1. Chart widget : graphique ligne
// 2. Dataset : série de données à afficher
// 3. Axis : configuration des axes X et Y
// ============================================================================

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::app::App;
use crate::calculator::ChartPoint;
use crate::format::format_money;
use crate::models::Fiat;

/// Dessine la courbe de staking de l'état courant
pub fn render_staking_chart(frame: &mut Frame, app: &App, area: Rect) {
    let series = app.staking_chart();

    // Pas de projection : message à la place du graphique
    if series.is_empty() {
        render_no_data(frame, area, "Projection chart appears once the form is complete");
        return;
    }

    let points = to_points(&series);
    let (y_min, y_max) = y_bounds(&points);
    let x_max = series.last().map(|p| p.day).unwrap_or(1.0).max(f64::EPSILON);
    let currency = app.display_currency;

    let datasets = vec![Dataset::default()
        .name("Balance")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(&points)];

    let x_axis = Axis::default()
        .title("Time")
        .style(Style::default().fg(Color::Gray))
        .bounds([0.0, x_max])
        .labels(x_labels(&series));

    let y_axis = Axis::default()
        .title(format!("Value ({})", currency.code()))
        .style(Style::default().fg(Color::Gray))
        .bounds([y_min, y_max])
        .labels(y_labels(currency, y_min, y_max));

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" Growth "),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}

/// Points (jour, valeur fiat) de la courbe
fn to_points(series: &[ChartPoint]) -> Vec<(f64, f64)> {
    series.iter().map(|p| (p.day, p.fiat)).collect()
}

/// Bornes de l'axe Y avec une marge de 5%
///
/// CONCEPT RUST : fold pour min/max en un seul passage
fn y_bounds(points: &[(f64, f64)]) -> (f64, f64) {
    let (min, max) = points.iter().fold((f64::MAX, f64::MIN), |(min, max), &(_, y)| {
        (min.min(y), max.max(y))
    });

    // Courbe plate (taux nul, prix nul) : on ouvre une fenêtre autour
    if (max - min).abs() < f64::EPSILON {
        return ((min - 1.0).max(0.0), max + 1.0);
    }

    let margin = (max - min) * 0.05;
    ((min - margin).max(0.0), max + margin)
}

/// Labels de l'axe X : début, milieu, fin
fn x_labels(series: &[ChartPoint]) -> Vec<Span<'static>> {
    let label = |index: usize| {
        series
            .get(index)
            .map(|p| p.label.clone())
            .unwrap_or_default()
    };
    let middle = series.len() / 2;
    vec![
        Span::raw(label(0)),
        Span::raw(label(middle)),
        Span::raw(label(series.len().saturating_sub(1))),
    ]
}

/// Labels de l'axe Y : min, milieu, max
fn y_labels(currency: Fiat, min: f64, max: f64) -> Vec<Span<'static>> {
    vec![
        Span::raw(format_money(currency, min)),
        Span::raw(format_money(currency, (min + max) / 2.0)),
        Span::raw(format_money(currency, max)),
    ]
}

/// Affiche un message quand il n'y a pas de données à afficher
fn render_no_data(frame: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Growth ");

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::Gray))),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Tests unitaires
// ============================================================================
