//! Model scores view: the published offline evaluation table.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::domain::MODEL_SCORES;
use crate::tui::styles::WellnessTheme;

/// Render the model scores view
pub fn render_metrics(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Table
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_table(f, chunks[1]);
    render_footer(f, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", WellnessTheme::text()),
        Span::styled("Model Scores", WellnessTheme::title()),
        Span::styled(
            " │ Offline evaluation of candidate models",
            WellnessTheme::text_secondary(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(WellnessTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_table(f: &mut Frame, area: Rect) {
    let header = Row::new(
        ["Model", "Accuracy", "F1 Score", "Recall", "Precision"]
            .iter()
            .map(|c| Cell::from(*c).style(WellnessTheme::subtitle())),
    );

    let rows = MODEL_SCORES.iter().map(|score| {
        Row::new(vec![
            Cell::from(score.name).style(WellnessTheme::text()),
            Cell::from(format!("{:.2}", score.accuracy)).style(WellnessTheme::text()),
            Cell::from(format!("{:.2}", score.f1)).style(WellnessTheme::text()),
            Cell::from(format!("{:.2}", score.recall)).style(WellnessTheme::text()),
            Cell::from(format!("{:.2}", score.precision)).style(WellnessTheme::text()),
        ])
    });

    let widths = [
        Constraint::Length(16),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
    ];
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(Span::styled(
                " Pre-computed, not measured at runtime ",
                WellnessTheme::text_muted(),
            ))
            .borders(Borders::ALL)
            .border_style(WellnessTheme::border()),
    );

    f.render_widget(table, area);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("[Esc] ", WellnessTheme::key_hint()),
        Span::styled("Back", WellnessTheme::key_desc()),
    ]))
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(WellnessTheme::border()),
    );

    f.render_widget(footer, area);
}
