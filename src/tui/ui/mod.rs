//! UI module: View components for the TUI.

pub mod dashboard;
pub mod dataset;
pub mod form;
pub mod metrics;
pub mod submission;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::styles::WellnessTheme;

pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(vec![Span::styled(
            "DISCLAIMER: This tool provides indicative estimates and does not replace professional mental health support.",
            WellnessTheme::text_muted(),
        )]),
        Line::from(vec![Span::styled(
            "If you are struggling, please reach out to a counselor or someone you trust.",
            WellnessTheme::text_muted(),
        )]),
    ];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(WellnessTheme::border());

    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(p, area);
}
