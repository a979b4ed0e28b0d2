//! Submission progress and result view.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::application::SubmissionOutcome;
use crate::domain::StressClass;
use crate::tui::styles::WellnessTheme;

/// Submission view state
#[derive(Debug, Clone)]
pub enum SubmissionViewState {
    /// Not started
    Idle,
    /// Request in flight
    Sending { progress: f64 },
    /// Completed with resolved outcome
    Complete { outcome: SubmissionOutcome },
    /// Error occurred
    Error { message: String },
}

impl Default for SubmissionViewState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Render the submission view
pub fn render_submission(f: &mut Frame, area: Rect, state: &SubmissionViewState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_content(f, chunks[1], state);
    render_footer(f, chunks[2], state);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", WellnessTheme::text()),
        Span::styled("Stress Analysis", WellnessTheme::title()),
        Span::styled(" │ Prediction Result", WellnessTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(WellnessTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_content(f: &mut Frame, area: Rect, state: &SubmissionViewState) {
    match state {
        SubmissionViewState::Idle => render_idle(f, area),
        SubmissionViewState::Sending { progress } => render_progress(f, area, *progress),
        SubmissionViewState::Complete { outcome } => render_result(f, area, outcome),
        SubmissionViewState::Error { message } => render_error(f, area, message),
    }
}

fn render_idle(f: &mut Frame, area: Rect) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Ready to analyze your stress level",
            WellnessTheme::text_secondary(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Fill in the assessment to begin",
            WellnessTheme::text_muted(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(WellnessTheme::border()),
    );

    f.render_widget(content, area);
}

fn render_progress(f: &mut Frame, area: Rect, progress: f64) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .margin(2)
        .split(area);

    let stage_text = Paragraph::new(Line::from(vec![
        Span::styled("Stage: ", WellnessTheme::text_secondary()),
        Span::styled("Analyzing", WellnessTheme::focused()),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(stage_text, chunks[0]);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(WellnessTheme::border()),
        )
        .gauge_style(WellnessTheme::info())
        .percent((progress * 100.0) as u16)
        .label(format!("{:.0}%", progress * 100.0));
    f.render_widget(gauge, chunks[1]);

    let desc = Paragraph::new(Line::from(Span::styled(
        "Contacting prediction service...",
        WellnessTheme::text_muted(),
    )))
    .alignment(Alignment::Center);
    f.render_widget(desc, chunks[2]);
}

fn render_result(f: &mut Frame, area: Rect, outcome: &SubmissionOutcome) {
    let block = Block::default()
        .title(Span::styled(" Your Result ", WellnessTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(WellnessTheme::border_focused());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Category
            Constraint::Length(5), // Recommendations
            Constraint::Length(5), // Probabilities
            Constraint::Min(0),    // Fallback note / padding
        ])
        .margin(1)
        .split(inner);

    let class_style = WellnessTheme::stress_class(outcome.class);
    let class_display = Paragraph::new(vec![
        Line::from(Span::styled(
            outcome.class.title(),
            class_style.add_modifier(ratatui::style::Modifier::BOLD),
        )),
        Line::from(Span::styled(
            outcome.class.description(),
            WellnessTheme::text_secondary(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(class_display, chunks[0]);

    let mut advice = vec![Line::from(Span::styled(
        "Recommendations",
        WellnessTheme::subtitle(),
    ))];
    for rec in outcome.class.recommendations() {
        advice.push(Line::from(vec![
            Span::styled("  • ", class_style),
            Span::styled(*rec, WellnessTheme::text()),
        ]));
    }
    f.render_widget(Paragraph::new(advice), chunks[1]);

    render_probabilities(f, chunks[2], &outcome.probabilities);

    if outcome.fallback {
        let note = Paragraph::new(Line::from(Span::styled(
            format!(
                "Service returned an unexpected label ({}); showing the default category.",
                outcome.label
            ),
            WellnessTheme::warning(),
        )));
        f.render_widget(note, chunks[3]);
    }
}

fn render_probabilities(f: &mut Frame, area: Rect, probabilities: &[f64]) {
    let mut lines = vec![Line::from(Span::styled(
        "Model Confidence",
        WellnessTheme::subtitle(),
    ))];

    // Displayed for context only; the category comes from the class label.
    for class in StressClass::ALL {
        let value = probabilities
            .get(class.class_label() as usize)
            .copied()
            .unwrap_or(0.0);
        let filled = (value * 20.0).round() as usize;
        let bar: String = "█".repeat(filled.min(20));
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<10}", class.title()), WellnessTheme::text_secondary()),
            Span::styled(format!("{bar:<20} "), WellnessTheme::stress_class(class)),
            Span::styled(format!("{:>5.1}%", value * 100.0), WellnessTheme::text()),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("! Error", WellnessTheme::danger())),
        Line::from(""),
        Line::from(Span::styled(message, WellnessTheme::text())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(WellnessTheme::danger()),
    );

    f.render_widget(content, area);
}

fn render_footer(f: &mut Frame, area: Rect, state: &SubmissionViewState) {
    let content = match state {
        SubmissionViewState::Complete { .. } => Line::from(vec![
            Span::styled("[Enter] ", WellnessTheme::key_hint()),
            Span::styled("Back to Dashboard ", WellnessTheme::key_desc()),
            Span::styled("[N] ", WellnessTheme::key_hint()),
            Span::styled("Analyze Again", WellnessTheme::key_desc()),
        ]),
        SubmissionViewState::Error { .. } => Line::from(vec![
            Span::styled("[Enter] ", WellnessTheme::key_hint()),
            Span::styled("Retry ", WellnessTheme::key_desc()),
            Span::styled("[Esc] ", WellnessTheme::key_hint()),
            Span::styled("Cancel", WellnessTheme::key_desc()),
        ]),
        _ => Line::from(vec![Span::styled(
            "Processing...",
            WellnessTheme::text_muted(),
        )]),
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(WellnessTheme::border()),
    );

    f.render_widget(footer, area);
}
