//! Dashboard view: Main overview screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::StressClass;
use crate::ports::ModelInfo;
use crate::tui::styles::WellnessTheme;

/// Last known state of the prediction service.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ServiceStatus {
    #[default]
    Unknown,
    Checking,
    Online {
        healthy: bool,
    },
    Offline {
        detail: String,
    },
}

/// Per-category counts over this session's submissions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionSummary {
    pub total: usize,
    pub acute: u32,
    pub episodic: u32,
    pub chronic: u32,
    pub fallbacks: u32,
}

/// Dashboard state for rendering.
#[derive(Default)]
pub struct DashboardState {
    pub service_status: ServiceStatus,
    pub model: Option<ModelInfo>,
    pub dataset_rows: usize,
    pub dataset_synthetic: bool,
}

/// Render the main dashboard view.
pub fn render_dashboard(
    f: &mut Frame,
    area: Rect,
    state: &DashboardState,
    summary: SessionSummary,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_main_content(f, chunks[1], state, summary);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", WellnessTheme::text()),
        Span::styled("Stresscast", WellnessTheme::title()),
        Span::styled(" │ ", WellnessTheme::text_muted()),
        Span::styled(
            "Student Stress Assessment",
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

fn render_main_content(
    f: &mut Frame,
    area: Rect,
    state: &DashboardState,
    summary: SessionSummary,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Status panels
            Constraint::Percentage(60), // Session activity
        ])
        .split(area);

    render_status_panels(f, chunks[0], state);
    render_session_summary(f, chunks[1], summary);
}

fn service_status_line(status: &ServiceStatus) -> Line<'static> {
    match status {
        ServiceStatus::Unknown => Line::from(vec![
            Span::styled("  ? ", WellnessTheme::text_muted()),
            Span::styled("Service not checked", WellnessTheme::text()),
        ]),
        ServiceStatus::Checking => Line::from(vec![
            Span::styled("  … ", WellnessTheme::info()),
            Span::styled("Checking service", WellnessTheme::text()),
        ]),
        ServiceStatus::Online { healthy: true } => Line::from(vec![
            Span::styled("  OK ", WellnessTheme::success()),
            Span::styled("Service online", WellnessTheme::text()),
        ]),
        ServiceStatus::Online { healthy: false } => Line::from(vec![
            Span::styled("  ! ", WellnessTheme::warning()),
            Span::styled("Service degraded", WellnessTheme::text()),
        ]),
        ServiceStatus::Offline { detail } => Line::from(vec![
            Span::styled("  FAIL ", WellnessTheme::danger()),
            Span::styled("Service offline: ", WellnessTheme::text()),
            Span::styled(detail.clone(), WellnessTheme::text_muted()),
        ]),
    }
}

fn render_status_panels(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Service status
            Constraint::Min(0),    // Quick actions
        ])
        .margin(1)
        .split(area);

    let mut status_items = vec![service_status_line(&state.service_status)];

    match &state.model {
        Some(model) => {
            status_items.push(Line::from(vec![
                Span::styled("  Model: ", WellnessTheme::text_secondary()),
                Span::styled(model.model_type.clone(), WellnessTheme::text()),
                Span::styled(
                    format!(" ({} features, {} classes)", model.features, model.classes.len()),
                    WellnessTheme::text_muted(),
                ),
            ]));
        }
        None => {
            status_items.push(Line::from(vec![
                Span::styled("  Model: ", WellnessTheme::text_secondary()),
                Span::styled("unknown", WellnessTheme::text_muted()),
                Span::styled(" (press [R])", WellnessTheme::text_secondary()),
            ]));
        }
    }

    status_items.push(Line::from(vec![
        Span::styled("  Dataset: ", WellnessTheme::text_secondary()),
        Span::styled(state.dataset_rows.to_string(), WellnessTheme::text()),
        Span::styled(
            if state.dataset_synthetic {
                " rows (synthetic)"
            } else {
                " rows"
            },
            WellnessTheme::text_muted(),
        ),
    ]));

    let status_block = Block::default()
        .title(Span::styled(" Service Status ", WellnessTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(WellnessTheme::border());

    let status_list = Paragraph::new(status_items).block(status_block);
    f.render_widget(status_list, chunks[0]);

    // Quick Actions
    let actions = vec![
        Line::from(vec![
            Span::styled("[N] ", WellnessTheme::key_hint()),
            Span::styled("New Assessment", WellnessTheme::key_desc()),
        ]),
        Line::from(vec![
            Span::styled("[D] ", WellnessTheme::key_hint()),
            Span::styled("Browse Dataset", WellnessTheme::key_desc()),
        ]),
        Line::from(vec![
            Span::styled("[M] ", WellnessTheme::key_hint()),
            Span::styled("Model Scores", WellnessTheme::key_desc()),
        ]),
        Line::from(vec![
            Span::styled("[R] ", WellnessTheme::key_hint()),
            Span::styled("Refresh Service Status", WellnessTheme::key_desc()),
        ]),
        Line::from(vec![
            Span::styled("[Q] ", WellnessTheme::key_hint()),
            Span::styled("Quit", WellnessTheme::key_desc()),
        ]),
    ];

    let actions_block = Block::default()
        .title(Span::styled(" Quick Actions ", WellnessTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(WellnessTheme::border());

    let actions_list = Paragraph::new(actions).block(actions_block);
    f.render_widget(actions_list, chunks[1]);
}

fn render_session_summary(f: &mut Frame, area: Rect, summary: SessionSummary) {
    let block = Block::default()
        .title(Span::styled(
            " This Session ",
            WellnessTheme::subtitle(),
        ))
        .borders(Borders::ALL)
        .border_style(WellnessTheme::border());

    if summary.total == 0 {
        let empty_msg = Paragraph::new(Line::from(vec![Span::styled(
            "No assessments yet. Press [N] to start.",
            WellnessTheme::text_muted(),
        )]))
        .block(block);
        f.render_widget(empty_msg, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled("Assessments submitted: ", WellnessTheme::text_secondary()),
            Span::styled(summary.total.to_string(), WellnessTheme::text()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Acute: ", WellnessTheme::text_secondary()),
            Span::styled(
                summary.acute.to_string(),
                WellnessTheme::stress_class(StressClass::Acute),
            ),
            Span::styled("  Episodic: ", WellnessTheme::text_secondary()),
            Span::styled(
                summary.episodic.to_string(),
                WellnessTheme::stress_class(StressClass::Episodic),
            ),
            Span::styled("  Chronic: ", WellnessTheme::text_secondary()),
            Span::styled(
                summary.chronic.to_string(),
                WellnessTheme::stress_class(StressClass::Chronic),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Unresolved labels: ", WellnessTheme::text_secondary()),
            Span::styled(summary.fallbacks.to_string(), WellnessTheme::warning()),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Results are kept for this session only and never stored.",
            WellnessTheme::text_muted(),
        )]),
    ];

    let p = Paragraph::new(lines).block(Block::default());
    f.render_widget(p, inner);
}
