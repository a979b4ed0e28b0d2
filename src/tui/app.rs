//! Main TUI application state machine.
//!
//! Handles:
//! - Screen navigation
//! - Input event handling
//! - Service integration
//! - Async submission via background worker

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::adapters::dataset::{CsvDataset, SyntheticDataset};
use crate::adapters::http::HttpPredictor;
use crate::application::{DatasetService, SubmissionPipeline};
use crate::domain::StressClass;

use super::ui::{
    dashboard::{render_dashboard, DashboardState, ServiceStatus, SessionSummary},
    dataset::{render_dataset, DatasetViewState},
    form::{render_form, AssessmentFormState},
    metrics::render_metrics,
    render_disclaimer,
    submission::{render_submission, SubmissionViewState},
};
use super::worker::{
    StatusWorker, StatusWorkerHandle, SubmissionProgress, SubmissionWorker, SubmissionWorkerHandle,
};

/// Default location of the training export.
const DEFAULT_DATASET_PATH: &str = "data/stress_level_dataset.csv";

/// Current screen/view in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Assessment,
    Submission,
    Dataset,
    Metrics,
}

/// Main application state
pub struct App {
    /// Current screen
    screen: Screen,

    /// Whether the app should quit
    should_quit: bool,

    /// Submission pipeline over the HTTP predictor
    pipeline: Arc<SubmissionPipeline<HttpPredictor>>,

    /// Loaded dataset
    dataset_service: DatasetService,

    /// Whether the dataset came from the synthetic fallback
    dataset_synthetic: bool,

    /// Dashboard state
    dashboard_state: DashboardState,

    /// Assessment form state
    form_state: AssessmentFormState,

    /// Submission view state
    submission_state: SubmissionViewState,

    /// Dataset browser state
    dataset_state: DatasetViewState,

    /// Pending submission worker (if running)
    pending_submission: Option<SubmissionWorkerHandle>,

    /// Pending status probe (if running)
    pending_probe: Option<StatusWorkerHandle>,

    /// When the current submission started (for progress animation)
    submission_started_at: Option<Instant>,
}

impl App {
    /// Create a new application instance from the environment.
    ///
    /// The prediction service base URL is mandatory; refusing to start
    /// without it beats failing on the first submission.
    ///
    /// # Errors
    /// Returns error if the predictor cannot be configured.
    pub fn new() -> Result<Self> {
        let predictor = Arc::new(HttpPredictor::from_env().map_err(|e| {
            anyhow!("{e}. Set STRESSCAST_API_URL to the prediction service base URL.")
        })?);
        tracing::info!(base_url = predictor.base_url(), "prediction service configured");

        let dataset_path = std::env::var("STRESSCAST_DATASET_PATH")
            .unwrap_or_else(|_| DEFAULT_DATASET_PATH.to_string());

        // A missing export is not fatal; the browser falls back to
        // synthetic rows so the rest of the app stays usable.
        let (dataset_service, dataset_synthetic) =
            match DatasetService::load(&CsvDataset::new(&dataset_path)) {
                Ok(service) => (service, false),
                Err(e) => {
                    tracing::warn!(
                        path = %dataset_path,
                        error = %e,
                        "dataset unavailable, using synthetic rows"
                    );
                    let service = DatasetService::load(&SyntheticDataset::default())?;
                    (service, true)
                }
            };

        let pipeline = Arc::new(SubmissionPipeline::new(predictor));
        Self::with_dependencies(pipeline, dataset_service, dataset_synthetic)
    }

    /// Create application with injected dependencies (Composition Root pattern).
    ///
    /// # Errors
    /// Returns error if initialization fails.
    pub fn with_dependencies(
        pipeline: Arc<SubmissionPipeline<HttpPredictor>>,
        dataset_service: DatasetService,
        dataset_synthetic: bool,
    ) -> Result<Self> {
        Ok(Self {
            screen: Screen::Dashboard,
            should_quit: false,
            pipeline,
            dataset_service,
            dataset_synthetic,
            dashboard_state: DashboardState::default(),
            form_state: AssessmentFormState::default(),
            submission_state: SubmissionViewState::default(),
            dataset_state: DatasetViewState::default(),
            pending_submission: None,
            pending_probe: None,
            submission_started_at: None,
        })
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        // Probe the service once at startup.
        self.start_probe();

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Main loop
        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            // Poll pending workers for updates
            self.poll_submission();
            self.poll_probe();

            // Animate submission progress
            self.tick_submission_progress();

            // Draw current screen
            terminal.draw(|f| {
                let area = f.area();
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(3)])
                    .split(area);

                let content_area = chunks[0];
                let disclaimer_area = chunks[1];

                match self.screen {
                    Screen::Dashboard => {
                        self.dashboard_state.dataset_rows = self.dataset_service.len();
                        self.dashboard_state.dataset_synthetic = self.dataset_synthetic;
                        let summary = self.session_summary();
                        render_dashboard(f, content_area, &self.dashboard_state, summary);
                    }
                    Screen::Assessment => render_form(f, content_area, &self.form_state),
                    Screen::Submission => {
                        render_submission(f, content_area, &self.submission_state)
                    }
                    Screen::Dataset => {
                        let page = self.dataset_service.page(self.dataset_state.offset);
                        render_dataset(f, content_area, &page);
                    }
                    Screen::Metrics => render_metrics(f, content_area),
                }

                render_disclaimer(f, disclaimer_area);
            })?;

            // Handle input (short poll to stay responsive)
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code, key.modifiers);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn session_summary(&self) -> SessionSummary {
        // Fetched per frame and dropped; results never persist in UI state.
        let records = self.pipeline.recent(usize::MAX);
        let mut summary = SessionSummary {
            total: records.len(),
            ..SessionSummary::default()
        };
        for record in records {
            match record.class {
                StressClass::Acute => summary.acute += 1,
                StressClass::Episodic => summary.episodic += 1,
                StressClass::Chronic => summary.chronic += 1,
            }
            if record.fallback {
                summary.fallbacks += 1;
            }
        }
        summary
    }

    /// Poll the submission worker for progress updates.
    fn poll_submission(&mut self) {
        if self.pending_submission.is_none() {
            return;
        }

        loop {
            let progress = match self
                .pending_submission
                .as_ref()
                .and_then(|worker| worker.try_recv())
            {
                Some(p) => p,
                None => break,
            };

            match progress {
                SubmissionProgress::Sending => {
                    if !matches!(self.submission_state, SubmissionViewState::Sending { .. }) {
                        self.submission_state = SubmissionViewState::Sending { progress: 0.0 };
                    }
                }
                SubmissionProgress::Complete(outcome) => {
                    self.submission_state = SubmissionViewState::Complete { outcome };
                    self.pending_submission = None;
                    self.submission_started_at = None;
                    break;
                }
                SubmissionProgress::Error(message) => {
                    self.submission_state = SubmissionViewState::Error { message };
                    self.pending_submission = None;
                    self.submission_started_at = None;
                    break;
                }
            }
        }
    }

    /// Poll the status probe and fold the report into the dashboard.
    fn poll_probe(&mut self) {
        let Some(report) = self
            .pending_probe
            .as_ref()
            .and_then(|worker| worker.try_recv())
        else {
            return;
        };
        self.pending_probe = None;

        self.dashboard_state.service_status = match &report.health {
            Ok(health) => ServiceStatus::Online {
                healthy: health.is_ok(),
            },
            Err(detail) => ServiceStatus::Offline {
                detail: detail.clone(),
            },
        };
        self.dashboard_state.model = report.model.ok();
    }

    fn tick_submission_progress(&mut self) {
        if self.pending_submission.is_none() {
            return;
        }
        let Some(started_at) = self.submission_started_at else {
            return;
        };
        let progress = match &self.submission_state {
            SubmissionViewState::Sending { progress } => *progress,
            _ => return,
        };

        // Smooth, monotonic fake progress: asymptotically approaches 0.95
        // while the request is actually on the wire.
        let elapsed = Instant::now()
            .saturating_duration_since(started_at)
            .as_secs_f64();
        let k = 1.0 - (-elapsed / 2.0).exp();
        let desired = (0.05 + 0.90 * k).clamp(0.0, 0.95);

        self.submission_state = SubmissionViewState::Sending {
            progress: desired.max(progress),
        };
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Dashboard => self.handle_dashboard_key(key),
            Screen::Assessment => self.handle_assessment_key(key),
            Screen::Submission => self.handle_submission_key(key),
            Screen::Dataset => self.handle_dataset_key(key),
            Screen::Metrics => self.handle_metrics_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.form_state = AssessmentFormState::default();
                self.screen = Screen::Assessment;
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                self.dataset_state = DatasetViewState::default();
                self.screen = Screen::Dataset;
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                self.screen = Screen::Metrics;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.start_probe();
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_assessment_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.screen = Screen::Dashboard;
            }
            KeyCode::Up => {
                self.form_state.prev_field();
            }
            KeyCode::Down | KeyCode::Tab => {
                self.form_state.next_field();
            }
            KeyCode::Left => {
                self.form_state.step(-1);
            }
            KeyCode::Right => {
                self.form_state.step(1);
            }
            KeyCode::Home => {
                self.form_state.jump_min();
            }
            KeyCode::End => {
                self.form_state.jump_max();
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                self.form_state.load_defaults();
            }
            KeyCode::Enter => {
                self.submit_assessment();
            }
            _ => {}
        }
    }

    fn handle_submission_key(&mut self, key: KeyCode) {
        match &self.submission_state {
            SubmissionViewState::Complete { .. } => match key {
                KeyCode::Enter | KeyCode::Esc => {
                    self.screen = Screen::Dashboard;
                }
                KeyCode::Char('n') | KeyCode::Char('N') => {
                    self.form_state = AssessmentFormState::default();
                    self.screen = Screen::Assessment;
                }
                _ => {}
            },
            SubmissionViewState::Error { .. } => match key {
                KeyCode::Enter => {
                    // Retry is a fresh explicit submit from the form.
                    self.screen = Screen::Assessment;
                }
                KeyCode::Esc => {
                    self.screen = Screen::Dashboard;
                }
                _ => {}
            },
            // No navigation while a request is on the wire.
            _ => {}
        }
    }

    fn handle_dataset_key(&mut self, key: KeyCode) {
        let page = self.dataset_service.page(self.dataset_state.offset);
        match key {
            KeyCode::Esc => {
                self.screen = Screen::Dashboard;
            }
            KeyCode::Left | KeyCode::PageUp => {
                self.dataset_state.prev_page(&page);
            }
            KeyCode::Right | KeyCode::PageDown => {
                self.dataset_state.next_page(&page);
            }
            _ => {}
        }
    }

    fn handle_metrics_key(&mut self, key: KeyCode) {
        if key == KeyCode::Esc {
            self.screen = Screen::Dashboard;
        }
    }

    fn submit_assessment(&mut self) {
        // The submit trigger is disabled while a submission is in flight;
        // the pipeline's gate would reject a concurrent call anyway.
        if self.pending_submission.is_some() {
            return;
        }

        let assessment = self.form_state.assessment();

        self.screen = Screen::Submission;
        self.submission_state = SubmissionViewState::Sending { progress: 0.0 };
        self.submission_started_at = Some(Instant::now());

        let worker = SubmissionWorker::spawn(self.pipeline.clone(), assessment);
        self.pending_submission = Some(worker);

        // Wipe the entered answers from the form immediately.
        self.form_state.clear_sensitive();
    }

    fn start_probe(&mut self) {
        if self.pending_probe.is_some() {
            return;
        }
        self.dashboard_state.service_status = ServiceStatus::Checking;
        self.pending_probe = Some(StatusWorker::spawn(self.pipeline.predictor()));
    }
}
