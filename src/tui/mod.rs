//! TUI module: Terminal User Interface using Ratatui.
//!
//! Provides a wellness-themed interface for:
//! - Dashboard with service status and session activity
//! - Assessment data entry
//! - Submission progress and results
//! - Dataset browsing and model scores

mod app;
mod styles;
mod ui;
mod worker;

pub use app::App;
pub use styles::WellnessTheme;
pub use worker::{
    StatusReport, StatusWorker, StatusWorkerHandle, SubmissionProgress, SubmissionWorker,
    SubmissionWorkerHandle,
};
