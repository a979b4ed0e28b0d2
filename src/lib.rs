//! # Stresscast
//!
//! Terminal client for a student stress-prediction service.
//!
//! This crate provides:
//! - A 20-indicator assessment form with per-indicator domain validation
//! - A submission pipeline that posts assessments to an external prediction API
//! - Resolution of the returned class label into one of three stress categories
//! - A paginated viewer over the training dataset and the published model scores
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (indicators, assessments, outcomes)
//! - `ports`: Trait definitions for external operations
//! - `adapters`: Concrete implementations (HTTP prediction client, CSV dataset)
//! - `application`: Use cases orchestrating domain and ports
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{Assessment, Prediction, StressClass};

/// Result type for Stresscast operations
pub type Result<T> = std::result::Result<T, StresscastError>;

/// Main error type for Stresscast
#[derive(Debug, thiserror::Error)]
pub enum StresscastError {
    #[error("Invalid assessment value: {0}")]
    Validation(#[from] domain::AssessmentError),

    #[error("Prediction service error: {0}")]
    Predict(#[from] ports::PredictError),

    #[error("Dataset error: {0}")]
    Dataset(#[from] adapters::DatasetError),

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Submission pipeline unavailable: {0}")]
    Pipeline(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
