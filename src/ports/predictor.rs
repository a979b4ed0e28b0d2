//! Predictor port: Trait for the external prediction service.
//!
//! This trait abstracts the remote ML endpoint from the application logic.
//! The model itself is an opaque collaborator; the port only speaks in
//! assessments, class labels and probability vectors.

use crate::domain::{Assessment, Prediction};

/// Errors that can occur while talking to the prediction service.
///
/// Transport failures, bad statuses and malformed bodies are all retryable
/// from the user's point of view; only `Config` is a deployment problem.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PredictError {
    #[error("Prediction service unreachable: {0}")]
    Transport(String),

    #[error("Prediction service returned HTTP {0}")]
    Status(u16),

    #[error("Malformed prediction response: {0}")]
    MalformedResponse(String),

    #[error("Prediction service not configured: {0}")]
    Config(String),
}

/// Liveness report from the service's health probe.
#[derive(Debug, Clone, Default)]
pub struct ServiceHealth {
    pub status: String,
    pub model_loaded: bool,
    pub scaler_loaded: bool,
}

impl ServiceHealth {
    /// Whether the service reported itself fully operational.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "ok" && self.model_loaded && self.scaler_loaded
    }
}

/// Descriptive metadata about the deployed model.
#[derive(Debug, Clone)]
pub struct ModelInfo {
    pub model_type: String,
    pub features: u32,
    pub classes: Vec<i64>,
}

/// Trait for prediction service operations.
pub trait Predictor: Send + Sync {
    /// Submit one assessment and return the decoded prediction.
    ///
    /// Issues exactly one request; retrying is the caller's decision.
    ///
    /// # Errors
    /// Returns `PredictError` on network failure, non-2xx status or a
    /// response body that does not match the expected shape.
    fn predict(&self, assessment: &Assessment) -> Result<Prediction, PredictError>;

    /// Probe the service's health endpoint.
    ///
    /// # Errors
    /// Returns `PredictError` if the probe cannot be completed.
    fn health(&self) -> Result<ServiceHealth, PredictError>;

    /// Fetch metadata about the deployed model.
    ///
    /// # Errors
    /// Returns `PredictError` if the probe cannot be completed.
    fn model_info(&self) -> Result<ModelInfo, PredictError>;
}
