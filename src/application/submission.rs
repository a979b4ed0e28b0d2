//! Submission pipeline: serializes an assessment, calls the prediction
//! service and resolves the returned label into an outcome.
//!
//! The pipeline is a four-state machine (`Idle → Submitting → Succeeded |
//! Failed`, terminal states re-arm on the next submit) with a hard
//! re-entrancy gate: while a submission is in flight, further `submit`
//! calls are rejected instead of racing the first one. Completed
//! submissions are kept in a session-local history for the dashboard;
//! nothing is persisted.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Assessment, StressClass};
use crate::ports::Predictor;
use crate::{Result, StresscastError};

/// Generic retryable message shown to the user when a submission fails.
/// The structured cause goes to the log, not the screen.
pub const SUBMIT_FAILED_MESSAGE: &str = "Error predicting stress level. Please try again.";

/// Pipeline state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Resolved result of one successful submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    /// Resolved category
    pub class: StressClass,

    /// Raw class label as returned by the service
    pub label: i64,

    /// Per-class probability vector (displayed, never used for resolution)
    pub probabilities: Vec<f64>,

    /// Whether the label was outside the known set and the default
    /// category was substituted
    pub fallback: bool,

    /// Completion timestamp
    pub completed_at: DateTime<Utc>,
}

/// Session-local record of a completed submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub class: StressClass,
    pub fallback: bool,
    pub completed_at: DateTime<Utc>,
}

struct PipelineState {
    phase: SubmitPhase,
    history: Vec<SubmissionRecord>,
}

/// Service for submitting assessments to the prediction service.
pub struct SubmissionPipeline<P>
where
    P: Predictor,
{
    predictor: Arc<P>,
    state: Mutex<PipelineState>,
}

impl<P> SubmissionPipeline<P>
where
    P: Predictor,
{
    /// Create a new pipeline over the given predictor.
    pub fn new(predictor: Arc<P>) -> Self {
        Self {
            predictor,
            state: Mutex::new(PipelineState {
                phase: SubmitPhase::Idle,
                history: Vec::new(),
            }),
        }
    }

    /// The predictor this pipeline submits to.
    #[must_use]
    pub fn predictor(&self) -> Arc<P> {
        self.predictor.clone()
    }

    /// Current pipeline phase.
    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        self.state
            .lock()
            .map(|st| st.phase)
            .unwrap_or(SubmitPhase::Failed)
    }

    /// Submit one assessment.
    ///
    /// Serializes the assessment, issues exactly one request, and resolves
    /// the returned label. The assessment itself is left untouched, so a
    /// retry is simply another `submit` call.
    ///
    /// # Errors
    /// - `StresscastError::SubmissionInFlight` if a submission is already
    ///   running; the in-flight one is unaffected.
    /// - `StresscastError::Predict` on transport failure, bad status or a
    ///   malformed response body.
    pub fn submit(&self, assessment: &Assessment) -> Result<SubmissionOutcome> {
        {
            let mut st = self
                .state
                .lock()
                .map_err(|_| StresscastError::Pipeline("state lock poisoned".to_string()))?;
            if st.phase == SubmitPhase::Submitting {
                return Err(StresscastError::SubmissionInFlight);
            }
            st.phase = SubmitPhase::Submitting;
        }

        tracing::info!("submitting assessment to prediction service");
        let result = self.predictor.predict(assessment);

        let mut st = self
            .state
            .lock()
            .map_err(|_| StresscastError::Pipeline("state lock poisoned".to_string()))?;

        match result {
            Ok(prediction) => {
                let class = StressClass::resolve(prediction.label);
                let fallback = StressClass::from_label(prediction.label).is_none();
                let outcome = SubmissionOutcome {
                    class,
                    label: prediction.label,
                    probabilities: prediction.probabilities,
                    fallback,
                    completed_at: Utc::now(),
                };

                st.phase = SubmitPhase::Succeeded;
                st.history.push(SubmissionRecord {
                    class: outcome.class,
                    fallback: outcome.fallback,
                    completed_at: outcome.completed_at,
                });

                tracing::info!(
                    label = outcome.label,
                    class = %outcome.class,
                    fallback = outcome.fallback,
                    "submission succeeded"
                );
                Ok(outcome)
            }
            Err(e) => {
                st.phase = SubmitPhase::Failed;
                tracing::warn!(error = %e, "submission failed");
                Err(e.into())
            }
        }
    }

    /// Most recent completed submissions, newest first, up to `limit`.
    #[must_use]
    pub fn recent(&self, limit: usize) -> Vec<SubmissionRecord> {
        match self.state.lock() {
            Ok(st) => st.history.iter().rev().take(limit).copied().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Total completed submissions this session.
    #[must_use]
    pub fn submission_count(&self) -> usize {
        self.state.lock().map(|st| st.history.len()).unwrap_or(0)
    }
}
