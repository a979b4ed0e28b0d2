//! Background workers for non-blocking network calls.
//!
//! The submission request and the dashboard probes run on plain threads and
//! report back over mpsc channels, keeping the TUI main loop responsive.
//! Handles are polled non-blockingly each frame.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::application::{SubmissionOutcome, SubmissionPipeline, SUBMIT_FAILED_MESSAGE};
use crate::domain::Assessment;
use crate::ports::{ModelInfo, Predictor, ServiceHealth};

/// Progress updates from the submission worker.
#[derive(Debug, Clone)]
pub enum SubmissionProgress {
    /// Request is on the wire
    Sending,
    /// Submission complete with resolved outcome
    Complete(SubmissionOutcome),
    /// Submission failed; carries the user-facing message
    Error(String),
}

/// Handle to a running submission worker.
pub struct SubmissionWorkerHandle {
    progress_rx: Receiver<SubmissionProgress>,
    _handle: JoinHandle<()>,
}

impl SubmissionWorkerHandle {
    /// Try to receive the next progress update (non-blocking).
    #[must_use]
    pub fn try_recv(&self) -> Option<SubmissionProgress> {
        self.progress_rx.try_recv().ok()
    }
}

/// Submission worker that runs the pipeline call in the background.
pub struct SubmissionWorker;

impl SubmissionWorker {
    /// Spawn a background submission.
    ///
    /// Returns a handle to receive progress updates.
    pub fn spawn<P>(
        pipeline: Arc<SubmissionPipeline<P>>,
        assessment: Assessment,
    ) -> SubmissionWorkerHandle
    where
        P: Predictor + 'static,
    {
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            Self::run_submission(pipeline, assessment, &tx);
        });

        SubmissionWorkerHandle {
            progress_rx: rx,
            _handle: handle,
        }
    }

    fn run_submission<P>(
        pipeline: Arc<SubmissionPipeline<P>>,
        assessment: Assessment,
        tx: &Sender<SubmissionProgress>,
    ) where
        P: Predictor + 'static,
    {
        let _ = tx.send(SubmissionProgress::Sending);

        match pipeline.submit(&assessment) {
            Ok(outcome) => {
                let _ = tx.send(SubmissionProgress::Complete(outcome));
            }
            Err(e) => {
                // The generic message goes to the screen; the cause only
                // to the log.
                tracing::error!(error = %e, "submission worker failed");
                let _ = tx.send(SubmissionProgress::Error(SUBMIT_FAILED_MESSAGE.to_string()));
            }
        }
    }
}

/// Combined report from the service probes.
#[derive(Debug, Clone)]
pub struct StatusReport {
    pub health: Result<ServiceHealth, String>,
    pub model: Result<ModelInfo, String>,
}

/// Handle to a running status probe.
pub struct StatusWorkerHandle {
    report_rx: Receiver<StatusReport>,
    _handle: JoinHandle<()>,
}

impl StatusWorkerHandle {
    /// Try to receive the probe report (non-blocking).
    #[must_use]
    pub fn try_recv(&self) -> Option<StatusReport> {
        self.report_rx.try_recv().ok()
    }
}

/// Probe worker querying the service's health and model-info endpoints.
pub struct StatusWorker;

impl StatusWorker {
    /// Spawn a background probe.
    pub fn spawn<P>(predictor: Arc<P>) -> StatusWorkerHandle
    where
        P: Predictor + 'static,
    {
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            let report = StatusReport {
                health: predictor.health().map_err(|e| e.to_string()),
                model: predictor.model_info().map_err(|e| e.to_string()),
            };
            let _ = tx.send(report);
        });

        StatusWorkerHandle {
            report_rx: rx,
            _handle: handle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Prediction, StressClass};
    use crate::ports::PredictError;
    use std::time::Duration;

    struct StubPredictor {
        label: i64,
        fail: bool,
    }

    impl Predictor for StubPredictor {
        fn predict(&self, _assessment: &Assessment) -> Result<Prediction, PredictError> {
            if self.fail {
                Err(PredictError::Transport("down".to_string()))
            } else {
                Ok(Prediction {
                    label: self.label,
                    probabilities: vec![0.0, 1.0, 0.0],
                })
            }
        }

        fn health(&self) -> Result<ServiceHealth, PredictError> {
            Ok(ServiceHealth {
                status: "ok".to_string(),
                model_loaded: true,
                scaler_loaded: true,
            })
        }

        fn model_info(&self) -> Result<ModelInfo, PredictError> {
            Ok(ModelInfo {
                model_type: "XGBClassifier".to_string(),
                features: 20,
                classes: vec![0, 1, 2],
            })
        }
    }

    fn wait_for<T>(rx: impl Fn() -> Option<T>) -> T {
        for _ in 0..200 {
            if let Some(value) = rx() {
                return value;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("worker did not report in time");
    }

    #[test]
    fn test_submission_worker_reports_completion() {
        let pipeline = Arc::new(SubmissionPipeline::new(Arc::new(StubPredictor {
            label: 1,
            fail: false,
        })));
        let handle = SubmissionWorker::spawn(pipeline, Assessment::new());

        let first = wait_for(|| handle.try_recv());
        assert!(matches!(first, SubmissionProgress::Sending));

        let second = wait_for(|| handle.try_recv());
        match second {
            SubmissionProgress::Complete(outcome) => {
                assert_eq!(outcome.class, StressClass::Episodic);
            }
            other => panic!("unexpected progress: {other:?}"),
        }
    }

    #[test]
    fn test_submission_worker_reports_generic_error() {
        let pipeline = Arc::new(SubmissionPipeline::new(Arc::new(StubPredictor {
            label: 0,
            fail: true,
        })));
        let handle = SubmissionWorker::spawn(pipeline, Assessment::new());

        let _ = wait_for(|| handle.try_recv()); // Sending
        let progress = wait_for(|| handle.try_recv());
        match progress {
            SubmissionProgress::Error(message) => {
                assert_eq!(message, SUBMIT_FAILED_MESSAGE);
            }
            other => panic!("unexpected progress: {other:?}"),
        }
    }

    #[test]
    fn test_status_worker_reports_probes() {
        let handle = StatusWorker::spawn(Arc::new(StubPredictor {
            label: 0,
            fail: false,
        }));

        let report = wait_for(|| handle.try_recv());
        assert!(report.health.expect("health ok").is_ok());
        assert_eq!(report.model.expect("model ok").features, 20);
    }
}
