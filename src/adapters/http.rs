//! HTTP adapter for the prediction service.
//!
//! Implements the `Predictor` port over the service's JSON API:
//! `POST /predict` for inference, `GET /health` and `GET /model-info`
//! as probes. The client is blocking; callers that must not stall
//! (the TUI) run it on a worker thread.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::{Assessment, Prediction};
use crate::ports::{ModelInfo, PredictError, Predictor, ServiceHealth};

/// Default request timeout. Expiry surfaces as a transport error and is
/// treated as a failed submission.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Environment variable carrying the service base URL. Absence is a
/// deployment error, not a runtime-recoverable condition.
pub const API_URL_VAR: &str = "STRESSCAST_API_URL";

/// Environment variable overriding the request timeout in seconds.
pub const TIMEOUT_VAR: &str = "STRESSCAST_TIMEOUT_SECS";

#[derive(Debug, Deserialize)]
struct PredictResponse {
    prediction: i64,
    probability: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
    #[serde(default)]
    model_loaded: bool,
    #[serde(default)]
    scaler_loaded: bool,
}

#[derive(Debug, Deserialize)]
struct ModelInfoResponse {
    #[serde(rename = "type")]
    model_type: String,
    features: u32,
    classes: Vec<i64>,
}

/// Blocking HTTP client for the prediction service.
#[derive(Debug)]
pub struct HttpPredictor {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpPredictor {
    /// Build a client from `STRESSCAST_API_URL` / `STRESSCAST_TIMEOUT_SECS`.
    ///
    /// # Errors
    /// Returns `PredictError::Config` if the base URL is not set.
    pub fn from_env() -> Result<Self, PredictError> {
        let base_url = std::env::var(API_URL_VAR)
            .map_err(|_| PredictError::Config(format!("{API_URL_VAR} is not set")))?;

        let timeout = std::env::var(TIMEOUT_VAR)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|&v| v > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::new(base_url, Duration::from_secs(timeout))
    }

    /// Build a client for `base_url` with the given request timeout.
    ///
    /// # Errors
    /// Returns `PredictError::Transport` if the underlying client cannot
    /// be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, PredictError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PredictError::Transport(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// The configured service base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, PredictError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| PredictError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictError::Status(status.as_u16()));
        }

        response
            .json()
            .map_err(|e| PredictError::MalformedResponse(e.to_string()))
    }
}

impl Predictor for HttpPredictor {
    fn predict(&self, assessment: &Assessment) -> Result<Prediction, PredictError> {
        let url = format!("{}/predict", self.base_url);
        tracing::debug!(url = %url, "submitting assessment");

        let response = self
            .client
            .post(&url)
            .json(&assessment.payload())
            .send()
            .map_err(|e| PredictError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictError::Status(status.as_u16()));
        }

        let body: PredictResponse = response
            .json()
            .map_err(|e| PredictError::MalformedResponse(e.to_string()))?;

        tracing::info!(
            prediction = body.prediction,
            classes = body.probability.len(),
            "prediction received"
        );

        Ok(Prediction {
            label: body.prediction,
            probabilities: body.probability,
        })
    }

    fn health(&self) -> Result<ServiceHealth, PredictError> {
        let body: HealthResponse = self.get_json("/health")?;
        Ok(ServiceHealth {
            status: body.status,
            model_loaded: body.model_loaded,
            scaler_loaded: body.scaler_loaded,
        })
    }

    fn model_info(&self) -> Result<ModelInfo, PredictError> {
        let body: ModelInfoResponse = self.get_json("/model-info")?;
        Ok(ModelInfo {
            model_type: body.model_type,
            features: body.features,
            classes: body.classes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve exactly one canned HTTP response on a loopback listener.
    fn one_shot_server(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");

            // Read the head, then drain the declared body so the socket
            // closes cleanly (unread bytes would reset the connection).
            let mut buf = [0u8; 4096];
            let mut request = Vec::new();
            let (header_end, body_len) = loop {
                let n = stream.read(&mut buf).unwrap_or(0);
                if n == 0 {
                    return;
                }
                request.extend_from_slice(&buf[..n]);
                if let Some(pos) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                    let head = String::from_utf8_lossy(&request[..pos + 4]).to_string();
                    let body_len = head
                        .lines()
                        .find_map(|line| {
                            line.to_ascii_lowercase()
                                .strip_prefix("content-length:")
                                .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                        })
                        .unwrap_or(0);
                    break (pos + 4, body_len);
                }
            };
            while request.len() < header_end + body_len {
                let n = stream.read(&mut buf).unwrap_or(0);
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        });

        format!("http://{addr}")
    }

    fn client(base_url: String) -> HttpPredictor {
        HttpPredictor::new(base_url, Duration::from_secs(5)).expect("client builds")
    }

    #[test]
    fn test_predict_decodes_well_formed_response() {
        let base = one_shot_server(
            "HTTP/1.1 200 OK",
            r#"{"prediction": 2, "probability": [0.1, 0.2, 0.7]}"#,
        );

        let prediction = client(base)
            .predict(&Assessment::new())
            .expect("should decode");

        assert_eq!(prediction.label, 2);
        assert_eq!(prediction.probabilities, vec![0.1, 0.2, 0.7]);
    }

    #[test]
    fn test_predict_maps_server_error_to_status() {
        let base = one_shot_server("HTTP/1.1 500 Internal Server Error", r#"{"detail": "boom"}"#);

        let err = client(base).predict(&Assessment::new()).unwrap_err();
        assert!(matches!(err, PredictError::Status(500)));
    }

    #[test]
    fn test_predict_rejects_malformed_body() {
        let base = one_shot_server("HTTP/1.1 200 OK", r#"{"verdict": "stressed"}"#);

        let err = client(base).predict(&Assessment::new()).unwrap_err();
        assert!(matches!(err, PredictError::MalformedResponse(_)));
    }

    #[test]
    fn test_predict_maps_connection_failure_to_transport() {
        // Bind then drop, so the port is very likely unbound.
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
            listener.local_addr().expect("local addr")
        };

        let err = client(format!("http://{addr}"))
            .predict(&Assessment::new())
            .unwrap_err();
        assert!(matches!(err, PredictError::Transport(_)));
    }

    #[test]
    fn test_health_probe() {
        let base = one_shot_server(
            "HTTP/1.1 200 OK",
            r#"{"status": "ok", "model_loaded": true, "scaler_loaded": true}"#,
        );

        let health = client(base).health().expect("should decode");
        assert!(health.is_ok());
    }

    #[test]
    fn test_degraded_health_probe() {
        let base = one_shot_server(
            "HTTP/1.1 200 OK",
            r#"{"status": "warning", "message": "Model or scaler not loaded"}"#,
        );

        let health = client(base).health().expect("should decode");
        assert!(!health.is_ok());
        assert_eq!(health.status, "warning");
    }

    #[test]
    fn test_model_info_probe() {
        let base = one_shot_server(
            "HTTP/1.1 200 OK",
            r#"{"type": "XGBClassifier", "features": 20, "classes": [0, 1, 2]}"#,
        );

        let info = client(base).model_info().expect("should decode");
        assert_eq!(info.model_type, "XGBClassifier");
        assert_eq!(info.features, 20);
        assert_eq!(info.classes, vec![0, 1, 2]);
    }

    #[test]
    fn test_from_env_requires_base_url() {
        // Isolated var name keeps this test independent of the suite env.
        std::env::remove_var(API_URL_VAR);
        let err = HttpPredictor::from_env().unwrap_err();
        assert!(matches!(err, PredictError::Config(_)));
    }

    #[test]
    fn test_base_url_is_normalized() {
        let predictor = client("http://localhost:8000/".to_string());
        assert_eq!(predictor.base_url(), "http://localhost:8000");
    }
}
