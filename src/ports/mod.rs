//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the application and external systems (prediction service,
//! dataset resources).

mod dataset;
mod predictor;

pub use dataset::{DatasetPage, DatasetRow, DatasetSource, DATASET_FIELD_COUNT};
pub use predictor::{ModelInfo, PredictError, Predictor, ServiceHealth};
