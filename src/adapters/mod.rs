//! Adapters layer: Concrete implementations of ports.
//!
//! These modules contain the actual integration with external resources:
//! - `http`: reqwest client for the prediction service
//! - `dataset`: CSV file reader and synthetic row generator
//! - `sanitize`: survey-payload filtering for logs

pub mod dataset;
pub mod http;
pub mod sanitize;

// Re-export dataset error for lib.rs
pub use dataset::DatasetError;
