//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement
//! the core use cases of the application.

mod dataset;
mod results;
mod submission;

pub use dataset::{DatasetService, PAGE_SIZE};
pub use results::{review, ResultsView};
pub use submission::{
    SubmissionOutcome, SubmissionPipeline, SubmissionRecord, SubmitPhase, SUBMIT_FAILED_MESSAGE,
};
