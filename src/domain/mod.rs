//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no external dependencies.
//! All types are serializable and implement strict validation.

mod assessment;
mod indicator;
mod metrics;
mod outcome;

pub use assessment::{Assessment, AssessmentError};
pub use indicator::{
    catalog, find, get, group_members, ChoiceOption, IndicatorDef, IndicatorGroup, Modality,
    ValueDomain, INDICATOR_COUNT,
};
pub use metrics::{ModelScore, MODEL_SCORES};
pub use outcome::{Prediction, StressClass};
