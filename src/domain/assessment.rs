//! Assessment state: the mutable record behind the survey form.
//!
//! One value per catalog indicator, fully populated with schema defaults at
//! creation. Updates are validated against the indicator's declared domain
//! and rejected on violation (the service would refuse out-of-range values
//! anyway, so nothing invalid may ever reach the wire).

use serde_json::{Map, Value};

use super::indicator::{self, INDICATOR_COUNT};

/// Validation error for a single-field update.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("{name}: value {value} outside [{min}, {max}]")]
    OutOfDomain {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

/// Current indicator values of one assessment, keyed by catalog position.
///
/// Lives for one user session and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    values: [i64; INDICATOR_COUNT],
}

impl Assessment {
    /// Create an assessment with every indicator at its schema default.
    #[must_use]
    pub fn new() -> Self {
        let mut values = [0; INDICATOR_COUNT];
        for (slot, def) in values.iter_mut().zip(indicator::catalog()) {
            *slot = def.default;
        }
        Self { values }
    }

    /// Current value of the named indicator.
    ///
    /// Unknown names are a programmer error and panic.
    #[must_use]
    pub fn get(&self, name: &str) -> i64 {
        self.values[Self::position(name)]
    }

    /// Replace the named indicator's value.
    ///
    /// Unknown names are a programmer error and panic.
    ///
    /// # Errors
    /// Returns `AssessmentError::OutOfDomain` (leaving the state unchanged)
    /// if `value` lies outside the indicator's declared domain.
    pub fn set(&mut self, name: &str, value: i64) -> Result<(), AssessmentError> {
        let def = indicator::get(name);
        if !def.domain.contains(value) {
            return Err(AssessmentError::OutOfDomain {
                name: def.name,
                value,
                min: def.domain.min(),
                max: def.domain.max(),
            });
        }
        self.values[Self::position(name)] = value;
        Ok(())
    }

    /// Reset every indicator to its schema default.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The exact JSON payload sent to the prediction service: a flat
    /// name→value record whose key set equals the full indicator catalog.
    #[must_use]
    pub fn payload(&self) -> Map<String, Value> {
        let mut map = Map::with_capacity(INDICATOR_COUNT);
        for (def, value) in indicator::catalog().iter().zip(self.values) {
            map.insert(def.name.to_string(), Value::from(value));
        }
        map
    }

    fn position(name: &str) -> usize {
        indicator::catalog()
            .iter()
            .position(|d| d.name == name)
            .unwrap_or_else(|| panic!("unknown indicator: {name}"))
    }
}

impl Default for Assessment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::indicator::catalog;

    #[test]
    fn test_new_is_within_domain() {
        let assessment = Assessment::new();
        for def in catalog() {
            assert!(def.domain.contains(assessment.get(def.name)));
        }
    }

    #[test]
    fn test_set_then_payload_reflects_value() {
        let mut assessment = Assessment::new();
        assessment.set("anxiety_level", 18).expect("in domain");

        let payload = assessment.payload();
        assert_eq!(payload["anxiety_level"], 18);

        // All other keys keep their defaults.
        for def in catalog().iter().filter(|d| d.name != "anxiety_level") {
            assert_eq!(payload[def.name], def.default);
        }
    }

    #[test]
    fn test_payload_key_set_equals_catalog() {
        let mut assessment = Assessment::new();
        assessment.set("bullying", 5).expect("in domain");
        assessment.set("self_esteem", 0).expect("in domain");

        let payload = assessment.payload();
        assert_eq!(payload.len(), INDICATOR_COUNT);
        for def in catalog() {
            assert!(payload.contains_key(def.name), "missing {}", def.name);
        }
    }

    #[test]
    fn test_set_rejects_out_of_domain() {
        let mut assessment = Assessment::new();
        let before = assessment.clone();

        let err = assessment.set("sleep_quality", 6).unwrap_err();
        assert_eq!(
            err,
            AssessmentError::OutOfDomain {
                name: "sleep_quality",
                value: 6,
                min: 0,
                max: 5,
            }
        );
        assert_eq!(assessment, before);

        assert!(assessment.set("blood_pressure", 4).is_err());
        assert!(assessment.set("anxiety_level", -1).is_err());
    }

    #[test]
    #[should_panic(expected = "unknown indicator")]
    fn test_set_unknown_name_panics() {
        let mut assessment = Assessment::new();
        let _ = assessment.set("heart_rate", 1);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut assessment = Assessment::new();
        assessment.set("depression", 27).expect("in domain");
        assessment.reset();
        assert_eq!(assessment, Assessment::new());
    }
}
