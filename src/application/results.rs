//! Results review: resolve untrusted navigation parameters into an outcome.
//!
//! Consumers hand the result view two stringified parameters: the class
//! label (`stress_level`) and a URL-encoded JSON array of per-class
//! probabilities. Both are untrusted: missing, non-numeric or out-of-range
//! labels resolve to the default category with a diagnostic message, and an
//! undecodable probability vector is dropped. Nothing here ever fails.

use crate::domain::StressClass;

/// Outcome resolved from untrusted result parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    /// Resolved category (the default one when the label was unusable)
    pub class: StressClass,

    /// Decoded probability vector, if one was supplied and parseable
    pub probabilities: Option<Vec<f64>>,

    /// Diagnostic message describing why the default was substituted
    pub diagnostic: Option<String>,
}

/// Resolve `stress_level` and `probability` parameters into a view.
#[must_use]
pub fn review(stress_level: Option<&str>, probability: Option<&str>) -> ResultsView {
    let (class, diagnostic) = match stress_level {
        None => (
            StressClass::DEFAULT,
            Some("Stress level not provided".to_string()),
        ),
        Some(raw) => match raw.trim().parse::<i64>() {
            Ok(label) => match StressClass::from_label(label) {
                Some(class) => (class, None),
                None => {
                    tracing::warn!(label, "out-of-range stress level parameter");
                    (
                        StressClass::DEFAULT,
                        Some(format!("Invalid stress level: {label}")),
                    )
                }
            },
            Err(_) => {
                tracing::warn!(raw, "non-numeric stress level parameter");
                (
                    StressClass::DEFAULT,
                    Some(format!("Invalid stress level: {raw}")),
                )
            }
        },
    };

    let probabilities = probability.and_then(|raw| {
        let decoded = urlencoding::decode(raw).ok()?;
        match serde_json::from_str::<Vec<f64>>(&decoded) {
            Ok(values) => Some(values),
            Err(e) => {
                tracing::warn!(error = %e, "unparseable probability parameter");
                None
            }
        }
    });

    ResultsView {
        class,
        probabilities,
        diagnostic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_parameters() {
        let view = review(Some("2"), Some("%5B0.1%2C0.2%2C0.7%5D"));
        assert_eq!(view.class, StressClass::Chronic);
        assert_eq!(view.probabilities, Some(vec![0.1, 0.2, 0.7]));
        assert!(view.diagnostic.is_none());
    }

    #[test]
    fn test_out_of_range_label_uses_default() {
        let view = review(Some("9"), None);
        assert_eq!(view.class, StressClass::DEFAULT);
        assert!(view.diagnostic.expect("diagnostic").contains('9'));
    }

    #[test]
    fn test_missing_label_uses_default() {
        let view = review(None, None);
        assert_eq!(view.class, StressClass::DEFAULT);
        assert!(view.diagnostic.is_some());
        assert!(view.probabilities.is_none());
    }

    #[test]
    fn test_non_numeric_label_uses_default() {
        let view = review(Some("high"), None);
        assert_eq!(view.class, StressClass::DEFAULT);
        assert!(view.diagnostic.expect("diagnostic").contains("high"));
    }

    #[test]
    fn test_bad_probability_is_dropped_without_affecting_class() {
        let view = review(Some("0"), Some("not-json"));
        assert_eq!(view.class, StressClass::Acute);
        assert!(view.probabilities.is_none());
        assert!(view.diagnostic.is_none());
    }

    #[test]
    fn test_plain_json_probability_also_accepted() {
        // Already-decoded input decodes to itself.
        let view = review(Some("1"), Some("[0.2,0.5,0.3]"));
        assert_eq!(view.probabilities, Some(vec![0.2, 0.5, 0.3]));
    }
}
