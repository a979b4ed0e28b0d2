//! Outcome categories and class-label resolution.
//!
//! The prediction service returns an integer class label; `resolve` maps it
//! onto one of three fixed stress categories. Labels outside the known set
//! fall back to the default category rather than failing, since a bad label
//! is a data-quality problem on the service side, not a user error.

use serde::{Deserialize, Serialize};

/// Raw result of one prediction request, as decoded off the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Integer class label
    pub label: i64,

    /// Per-class probability vector, in class-label order
    pub probabilities: Vec<f64>,
}

/// Stress category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressClass {
    /// Short-term stress from specific events
    Acute,
    /// Frequent stress from recurring pressures
    Episodic,
    /// Persistent stress from ongoing circumstances
    Chronic,
}

impl StressClass {
    /// Category substituted when a label cannot be resolved.
    pub const DEFAULT: StressClass = StressClass::Episodic;

    /// All categories, in class-label order.
    pub const ALL: [StressClass; 3] = [Self::Acute, Self::Episodic, Self::Chronic];

    /// Map a class label to its category, if known.
    #[must_use]
    pub fn from_label(label: i64) -> Option<Self> {
        match label {
            0 => Some(Self::Acute),
            1 => Some(Self::Episodic),
            2 => Some(Self::Chronic),
            _ => None,
        }
    }

    /// Map a class label to its category, falling back to the default.
    ///
    /// The fallback is silent towards the caller but logged as a
    /// data-quality signal.
    #[must_use]
    pub fn resolve(label: i64) -> Self {
        match Self::from_label(label) {
            Some(class) => class,
            None => {
                tracing::warn!(label, "unknown stress class label, using default category");
                Self::DEFAULT
            }
        }
    }

    /// The integer class label this category corresponds to.
    #[must_use]
    pub fn class_label(&self) -> i64 {
        match self {
            Self::Acute => 0,
            Self::Episodic => 1,
            Self::Chronic => 2,
        }
    }

    /// Display title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Acute => "Acute Stress",
            Self::Episodic => "Episodic Stress",
            Self::Chronic => "Chronic Stress",
        }
    }

    /// One-line description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Acute => "Short-term stress from specific events or situations.",
            Self::Episodic => "Frequent stress from recurring challenges or pressures.",
            Self::Chronic => "Persistent stress from ongoing life circumstances.",
        }
    }

    /// Advice list, in display order (always non-empty).
    #[must_use]
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            Self::Acute => &[
                "Practice deep breathing exercises to calm your mind.",
                "Engage in light physical activity like a short walk.",
                "Break tasks into smaller, manageable steps.",
            ],
            Self::Episodic => &[
                "Establish a consistent daily routine to reduce chaos.",
                "Practice mindfulness or meditation for 10 minutes daily.",
                "Seek support from friends or a counselor to manage triggers.",
            ],
            Self::Chronic => &[
                "Consult a mental health professional for personalized strategies.",
                "Prioritize quality sleep with a regular bedtime routine.",
                "Incorporate stress-relief activities like yoga or journaling.",
            ],
        }
    }

    /// Presentational color token (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Acute => (34, 197, 94),    // Green (#22C55E)
            Self::Episodic => (249, 115, 22), // Orange (#F97316)
            Self::Chronic => (239, 68, 68),  // Red (#EF4444)
        }
    }
}

impl std::fmt::Display for StressClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Acute => write!(f, "ACUTE"),
            Self::Episodic => write!(f, "EPISODIC"),
            Self::Chronic => write!(f, "CHRONIC"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(StressClass::resolve(0), StressClass::Acute);
        assert_eq!(StressClass::resolve(1), StressClass::Episodic);
        assert_eq!(StressClass::resolve(2), StressClass::Chronic);
    }

    #[test]
    fn test_unknown_labels_fall_back_to_default() {
        for label in [-1, 3, 9, i64::MAX, i64::MIN] {
            assert_eq!(StressClass::resolve(label), StressClass::DEFAULT);
        }
    }

    #[test]
    fn test_resolve_is_pure() {
        for label in -2..5 {
            assert_eq!(StressClass::resolve(label), StressClass::resolve(label));
        }
    }

    #[test]
    fn test_labels_round_trip() {
        for class in StressClass::ALL {
            assert_eq!(StressClass::resolve(class.class_label()), class);
        }
    }

    #[test]
    fn test_recommendations_non_empty() {
        for class in StressClass::ALL {
            assert!(!class.recommendations().is_empty());
            assert!(!class.title().is_empty());
        }
    }
}
