//! Indicator schema for the stress assessment survey.
//!
//! A read-only catalog of the 20 ordinal indicators that make up one
//! assessment, in the exact order expected by the prediction service.
//! Grouping into clusters is presentational only and carries no weight
//! in validation or submission.

use serde::{Deserialize, Serialize};

/// Number of indicators in one assessment.
pub const INDICATOR_COUNT: usize = 20;

/// How an indicator value is chosen in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modality {
    /// Value picked from a closed integer range (slider-like)
    Continuous,
    /// Value picked from a small enumerated set (radio-like)
    Categorical,
}

/// One selectable value of a categorical indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: i64,
    pub label: &'static str,
}

/// The declared value domain of an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueDomain {
    /// Closed integer range `[min, max]`
    Scale { min: i64, max: i64 },
    /// Enumerated set of value/label pairs
    Choice { options: &'static [ChoiceOption] },
}

impl ValueDomain {
    /// Check whether `value` lies within this domain.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        match self {
            Self::Scale { min, max } => (*min..=*max).contains(&value),
            Self::Choice { options } => options.iter().any(|o| o.value == value),
        }
    }

    /// Smallest admissible value.
    #[must_use]
    pub fn min(&self) -> i64 {
        match self {
            Self::Scale { min, .. } => *min,
            Self::Choice { options } => options.iter().map(|o| o.value).min().unwrap_or(0),
        }
    }

    /// Largest admissible value.
    #[must_use]
    pub fn max(&self) -> i64 {
        match self {
            Self::Scale { max, .. } => *max,
            Self::Choice { options } => options.iter().map(|o| o.value).max().unwrap_or(0),
        }
    }
}

/// Presentational cluster an indicator belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorGroup {
    Health,
    Mental,
    Academic,
    Environmental,
}

impl IndicatorGroup {
    /// All groups, in display order.
    pub const ALL: [IndicatorGroup; 4] = [
        Self::Health,
        Self::Mental,
        Self::Academic,
        Self::Environmental,
    ];

    /// Human-readable group heading.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Health => "Physical Health",
            Self::Mental => "Mental Health",
            Self::Academic => "Academic",
            Self::Environmental => "Environment & Social",
        }
    }
}

/// Static definition of one survey indicator.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorDef {
    /// Stable key, also the JSON field name in the submission payload
    pub name: &'static str,

    /// Display label
    pub label: &'static str,

    /// Human-readable explanation (presentational only)
    pub description: &'static str,

    /// Declared value domain
    pub domain: ValueDomain,

    /// Schema-supplied default used when a fresh assessment is created
    pub default: i64,

    /// Hint shown at the low end of a scale
    pub low_hint: &'static str,

    /// Hint shown at the high end of a scale
    pub high_hint: &'static str,

    /// Presentational cluster
    pub group: IndicatorGroup,
}

impl IndicatorDef {
    /// Input modality implied by the domain shape.
    #[must_use]
    pub fn modality(&self) -> Modality {
        match self.domain {
            ValueDomain::Scale { .. } => Modality::Continuous,
            ValueDomain::Choice { .. } => Modality::Categorical,
        }
    }
}

const YES_NO: &[ChoiceOption] = &[
    ChoiceOption { value: 0, label: "No" },
    ChoiceOption { value: 1, label: "Yes" },
];

const BLOOD_PRESSURE_LEVELS: &[ChoiceOption] = &[
    ChoiceOption { value: 0, label: "Low" },
    ChoiceOption { value: 1, label: "Normal" },
    ChoiceOption { value: 2, label: "High" },
    ChoiceOption { value: 3, label: "Very High" },
];

/// The full indicator catalog, in the feature order expected by the
/// prediction service. Do not reorder.
static CATALOG: [IndicatorDef; INDICATOR_COUNT] = [
    IndicatorDef {
        name: "anxiety_level",
        label: "Anxiety Level",
        description: "Degree of worry and nervousness you experience",
        domain: ValueDomain::Scale { min: 0, max: 20 },
        default: 5,
        low_hint: "None",
        high_hint: "Severe",
        group: IndicatorGroup::Mental,
    },
    IndicatorDef {
        name: "self_esteem",
        label: "Self Esteem",
        description: "Your perception of self-worth and confidence",
        domain: ValueDomain::Scale { min: 0, max: 30 },
        default: 15,
        low_hint: "Low",
        high_hint: "High",
        group: IndicatorGroup::Mental,
    },
    IndicatorDef {
        name: "mental_health_history",
        label: "Mental Health History",
        description: "Whether you have a history of mental health issues",
        domain: ValueDomain::Choice { options: YES_NO },
        default: 0,
        low_hint: "No",
        high_hint: "Yes",
        group: IndicatorGroup::Mental,
    },
    IndicatorDef {
        name: "depression",
        label: "Depression Level",
        description: "Feelings of sadness or hopelessness",
        domain: ValueDomain::Scale { min: 0, max: 27 },
        default: 5,
        low_hint: "None",
        high_hint: "Severe",
        group: IndicatorGroup::Mental,
    },
    IndicatorDef {
        name: "headache",
        label: "Headache Frequency",
        description: "Frequency and intensity of headaches experienced",
        domain: ValueDomain::Scale { min: 0, max: 5 },
        default: 2,
        low_hint: "None",
        high_hint: "Constant",
        group: IndicatorGroup::Health,
    },
    IndicatorDef {
        name: "blood_pressure",
        label: "Blood Pressure",
        description: "Your blood pressure level affecting overall health",
        domain: ValueDomain::Choice {
            options: BLOOD_PRESSURE_LEVELS,
        },
        default: 1,
        low_hint: "Low",
        high_hint: "Very High",
        group: IndicatorGroup::Health,
    },
    IndicatorDef {
        name: "sleep_quality",
        label: "Sleep Quality",
        description: "How well and restfully you sleep",
        domain: ValueDomain::Scale { min: 0, max: 5 },
        default: 3,
        low_hint: "Poor",
        high_hint: "Excellent",
        group: IndicatorGroup::Health,
    },
    IndicatorDef {
        name: "breathing_problem",
        label: "Breathing Problems",
        description: "Frequency of breathing difficulties",
        domain: ValueDomain::Scale { min: 0, max: 5 },
        default: 2,
        low_hint: "None",
        high_hint: "Severe",
        group: IndicatorGroup::Health,
    },
    IndicatorDef {
        name: "noise_level",
        label: "Noise Level",
        description: "Level of distracting noise in your study environment",
        domain: ValueDomain::Scale { min: 0, max: 5 },
        default: 2,
        low_hint: "Quiet",
        high_hint: "Very Loud",
        group: IndicatorGroup::Environmental,
    },
    IndicatorDef {
        name: "living_conditions",
        label: "Living Conditions",
        description: "Quality of your living environment",
        domain: ValueDomain::Scale { min: 0, max: 5 },
        default: 3,
        low_hint: "Poor",
        high_hint: "Excellent",
        group: IndicatorGroup::Environmental,
    },
    IndicatorDef {
        name: "safety",
        label: "Safety",
        description: "How safe and secure you feel in your environment",
        domain: ValueDomain::Scale { min: 0, max: 5 },
        default: 3,
        low_hint: "Unsafe",
        high_hint: "Very Safe",
        group: IndicatorGroup::Environmental,
    },
    IndicatorDef {
        name: "basic_needs",
        label: "Basic Needs Met",
        description: "Access to fundamental necessities (food, shelter, etc.)",
        domain: ValueDomain::Scale { min: 0, max: 5 },
        default: 3,
        low_hint: "Not Met",
        high_hint: "Fully Met",
        group: IndicatorGroup::Environmental,
    },
    IndicatorDef {
        name: "academic_performance",
        label: "Academic Performance",
        description: "How well you're doing in your academic studies",
        domain: ValueDomain::Scale { min: 0, max: 5 },
        default: 3,
        low_hint: "Poor",
        high_hint: "Excellent",
        group: IndicatorGroup::Academic,
    },
    IndicatorDef {
        name: "study_load",
        label: "Study Load",
        description: "Intensity of your academic workload",
        domain: ValueDomain::Scale { min: 0, max: 5 },
        default: 2,
        low_hint: "Light",
        high_hint: "Heavy",
        group: IndicatorGroup::Academic,
    },
    IndicatorDef {
        name: "teacher_student_relationship",
        label: "Teacher-Student Relationship",
        description: "Quality of interactions with teachers",
        domain: ValueDomain::Scale { min: 0, max: 5 },
        default: 3,
        low_hint: "Poor",
        high_hint: "Excellent",
        group: IndicatorGroup::Academic,
    },
    IndicatorDef {
        name: "future_career_concerns",
        label: "Future Career Concerns",
        description: "Worries about your future job prospects",
        domain: ValueDomain::Scale { min: 0, max: 5 },
        default: 3,
        low_hint: "None",
        high_hint: "High",
        group: IndicatorGroup::Academic,
    },
    IndicatorDef {
        name: "social_support",
        label: "Social Support",
        description: "Level of support received from friends/family",
        domain: ValueDomain::Scale { min: 0, max: 5 },
        default: 3,
        low_hint: "None",
        high_hint: "Strong",
        group: IndicatorGroup::Environmental,
    },
    IndicatorDef {
        name: "peer_pressure",
        label: "Peer Pressure",
        description: "Influence from peers to behave in certain ways",
        domain: ValueDomain::Scale { min: 0, max: 5 },
        default: 2,
        low_hint: "None",
        high_hint: "High",
        group: IndicatorGroup::Environmental,
    },
    IndicatorDef {
        name: "extracurricular_activities",
        label: "Extracurricular Activities",
        description: "Involvement in activities outside curriculum",
        domain: ValueDomain::Scale { min: 0, max: 5 },
        default: 2,
        low_hint: "None",
        high_hint: "Many",
        group: IndicatorGroup::Academic,
    },
    IndicatorDef {
        name: "bullying",
        label: "Bullying Experience",
        description: "Experiences of being targeted or harassed",
        domain: ValueDomain::Scale { min: 0, max: 5 },
        default: 2,
        low_hint: "None",
        high_hint: "Severe",
        group: IndicatorGroup::Environmental,
    },
];

/// The full catalog, in submission payload order.
#[must_use]
pub fn catalog() -> &'static [IndicatorDef] {
    &CATALOG
}

/// Look up an indicator by name.
#[must_use]
pub fn find(name: &str) -> Option<&'static IndicatorDef> {
    CATALOG.iter().find(|d| d.name == name)
}

/// Look up an indicator by name, panicking on unknown names.
///
/// An unknown name is a programmer error, not a runtime-recoverable
/// condition: every caller iterates the catalog itself.
#[must_use]
pub fn get(name: &str) -> &'static IndicatorDef {
    find(name).unwrap_or_else(|| panic!("unknown indicator: {name}"))
}

/// Indicators belonging to `group`, in catalog order.
pub fn group_members(group: IndicatorGroup) -> impl Iterator<Item = &'static IndicatorDef> {
    CATALOG.iter().filter(move |d| d.group == group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size_and_unique_names() {
        assert_eq!(catalog().len(), INDICATOR_COUNT);
        let names: HashSet<&str> = catalog().iter().map(|d| d.name).collect();
        assert_eq!(names.len(), INDICATOR_COUNT);
    }

    #[test]
    fn test_defaults_within_domain() {
        for def in catalog() {
            assert!(
                def.domain.contains(def.default),
                "{} default {} outside domain",
                def.name,
                def.default
            );
        }
    }

    #[test]
    fn test_groups_partition_catalog() {
        let grouped: usize = IndicatorGroup::ALL
            .iter()
            .map(|g| group_members(*g).count())
            .sum();
        assert_eq!(grouped, INDICATOR_COUNT);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(get("anxiety_level").domain.max(), 20);
        assert_eq!(get("blood_pressure").modality(), Modality::Categorical);
        assert!(find("heart_rate").is_none());
    }

    #[test]
    #[should_panic(expected = "unknown indicator")]
    fn test_get_unknown_panics() {
        let _ = get("heart_rate");
    }

    #[test]
    fn test_domain_bounds() {
        let scale = ValueDomain::Scale { min: 0, max: 5 };
        assert!(scale.contains(0));
        assert!(scale.contains(5));
        assert!(!scale.contains(6));
        assert!(!scale.contains(-1));

        let choice = ValueDomain::Choice {
            options: BLOOD_PRESSURE_LEVELS,
        };
        assert!(choice.contains(3));
        assert!(!choice.contains(4));
        assert_eq!(choice.min(), 0);
        assert_eq!(choice.max(), 3);
    }
}
