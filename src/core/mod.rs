//! Common result types shared across the crate

pub mod errors;

use serde::{Deserialize, Serialize};

use crate::registry::MetricKind;

/// Outcome of one metric computation.
///
/// `Undefined` is a first-class value, not an error: a class with no methods
/// or no attributes has no defined cohesion, which is different from having
/// perfect cohesion. Calculators never surface a NaN and never coerce a
/// zero-denominator case to `0.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MetricValue {
    Defined(f64),
    Undefined,
}

impl MetricValue {
    /// Wrap a finite value
    pub fn defined(value: f64) -> Self {
        debug_assert!(value.is_finite());
        Self::Defined(value)
    }

    /// Wrap a value clamped to the unit interval
    pub(crate) fn unit(value: f64) -> Self {
        Self::defined(value.clamp(0.0, 1.0))
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Defined(_))
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Defined(value) => Some(*value),
            Self::Undefined => None,
        }
    }
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Defined(value) => write!(f, "{value:.4}"),
            Self::Undefined => write!(f, "undefined"),
        }
    }
}

/// Declared domain of a metric's defined values, so reporting layers can
/// render scores without knowing each formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueRange {
    /// Normalized score in [0, 1]
    UnitInterval,
    /// Unbounded non-negative count
    NonNegativeCount,
}

impl ValueRange {
    /// Whether a defined value lies inside this range
    pub fn contains(&self, value: f64) -> bool {
        match self {
            Self::UnitInterval => (0.0..=1.0).contains(&value),
            Self::NonNegativeCount => value >= 0.0 && value.fract() == 0.0,
        }
    }
}

/// One (class, metric) score, the unit handed to the reporting collaborator
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    pub class: String,
    pub metric: MetricKind,
    pub value: MetricValue,
    pub range: ValueRange,
}

/// All requested metric results for one class
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassReport {
    pub class: String,
    pub results: Vec<MetricResult>,
}

impl ClassReport {
    /// Look up the result for one metric, if it was requested
    pub fn result(&self, metric: MetricKind) -> Option<&MetricResult> {
        self.results.iter().find(|r| r.metric == metric)
    }
}
