//! Metric registry: stable identifiers mapped to calculators.
//!
//! Each metric is a named pure function rather than a trait object; the
//! registry is a match over [`MetricKind`], which keeps every formula
//! independently testable and dispatch free of allocation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::Error;
use crate::core::{MetricValue, ValueRange};
use crate::matrix::UsageMatrix;
use crate::metrics::{ccm, lcom, mmac, nhd, scom};
use crate::skeleton::Skeleton;

/// Uniform calculator signature shared by every metric
pub type Calculator = fn(&Skeleton, &UsageMatrix) -> MetricValue;

/// Registered cohesion metrics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MetricKind {
    Lcom,
    Lcom2,
    Lcom3,
    Lcom5,
    Mmac,
    Nhd,
    Scom,
    Ccm,
}

impl MetricKind {
    /// Every registered metric, in reporting order
    pub const ALL: [MetricKind; 8] = [
        MetricKind::Lcom,
        MetricKind::Lcom2,
        MetricKind::Lcom3,
        MetricKind::Lcom5,
        MetricKind::Mmac,
        MetricKind::Nhd,
        MetricKind::Scom,
        MetricKind::Ccm,
    ];

    /// Stable string identifier used in selection and reports
    pub fn id(&self) -> &'static str {
        match self {
            MetricKind::Lcom => "LCOM",
            MetricKind::Lcom2 => "LCOM2",
            MetricKind::Lcom3 => "LCOM3",
            MetricKind::Lcom5 => "LCOM5",
            MetricKind::Mmac => "MMAC",
            MetricKind::Nhd => "NHD",
            MetricKind::Scom => "SCOM",
            MetricKind::Ccm => "CCM",
        }
    }

    /// Declared domain of this metric's defined values
    pub fn range(&self) -> ValueRange {
        match self {
            MetricKind::Lcom => ValueRange::NonNegativeCount,
            _ => ValueRange::UnitInterval,
        }
    }

    fn calculator(&self) -> Calculator {
        match self {
            MetricKind::Lcom => lcom::lcom,
            MetricKind::Lcom2 => lcom::lcom2,
            MetricKind::Lcom3 => lcom::lcom3,
            MetricKind::Lcom5 => lcom::lcom5,
            MetricKind::Mmac => mmac::mmac,
            MetricKind::Nhd => nhd::nhd,
            MetricKind::Scom => scom::scom,
            MetricKind::Ccm => ccm::ccm,
        }
    }

    /// Run this metric's calculator against a skeleton, reusing an already
    /// built usage matrix
    pub fn evaluate(&self, skeleton: &Skeleton, matrix: &UsageMatrix) -> MetricValue {
        (self.calculator())(skeleton, matrix)
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MetricKind {
    type Err = Error;

    /// Parse a stable identifier; an unknown one is a configuration error
    /// surfaced to the caller before any computation starts.
    fn from_str(s: &str) -> Result<Self, Error> {
        MetricKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| Error::UnknownMetric(s.to_string()))
    }
}
