//! cohesionmap — cohesion metrics for compiled classes.
//!
//! An adapter (out of scope here) turns compiled class structure into a
//! [`Skeleton`]: methods, attributes, and who-uses-what. This crate reduces
//! each skeleton to one comparable score per metric — the LCOM family, MMAC,
//! NHD, SCOM and CCM — with degenerate classes yielding an explicit
//! [`MetricValue::Undefined`] instead of a misleading zero.
//!
//! ```
//! use cohesionmap::{evaluate, MetricKind, MemberKind, Method, Skeleton, Visibility};
//!
//! let skeleton = Skeleton::builder("com.example.Counter")
//!     .attribute("count", MemberKind::Instance)
//!     .method(
//!         Method::new("increment()", MemberKind::Instance, Visibility::Public)
//!             .with_uses(["count"]),
//!     )
//!     .method(
//!         Method::new("value()", MemberKind::Instance, Visibility::Public)
//!             .with_uses(["count"]),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let report = evaluate(&skeleton, &MetricKind::ALL);
//! let lcom = report.result(MetricKind::Lcom).unwrap();
//! assert_eq!(lcom.value.as_f64(), Some(0.0));
//! ```

pub mod core;
pub mod engine;
pub mod matrix;
pub mod metrics;
pub mod registry;
pub mod skeleton;

// Re-export commonly used types
pub use crate::core::errors::{Error, Result};
pub use crate::core::{ClassReport, MetricResult, MetricValue, ValueRange};
pub use crate::engine::{evaluate, evaluate_classes, select_metrics, MetricContext};
pub use crate::matrix::UsageMatrix;
pub use crate::registry::{Calculator, MetricKind};
pub use crate::skeleton::{
    Attribute, MemberKind, Method, Skeleton, SkeletonBuilder, Visibility,
};
