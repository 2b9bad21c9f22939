//! Shared error types for the crate

use thiserror::Error;

/// Main error type for cohesionmap operations.
///
/// Structural defects (dangling references, duplicate members) are caught
/// once, at skeleton build time. Degenerate classes are not errors: they
/// produce [`crate::core::MetricValue::Undefined`] instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A method reads or writes an attribute the class does not declare
    #[error("class {class}: method {method} uses unresolved attribute {attribute}")]
    UnresolvedAttribute {
        class: String,
        method: String,
        attribute: String,
    },

    /// A method invokes a method the class does not declare
    #[error("class {class}: method {method} calls unresolved method {callee}")]
    UnresolvedCall {
        class: String,
        method: String,
        callee: String,
    },

    /// Two attributes share a name within one class
    #[error("class {class}: duplicate attribute {attribute}")]
    DuplicateAttribute { class: String, attribute: String },

    /// Two methods share a signature within one class
    #[error("class {class}: duplicate method signature {method}")]
    DuplicateMethod { class: String, method: String },

    /// Metric identifier does not match any registered calculator
    #[error("unknown metric identifier: {0}")]
    UnknownMetric(String),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
