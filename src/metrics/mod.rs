//! Cohesion metric calculators.
//!
//! Every calculator is a pure function with the uniform signature
//! `fn(&Skeleton, &UsageMatrix) -> MetricValue`: no state, no I/O, and no
//! panics for a skeleton that passed builder validation. Degenerate classes
//! (no methods, no attributes, too few pairs) yield the explicit
//! [`MetricValue::Undefined`](crate::core::MetricValue) rather than a silent
//! zero — an attribute-less class has no defined cohesion, not perfect
//! cohesion.
//!
//! Polarity differs across the family: LCOM/LCOM2/LCOM3/LCOM5 and NHD grow
//! as cohesion degrades, while MMAC, SCOM and CCM grow as cohesion improves.

pub mod ccm;
pub mod lcom;
pub mod mmac;
pub mod nhd;
pub mod scom;

/// Number of unordered pairs among `n` items
pub(crate) fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}
