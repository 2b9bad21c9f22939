//! CCM: call-based class cohesion.
//!
//! The only metric in the family that consults the method-call adjacency.
//! An unordered method pair is a member when either method calls the other
//! directly, or the two share at least one attribute; CCM is the membership
//! count divided by the total pair count. Higher is more cohesive.

use crate::core::MetricValue;
use crate::matrix::UsageMatrix;
use crate::metrics::pair_count;
use crate::skeleton::Skeleton;

/// CCM in [0, 1]. Undefined when the class has fewer than two methods.
pub fn ccm(_skeleton: &Skeleton, matrix: &UsageMatrix) -> MetricValue {
    let m = matrix.method_count();
    if m < 2 {
        return MetricValue::Undefined;
    }

    let mut members: usize = 0;
    for i in 0..m {
        for j in i + 1..m {
            if matrix.connected(i, j) || matrix.shared(i, j) > 0 {
                members += 1;
            }
        }
    }

    MetricValue::unit(members as f64 / pair_count(m) as f64)
}
