//! NHD: normalized Hamming distance between attribute-usage vectors.
//!
//! For every unordered method pair, the Hamming distance between their
//! boolean usage vectors divided by the attribute count; NHD is the mean of
//! that normalized distance over all pairs. Distance polarity: 0 means every
//! method touches the same attributes, 1 means every pair disagrees on every
//! attribute.

use crate::core::MetricValue;
use crate::matrix::UsageMatrix;
use crate::metrics::pair_count;
use crate::skeleton::Skeleton;

/// NHD in [0, 1]. Undefined when the class has no attributes or fewer than
/// two methods (no pairs to compare).
pub fn nhd(_skeleton: &Skeleton, matrix: &UsageMatrix) -> MetricValue {
    let m = matrix.method_count();
    let a = matrix.attribute_count();
    if a == 0 || m < 2 {
        return MetricValue::Undefined;
    }

    // The sum of pairwise distances is an integer, so one final division
    // keeps the result independent of pair iteration order.
    let mut total: usize = 0;
    for i in 0..m {
        for j in i + 1..m {
            total += matrix.hamming(i, j);
        }
    }

    MetricValue::unit(total as f64 / (a * pair_count(m)) as f64)
}
