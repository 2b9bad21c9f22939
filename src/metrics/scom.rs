//! SCOM: sum of cohesion over method pairs.
//!
//! Every unordered pair where at least one member uses attributes
//! contributes `shared(i,j) / max(|uses(i)|, |uses(j)|)` — the ratio of
//! common attributes to the larger usage set. SCOM is the sum over those
//! qualifying pairs divided by the total pair count. Higher is more cohesive.

use crate::core::MetricValue;
use crate::matrix::UsageMatrix;
use crate::metrics::pair_count;
use crate::skeleton::Skeleton;

/// SCOM in [0, 1]. Undefined when there are zero qualifying pairs — fewer
/// than two methods, or no method using any attribute.
pub fn scom(_skeleton: &Skeleton, matrix: &UsageMatrix) -> MetricValue {
    let m = matrix.method_count();
    if m < 2 {
        return MetricValue::Undefined;
    }

    let a = matrix.attribute_count();
    // Pair contributions are rationals shared/d with d ≤ a. Accumulating
    // integer numerators per denominator keeps the final sum independent of
    // pair iteration order.
    let mut numerators = vec![0usize; a + 1];
    let mut qualifying = 0usize;
    for i in 0..m {
        for j in i + 1..m {
            let larger = matrix.usage_count(i).max(matrix.usage_count(j));
            if larger == 0 {
                continue;
            }
            qualifying += 1;
            numerators[larger] += matrix.shared(i, j);
        }
    }

    if qualifying == 0 {
        return MetricValue::Undefined;
    }

    let sum: f64 = numerators
        .iter()
        .enumerate()
        .skip(1)
        .map(|(d, &n)| n as f64 / d as f64)
        .sum();
    MetricValue::unit(sum / pair_count(m) as f64)
}
