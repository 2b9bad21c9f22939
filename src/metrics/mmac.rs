//! MMAC: mean method-attribute cohesion.
//!
//! For each attribute, `r_k = μ(a_k)/m` is the fraction of methods using it;
//! MMAC is the mean of `r_k` over all attributes, i.e. `Σμ(a_k)/(a·m)`.
//! Opposite polarity from the LCOM family: higher means more cohesive.

use crate::core::MetricValue;
use crate::matrix::UsageMatrix;
use crate::skeleton::Skeleton;

/// MMAC in [0, 1]. Undefined when the class has no attributes or no methods.
pub fn mmac(_skeleton: &Skeleton, matrix: &UsageMatrix) -> MetricValue {
    let m = matrix.method_count();
    let a = matrix.attribute_count();
    if m == 0 || a == 0 {
        return MetricValue::Undefined;
    }
    MetricValue::unit(matrix.incidence() as f64 / (a * m) as f64)
}
