//! Lack-of-cohesion-of-methods family: LCOM, LCOM2, LCOM3, LCOM5.
//!
//! Four published formulations of the same intuition — methods that do not
//! share attributes do not belong together — with different normalization:
//!
//! - `LCOM`  — Chidamber–Kemerer pair count, `max(0, P − Q)`, unbounded.
//! - `LCOM2` — incidence-normalized, `1 − Σμ(a_k)/(m·a)`, in [0, 1].
//! - `LCOM3` — Henderson-Sellers per-method normalization,
//!   `(m − Σμ(a_k)/a)/(m − 1)`, in [0, 1].
//! - `LCOM5` — the same construction rearranged so that 0 means every method
//!   uses every attribute: `(Σμ(a_k)/a − m)/(1 − m)`, in [0, 1].

use crate::core::MetricValue;
use crate::matrix::UsageMatrix;
use crate::skeleton::Skeleton;

/// Pair-counting LCOM: P = method pairs sharing no attribute, Q = pairs
/// sharing at least one; result is `max(0, P − Q)`.
///
/// Methods that use no attributes at all are excluded from pair counting:
/// using nothing is not evidence of disjointness. With fewer than two
/// qualifying methods there are no pairs to disagree, so the result is 0.
pub fn lcom(_skeleton: &Skeleton, matrix: &UsageMatrix) -> MetricValue {
    let qualifying: Vec<usize> =
        (0..matrix.method_count()).filter(|&i| matrix.usage_count(i) > 0).collect();
    if qualifying.len() < 2 {
        return MetricValue::defined(0.0);
    }

    let mut disjoint: i64 = 0;
    let mut sharing: i64 = 0;
    for (n, &i) in qualifying.iter().enumerate() {
        for &j in &qualifying[n + 1..] {
            if matrix.shared(i, j) > 0 {
                sharing += 1;
            } else {
                disjoint += 1;
            }
        }
    }

    MetricValue::defined((disjoint - sharing).max(0) as f64)
}

/// LCOM2: `1 − Σμ(a_k)/(m·a)`. Undefined when the class has no methods or
/// no attributes.
pub fn lcom2(_skeleton: &Skeleton, matrix: &UsageMatrix) -> MetricValue {
    let m = matrix.method_count();
    let a = matrix.attribute_count();
    if m == 0 || a == 0 {
        return MetricValue::Undefined;
    }
    MetricValue::unit(1.0 - matrix.incidence() as f64 / (m * a) as f64)
}

/// LCOM3: `(m − Σμ(a_k)/a)/(m − 1)`. Undefined when the class has no
/// methods, no attributes, or exactly one method (zero denominator).
pub fn lcom3(_skeleton: &Skeleton, matrix: &UsageMatrix) -> MetricValue {
    let m = matrix.method_count();
    let a = matrix.attribute_count();
    if m <= 1 || a == 0 {
        return MetricValue::Undefined;
    }
    let mean_fanin = matrix.incidence() as f64 / a as f64;
    MetricValue::unit((m as f64 - mean_fanin) / (m as f64 - 1.0))
}

/// LCOM5 (normalized Henderson-Sellers): `(Σμ(a_k)/a − m)/(1 − m)` for
/// `m > 1` and `a > 0`; defined as 0 when `m ≤ 1`, undefined when `a = 0`.
pub fn lcom5(_skeleton: &Skeleton, matrix: &UsageMatrix) -> MetricValue {
    let m = matrix.method_count();
    let a = matrix.attribute_count();
    if m <= 1 {
        return MetricValue::defined(0.0);
    }
    if a == 0 {
        return MetricValue::Undefined;
    }
    let mean_fanin = matrix.incidence() as f64 / a as f64;
    MetricValue::unit((mean_fanin - m as f64) / (1.0 - m as f64))
}
