//! Evaluation engine: one class, many metrics, the usage matrix built once.
//!
//! Computation is CPU-bound and read-only over immutable skeletons, so
//! classes fan out over a rayon worker pool with no synchronization beyond
//! collecting results; one class's computation can never affect another's.

use log::debug;
use once_cell::sync::OnceCell;
use rayon::prelude::*;

use crate::core::errors::Result;
use crate::core::{ClassReport, MetricResult};
use crate::matrix::UsageMatrix;
use crate::registry::MetricKind;
use crate::skeleton::Skeleton;

/// Evaluation scope for a single class.
///
/// Borrows the skeleton and derives its [`UsageMatrix`] at most once,
/// however many metrics are requested; every calculator invocation within
/// this scope borrows the same cached matrix.
pub struct MetricContext<'a> {
    skeleton: &'a Skeleton,
    matrix: OnceCell<UsageMatrix>,
}

impl<'a> MetricContext<'a> {
    pub fn new(skeleton: &'a Skeleton) -> Self {
        Self {
            skeleton,
            matrix: OnceCell::new(),
        }
    }

    pub fn skeleton(&self) -> &Skeleton {
        self.skeleton
    }

    /// The shared usage matrix, built on first access
    pub fn matrix(&self) -> &UsageMatrix {
        self.matrix
            .get_or_init(|| UsageMatrix::build(self.skeleton))
    }

    /// Compute one metric for this class
    pub fn evaluate(&self, metric: MetricKind) -> MetricResult {
        let value = metric.evaluate(self.skeleton, self.matrix());
        debug!("{} {metric} = {value}", self.skeleton.name());
        MetricResult {
            class: self.skeleton.name().to_string(),
            metric,
            value,
            range: metric.range(),
        }
    }

    /// Compute the requested metrics, in request order
    pub fn evaluate_all(&self, metrics: &[MetricKind]) -> Vec<MetricResult> {
        metrics.iter().map(|&metric| self.evaluate(metric)).collect()
    }
}

/// Evaluate the requested metrics for one class. The usage matrix is derived
/// once regardless of how many metrics are asked for.
pub fn evaluate(skeleton: &Skeleton, metrics: &[MetricKind]) -> ClassReport {
    let context = MetricContext::new(skeleton);
    ClassReport {
        class: skeleton.name().to_string(),
        results: context.evaluate_all(metrics),
    }
}

/// Evaluate many classes in parallel, one report per class in input order.
pub fn evaluate_classes(skeletons: &[Skeleton], metrics: &[MetricKind]) -> Vec<ClassReport> {
    skeletons
        .par_iter()
        .map(|skeleton| evaluate(skeleton, metrics))
        .collect()
}

/// Resolve textual metric identifiers to kinds. An empty selection means
/// all registered metrics; any unknown identifier fails the whole selection
/// before computation starts.
pub fn select_metrics(identifiers: &[&str]) -> Result<Vec<MetricKind>> {
    if identifiers.is_empty() {
        return Ok(MetricKind::ALL.to_vec());
    }
    identifiers.iter().map(|id| id.parse()).collect()
}
