//! Derived usage structure shared by every metric calculator for one class.
//!
//! Rows follow method declaration order and columns follow attribute
//! declaration order, so the matrix is reproducible across runs for the same
//! skeleton. Built once per class and borrowed read-only by all calculators.

use std::collections::HashMap;

use crate::skeleton::Skeleton;

/// Boolean method×attribute usage matrix plus method×method call adjacency,
/// with the convenience views several metrics share: per-method usage
/// vectors, per-attribute fan-in, pairwise shared-attribute counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsageMatrix {
    methods: usize,
    attributes: usize,
    /// methods × attributes, row-major
    usage: Vec<bool>,
    /// methods × methods, directed, self-loops excluded
    calls: Vec<bool>,
    /// |uses(i)| per method
    usage_counts: Vec<usize>,
    /// μ(a_k): number of methods using attribute k
    fanin: Vec<usize>,
}

impl UsageMatrix {
    /// Derive the matrix from a validated skeleton in O(m·a + m·calls).
    pub fn build(skeleton: &Skeleton) -> Self {
        let methods = skeleton.method_count();
        let attributes = skeleton.attribute_count();

        let attribute_index: HashMap<&str, usize> = skeleton
            .attributes()
            .iter()
            .enumerate()
            .map(|(k, a)| (a.name.as_str(), k))
            .collect();
        let method_index: HashMap<&str, usize> = skeleton
            .methods()
            .iter()
            .enumerate()
            .map(|(i, m)| (m.signature(), i))
            .collect();

        let mut usage = vec![false; methods * attributes];
        let mut calls = vec![false; methods * methods];
        let mut usage_counts = vec![0; methods];
        let mut fanin = vec![0; attributes];

        for (i, method) in skeleton.methods().iter().enumerate() {
            for used in method.uses() {
                // The builder guarantees resolution; a miss cannot happen
                // for a skeleton that came out of SkeletonBuilder::build.
                if let Some(&k) = attribute_index.get(used.as_str()) {
                    usage[i * attributes + k] = true;
                    usage_counts[i] += 1;
                    fanin[k] += 1;
                }
            }
            for callee in method.calls() {
                if let Some(&j) = method_index.get(callee.as_str()) {
                    if j != i {
                        calls[i * methods + j] = true;
                    }
                }
            }
        }

        Self {
            methods,
            attributes,
            usage,
            calls,
            usage_counts,
            fanin,
        }
    }

    pub fn method_count(&self) -> usize {
        self.methods
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes
    }

    /// Whether method `i` uses attribute `k`
    pub fn uses(&self, i: usize, k: usize) -> bool {
        self.usage[i * self.attributes + k]
    }

    /// Whether method `i` calls method `j` directly
    pub fn calls(&self, i: usize, j: usize) -> bool {
        self.calls[i * self.methods + j]
    }

    /// Attribute-usage vector of method `i`, in attribute declaration order
    pub fn usage_row(&self, i: usize) -> &[bool] {
        &self.usage[i * self.attributes..(i + 1) * self.attributes]
    }

    /// Number of attributes method `i` uses
    pub fn usage_count(&self, i: usize) -> usize {
        self.usage_counts[i]
    }

    /// μ(a_k): number of methods using attribute `k`
    pub fn fanin(&self, k: usize) -> usize {
        self.fanin[k]
    }

    /// Σ_k μ(a_k): total method–attribute incidence
    pub fn incidence(&self) -> usize {
        self.fanin.iter().sum()
    }

    /// Indices of the methods that use attribute `k`
    pub fn users_of(&self, k: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.methods).filter(move |&i| self.uses(i, k))
    }

    /// Number of attributes used by both method `i` and method `j`
    pub fn shared(&self, i: usize, j: usize) -> usize {
        self.usage_row(i)
            .iter()
            .zip(self.usage_row(j))
            .filter(|(a, b)| **a && **b)
            .count()
    }

    /// Hamming distance between the usage vectors of methods `i` and `j`
    pub fn hamming(&self, i: usize, j: usize) -> usize {
        self.usage_row(i)
            .iter()
            .zip(self.usage_row(j))
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Whether either method calls the other directly
    pub fn connected(&self, i: usize, j: usize) -> bool {
        self.calls(i, j) || self.calls(j, i)
    }
}
