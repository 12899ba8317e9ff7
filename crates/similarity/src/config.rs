//! Configuration types for near-duplicate comparisons.
//!
//! A [`SimilarityConfig`] fully determines the outcome of a comparison for a
//! given pair of texts. It carries no I/O or environment-dependent state.

use serde::{Deserialize, Serialize};

use crate::error::SimilarityError;

/// Default decision threshold.
pub const DEFAULT_THRESHOLD: f64 = 0.9;

/// Default number of tokens per shingle.
pub const DEFAULT_SHINGLE_SIZE: usize = 3;

/// How the overlap ratio is computed from the combined shingle collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OverlapMetric {
    /// `(total_shingles - distinct_shingles) / distinct_shingles`.
    ///
    /// Repeats inside a single document count as overlap, so the ratio can
    /// exceed 1.0.
    #[default]
    Redundancy,
    /// Distinct shingles present in both documents over distinct shingles in
    /// either. Always within `[0.0, 1.0]`.
    Jaccard,
}

/// Outcome when neither document yields a single shingle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ZeroUnionPolicy {
    /// Report the pair as not near-duplicate.
    #[default]
    NotDuplicate,
    /// Fail with [`SimilarityError::IndeterminateComparison`].
    Reject,
}

/// Parameters of a single comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityConfig {
    /// Configuration schema version.
    pub version: u32,
    /// The ratio must be strictly greater than this value.
    pub threshold: f64,
    /// Number of consecutive tokens per shingle.
    pub shingle_size: usize,
    #[serde(default)]
    pub metric: OverlapMetric,
    #[serde(default)]
    pub zero_union: ZeroUnionPolicy,
}

impl SimilarityConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_shingle_size(mut self, shingle_size: usize) -> Self {
        self.shingle_size = shingle_size;
        self
    }

    pub fn with_metric(mut self, metric: OverlapMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_zero_union(mut self, zero_union: ZeroUnionPolicy) -> Self {
        self.zero_union = zero_union;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), SimilarityError> {
        if self.version < 1 {
            return Err(SimilarityError::InvalidConfigVersion {
                version: self.version,
            });
        }
        validate_arguments(self.threshold, self.shingle_size)
    }
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            version: 1,
            threshold: DEFAULT_THRESHOLD,
            shingle_size: DEFAULT_SHINGLE_SIZE,
            metric: OverlapMetric::Redundancy,
            zero_union: ZeroUnionPolicy::NotDuplicate,
        }
    }
}

/// Argument checks on the raw comparison parameters.
fn validate_arguments(threshold: f64, shingle_size: usize) -> Result<(), SimilarityError> {
    if shingle_size == 0 {
        return Err(SimilarityError::InvalidShingleSize { shingle_size });
    }
    if !threshold.is_finite() {
        return Err(SimilarityError::InvalidThreshold { threshold });
    }
    Ok(())
}
