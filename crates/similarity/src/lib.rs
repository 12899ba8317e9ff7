//! # Shingle Similarity
//!
//! Near-duplicate detection for a pair of text documents using word shingles.
//!
//! ## Contract
//!
//! - Every comparison is a pure function of `(text_a, text_b, config)`: no
//!   I/O, no clocks in the result, no global state.
//! - Comparisons are symmetric in the two texts.
//! - Tokenization is whitespace splitting only.
//!
//! ## Pipeline
//!
//! 1.  **Tokenize**: each text is split on whitespace runs, keeping order.
//! 2.  **Shingle**: every window of `shingle_size` consecutive tokens becomes a
//!     shingle. Repeated windows are kept.
//! 3.  **Count**: both shingle collections are concatenated. The union count
//!     is the number of distinct shingles; the overlap count is the total
//!     minus the union count.
//! 4.  **Decide**: the overlap ratio is compared against the threshold with a
//!     strict `>`. When neither document has a shingle the
//!     [`ZeroUnionPolicy`] decides the outcome.
//!
//! ## Example Usage
//!
//! ```
//! use similarity::{compare, is_near_duplicate, SimilarityConfig};
//!
//! let a = "the quick brown fox jumps over the lazy dog";
//! let b = "the quick brown fox jumps over the lazy cat";
//!
//! assert!(is_near_duplicate(a, a, 0.9, 3).unwrap());
//!
//! let cmp = compare(a, b, &SimilarityConfig::new().with_threshold(0.5)).unwrap();
//! assert_eq!(cmp.stats.union_count, 8);
//! assert!(cmp.is_near_duplicate);
//! ```
//!
pub mod config;
mod error;
mod overlap;
mod request;
mod shingles;
#[cfg(feature = "sketch")]
pub mod sketch;
mod tokenize;

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn, Level};

pub use crate::config::{
    OverlapMetric, SimilarityConfig, ZeroUnionPolicy, DEFAULT_SHINGLE_SIZE, DEFAULT_THRESHOLD,
};
pub use crate::error::SimilarityError;
pub use crate::overlap::{overlap_stats, OverlapStats};
pub use crate::request::ComparisonRequest;
pub use crate::shingles::{make_shingles, Shingle};
pub use crate::tokenize::tokenize;

/// Result of comparing two documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comparison {
    /// Shingles extracted from the first text.
    pub shingles_a: usize,
    /// Shingles extracted from the second text.
    pub shingles_b: usize,
    pub stats: OverlapStats,
    /// `None` when neither text produced a shingle.
    pub ratio: Option<f64>,
    pub threshold: f64,
    pub metric: OverlapMetric,
    pub is_near_duplicate: bool,
}

/// Decide whether two texts are near-duplicates.
///
/// Uses the [`OverlapMetric::Redundancy`] ratio and reports `false` when
/// neither text has `shingle_size` tokens. Use [`compare`] for other metrics,
/// for the zero-union [`ZeroUnionPolicy::Reject`] policy, or for the counts.
pub fn is_near_duplicate(
    text_a: &str,
    text_b: &str,
    threshold: f64,
    shingle_size: usize,
) -> Result<bool, SimilarityError> {
    let cfg = SimilarityConfig::new()
        .with_threshold(threshold)
        .with_shingle_size(shingle_size);
    compare(text_a, text_b, &cfg).map(|cmp| cmp.is_near_duplicate)
}

/// [`is_near_duplicate`] with the default threshold (0.9) and shingle size (3).
pub fn is_near_duplicate_default(text_a: &str, text_b: &str) -> Result<bool, SimilarityError> {
    is_near_duplicate(text_a, text_b, DEFAULT_THRESHOLD, DEFAULT_SHINGLE_SIZE)
}

/// Compare two texts under `cfg` and return the full breakdown.
pub fn compare(
    text_a: &str,
    text_b: &str,
    cfg: &SimilarityConfig,
) -> Result<Comparison, SimilarityError> {
    let start = Instant::now();
    if let Err(err) = cfg.validate() {
        warn!(error = %err, "comparison_rejected");
        return Err(err);
    }

    let span = tracing::span!(
        Level::DEBUG,
        "similarity.compare",
        shingle_size = cfg.shingle_size,
        threshold = cfg.threshold,
        metric = ?cfg.metric
    );
    let _guard = span.enter();

    let tokens_a = tokenize(text_a);
    let tokens_b = tokenize(text_b);
    let shingles_a = make_shingles(&tokens_a, cfg.shingle_size);
    let shingles_b = make_shingles(&tokens_b, cfg.shingle_size);

    let stats = overlap_stats(&shingles_a, &shingles_b);
    let ratio = stats.ratio(cfg.metric);

    let is_near_duplicate = match (ratio, cfg.zero_union) {
        (Some(ratio), _) => ratio > cfg.threshold,
        (None, ZeroUnionPolicy::NotDuplicate) => false,
        (None, ZeroUnionPolicy::Reject) => {
            let err = SimilarityError::IndeterminateComparison {
                shingle_size: cfg.shingle_size,
            };
            warn!(
                tokens_a = tokens_a.len(),
                tokens_b = tokens_b.len(),
                error = %err,
                "comparison_rejected"
            );
            return Err(err);
        }
    };

    debug!(
        shingles_a = shingles_a.len(),
        shingles_b = shingles_b.len(),
        union_count = stats.union_count,
        overlap_count = stats.overlap_count,
        shared_count = stats.shared_count,
        ratio = ?ratio,
        is_near_duplicate,
        elapsed_micros = start.elapsed().as_micros() as u64,
        "comparison_complete"
    );

    Ok(Comparison {
        shingles_a: shingles_a.len(),
        shingles_b: shingles_b.len(),
        stats,
        ratio,
        threshold: cfg.threshold,
        metric: cfg.metric,
        is_near_duplicate,
    })
}
