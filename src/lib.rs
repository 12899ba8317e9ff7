//! Workspace umbrella crate for NearDup.
//!
//! Re-exports the `similarity` crate and adds configuration-driven
//! comparisons: a [`NearDupConfig`] loaded from YAML selects the overlap
//! metric, zero-union policy and, with the `sketch` feature, the MinHash
//! variant.

pub mod config;

pub use similarity::{
    compare, is_near_duplicate, is_near_duplicate_default, make_shingles, overlap_stats,
    tokenize, Comparison, ComparisonRequest, OverlapMetric, OverlapStats, SimilarityConfig,
    SimilarityError, ZeroUnionPolicy, DEFAULT_SHINGLE_SIZE, DEFAULT_THRESHOLD,
};
#[cfg(feature = "sketch")]
pub use similarity::sketch::{sketch_compare, SketchComparison, SketchConfig};

pub use crate::config::{ConfigLoadError, NearDupConfig, SimilarityYamlConfig, SketchYamlConfig};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, Level};

/// Errors from configuration-driven comparisons.
#[derive(Debug, Error)]
pub enum NearDupError {
    #[error("configuration rejected: {0}")]
    Config(#[from] ConfigLoadError),

    #[error("comparison failed: {0}")]
    Comparison(#[from] SimilarityError),
}

/// Outcome of [`compare_with_config`], tagged by the algorithm that ran.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum PairReport {
    Exact(Comparison),
    #[cfg(feature = "sketch")]
    Sketch(SketchComparison),
}

impl PairReport {
    pub fn is_near_duplicate(&self) -> bool {
        match self {
            PairReport::Exact(cmp) => cmp.is_near_duplicate,
            #[cfg(feature = "sketch")]
            PairReport::Sketch(cmp) => cmp.is_near_duplicate,
        }
    }

    /// The value that was compared against the threshold, if any.
    pub fn score(&self) -> Option<f64> {
        match self {
            PairReport::Exact(cmp) => cmp.ratio,
            #[cfg(feature = "sketch")]
            PairReport::Sketch(cmp) => cmp.estimate,
        }
    }

    pub fn algorithm(&self) -> &'static str {
        match self {
            PairReport::Exact(_) => "exact",
            #[cfg(feature = "sketch")]
            PairReport::Sketch(_) => "sketch",
        }
    }
}

/// Compare two texts using the settings in `cfg`.
///
/// Runs the exact shingle comparison, or the MinHash sketch when `cfg`
/// carries a `sketch` section.
pub fn compare_with_config(
    text_a: &str,
    text_b: &str,
    cfg: &NearDupConfig,
) -> Result<PairReport, NearDupError> {
    cfg.validate()?;

    let span = tracing::span!(
        Level::DEBUG,
        "neardup.compare_with_config",
        config_name = cfg.name.as_deref().unwrap_or("default")
    );
    let _guard = span.enter();

    let report = run_comparison(text_a, text_b, cfg)?;

    debug!(
        algorithm = report.algorithm(),
        score = ?report.score(),
        is_near_duplicate = report.is_near_duplicate(),
        "pair_compared"
    );
    Ok(report)
}

#[cfg(feature = "sketch")]
fn run_comparison(
    text_a: &str,
    text_b: &str,
    cfg: &NearDupConfig,
) -> Result<PairReport, SimilarityError> {
    let similarity_cfg = cfg.similarity_config();
    match &cfg.sketch {
        Some(sketch) => sketch_compare(text_a, text_b, &similarity_cfg, &sketch.to_config())
            .map(PairReport::Sketch),
        None => compare(text_a, text_b, &similarity_cfg).map(PairReport::Exact),
    }
}

#[cfg(not(feature = "sketch"))]
fn run_comparison(
    text_a: &str,
    text_b: &str,
    cfg: &NearDupConfig,
) -> Result<PairReport, SimilarityError> {
    compare(text_a, text_b, &cfg.similarity_config()).map(PairReport::Exact)
}

/// Evaluate a [`ComparisonRequest`], filling missing parameters from `cfg`.
pub fn evaluate_request(
    request: &ComparisonRequest,
    cfg: &NearDupConfig,
) -> Result<Comparison, NearDupError> {
    cfg.validate()?;
    Ok(request.evaluate_with(&cfg.similarity_config())?)
}
