//! MinHash sketch comparison.
//!
//! An approximate alternative to [`crate::compare`]: each document's shingles
//! are hashed, reduced to a fixed-length MinHash signature, and the fraction
//! of agreeing signature slots estimates the Jaccard similarity of the two
//! shingle sets. Within-document repeats have no effect on the estimate.
//!
//! Only compiled with the `sketch` feature.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;
use xxhash_rust::xxh3::xxh3_64_with_seed;

use crate::config::{SimilarityConfig, ZeroUnionPolicy};
use crate::error::SimilarityError;
use crate::tokenize::tokenize;

/// Parameters of the MinHash signature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SketchConfig {
    /// Signature length. Estimation error shrinks with `1 / sqrt(num_hashes)`.
    pub num_hashes: usize,
    /// Seed for every hash function. Equal seeds give bit-identical signatures.
    pub seed: u64,
    /// Compute signature slots on the rayon pool.
    pub use_parallel: bool,
}

impl SketchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_num_hashes(mut self, num_hashes: usize) -> Self {
        self.num_hashes = num_hashes;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    pub fn validate(&self) -> Result<(), SimilarityError> {
        if self.num_hashes == 0 {
            return Err(SimilarityError::InvalidSketchLength {
                num_hashes: self.num_hashes,
            });
        }
        Ok(())
    }
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            num_hashes: 128,
            seed: 0xF00D_BAAD_F00D_BAAD,
            use_parallel: false,
        }
    }
}

/// Result of a sketch comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SketchComparison {
    pub shingles_a: usize,
    pub shingles_b: usize,
    /// Estimated Jaccard similarity; `None` when neither text has a shingle.
    pub estimate: Option<f64>,
    pub threshold: f64,
    pub is_near_duplicate: bool,
}

/// Hash every `k`-token window of `tokens` in O(n).
///
/// Tokens are hashed individually, then combined with a rolling polynomial
/// hash so each step costs O(1) regardless of `k`.
pub fn make_shingle_hashes<S: AsRef<str>>(tokens: &[S], k: usize, seed: u64) -> Vec<u64> {
    let n = tokens.len();
    if k == 0 || n < k {
        return Vec::new();
    }
    let th: Vec<u64> = tokens
        .iter()
        .map(|t| xxh3_64_with_seed(t.as_ref().as_bytes(), seed))
        .collect();

    const BASE: u64 = 1_000_003;
    let base = BASE ^ splitmix64(seed);

    // base^(k-1), to drop the oldest token from the window.
    let mut base_km1 = 1u64;
    for _ in 1..k {
        base_km1 = base_km1.wrapping_mul(base);
    }

    let mut out = Vec::with_capacity(n - k + 1);
    let mut h = 0u64;
    for &val in th.iter().take(k) {
        h = h.wrapping_mul(base).wrapping_add(val);
    }
    out.push(h);

    for (&old, &new) in th.iter().zip(th.iter().skip(k)) {
        h = h.wrapping_sub(old.wrapping_mul(base_km1));
        h = h.wrapping_mul(base).wrapping_add(new);
        out.push(h);
    }
    out
}

/// Compute a MinHash signature of `cfg.num_hashes` slots.
///
/// `unique_hashes` should be deduplicated. An empty input yields a signature
/// of `u64::MAX` in every slot.
pub fn minhash_signature(unique_hashes: &[u64], cfg: &SketchConfig) -> Vec<u64> {
    let m = cfg.num_hashes;
    if m == 0 {
        return Vec::new();
    }
    if unique_hashes.is_empty() {
        return vec![u64::MAX; m];
    }

    let mut result = Vec::with_capacity(m);
    if cfg.use_parallel {
        (0..m)
            .into_par_iter()
            .map(|j| compute_slot(unique_hashes, j, cfg.seed))
            .collect_into_vec(&mut result);
    } else {
        result.extend((0..m).map(|j| compute_slot(unique_hashes, j, cfg.seed)));
    }
    result
}

/// Fraction of slots on which two signatures agree.
///
/// Signatures of different lengths are compared over the longer length, so
/// missing slots count as disagreements.
pub fn estimate_similarity(sig_a: &[u64], sig_b: &[u64]) -> f64 {
    let len = sig_a.len().max(sig_b.len());
    if len == 0 {
        return 0.0;
    }
    let matches = sig_a
        .iter()
        .zip(sig_b.iter())
        .filter(|(a, b)| a == b)
        .count();
    matches as f64 / len as f64
}

/// Approximate near-duplicate check using MinHash signatures.
///
/// `cfg` supplies the threshold, shingle size and zero-union policy; its
/// metric is ignored because the sketch always estimates Jaccard similarity.
pub fn sketch_compare(
    text_a: &str,
    text_b: &str,
    cfg: &SimilarityConfig,
    sketch: &SketchConfig,
) -> Result<SketchComparison, SimilarityError> {
    cfg.validate()?;
    sketch.validate()?;

    let hashes_a = make_shingle_hashes(&tokenize(text_a), cfg.shingle_size, sketch.seed);
    let hashes_b = make_shingle_hashes(&tokenize(text_b), cfg.shingle_size, sketch.seed);

    if hashes_a.is_empty() && hashes_b.is_empty() {
        return match cfg.zero_union {
            ZeroUnionPolicy::NotDuplicate => Ok(SketchComparison {
                shingles_a: 0,
                shingles_b: 0,
                estimate: None,
                threshold: cfg.threshold,
                is_near_duplicate: false,
            }),
            ZeroUnionPolicy::Reject => Err(SimilarityError::IndeterminateComparison {
                shingle_size: cfg.shingle_size,
            }),
        };
    }

    let sig_a = minhash_signature(&dedup_sorted(&hashes_a), sketch);
    let sig_b = minhash_signature(&dedup_sorted(&hashes_b), sketch);
    let estimate = estimate_similarity(&sig_a, &sig_b);
    let is_near_duplicate = estimate > cfg.threshold;

    debug!(
        shingles_a = hashes_a.len(),
        shingles_b = hashes_b.len(),
        num_hashes = sketch.num_hashes,
        estimate,
        is_near_duplicate,
        "sketch_comparison_complete"
    );

    Ok(SketchComparison {
        shingles_a: hashes_a.len(),
        shingles_b: hashes_b.len(),
        estimate: Some(estimate),
        threshold: cfg.threshold,
        is_near_duplicate,
    })
}

fn dedup_sorted(hashes: &[u64]) -> Vec<u64> {
    let mut uniq = hashes.to_vec();
    uniq.sort_unstable();
    uniq.dedup();
    uniq
}

/// Minimum over all shingles of the `j`-th hash function.
#[inline]
fn compute_slot(unique_hashes: &[u64], j: usize, seed: u64) -> u64 {
    let step = (j as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let key = splitmix64(seed.wrapping_add(step));
    unique_hashes
        .iter()
        .map(|&val| mix_u64(val, key))
        .min()
        .unwrap_or(u64::MAX)
}

#[inline]
fn mix_u64(x: u64, key: u64) -> u64 {
    let mut h = xxh3_64_with_seed(&x.to_le_bytes(), key);
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51afd7ed558ccd);
    h ^= h >> 33;
    h = h.wrapping_mul(0xc4ceb9fe1a85ec53);
    h ^ (h >> 33)
}

#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}
