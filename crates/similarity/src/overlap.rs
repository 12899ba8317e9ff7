//! Overlap counting over two shingle collections.

use std::hash::Hash;

use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::OverlapMetric;
use crate::shingles::Shingle;

/// Counts derived from the concatenation of both documents' shingles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OverlapStats {
    /// Total shingle occurrences across both documents.
    pub combined: usize,
    /// Distinct shingle values across both documents.
    pub union_count: usize,
    /// `combined - union_count`: every occurrence beyond the first of its value.
    pub overlap_count: usize,
    /// Distinct shingle values present in both documents.
    pub shared_count: usize,
}

impl OverlapStats {
    /// Overlap ratio under `metric`, or `None` when the union is empty.
    pub fn ratio(&self, metric: OverlapMetric) -> Option<f64> {
        if self.union_count == 0 {
            return None;
        }
        let numerator = match metric {
            OverlapMetric::Redundancy => self.overlap_count,
            OverlapMetric::Jaccard => self.shared_count,
        };
        Some(numerator as f64 / self.union_count as f64)
    }
}

/// Count the overlap between two shingle collections.
///
/// Only counts are derived, so swapping `a` and `b` yields identical stats.
pub fn overlap_stats<'s, S>(a: &[Shingle<'s, S>], b: &[Shingle<'s, S>]) -> OverlapStats
where
    S: Hash + Eq,
{
    let distinct_a: FxHashSet<Shingle<'s, S>> = a.iter().copied().collect();
    let distinct_b: FxHashSet<Shingle<'s, S>> = b.iter().copied().collect();

    let shared_count = distinct_a.intersection(&distinct_b).count();
    let union_count = distinct_a.len() + distinct_b.len() - shared_count;
    let combined = a.len() + b.len();

    OverlapStats {
        combined,
        union_count,
        overlap_count: combined - union_count,
        shared_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shingles::make_shingles;

    fn stats(a: &[&str], b: &[&str], k: usize) -> OverlapStats {
        overlap_stats(&make_shingles(a, k), &make_shingles(b, k))
    }

    #[test]
    fn overlap_both_empty() {
        let s = stats(&[], &[], 3);
        assert_eq!(s, OverlapStats::default());
        assert_eq!(s.ratio(OverlapMetric::Redundancy), None);
        assert_eq!(s.ratio(OverlapMetric::Jaccard), None);
    }

    #[test]
    fn overlap_one_side_empty() {
        let s = stats(&["a", "b", "c", "d"], &["x"], 2);
        assert_eq!(s.combined, 3);
        assert_eq!(s.union_count, 3);
        assert_eq!(s.overlap_count, 0);
        assert_eq!(s.ratio(OverlapMetric::Redundancy), Some(0.0));
    }

    #[test]
    fn overlap_identical_documents() {
        let doc = ["a", "b", "c", "d", "e"];
        let s = stats(&doc, &doc, 3);
        assert_eq!(s.combined, 6);
        assert_eq!(s.union_count, 3);
        assert_eq!(s.overlap_count, 3);
        assert_eq!(s.shared_count, 3);
        assert_eq!(s.ratio(OverlapMetric::Redundancy), Some(1.0));
        assert_eq!(s.ratio(OverlapMetric::Jaccard), Some(1.0));
    }

    #[test]
    fn overlap_partial() {
        // a: {ab, bc, cd}; b: {bc, cd, de}
        let s = stats(&["a", "b", "c", "d"], &["b", "c", "d", "e"], 2);
        assert_eq!(s.union_count, 4);
        assert_eq!(s.overlap_count, 2);
        assert_eq!(s.shared_count, 2);
        assert_eq!(s.ratio(OverlapMetric::Redundancy), Some(0.5));
        assert_eq!(s.ratio(OverlapMetric::Jaccard), Some(0.5));
    }

    #[test]
    fn redundancy_counts_within_document_repeats() {
        // "x x x x" with k=2 repeats one shingle three times; the other
        // document shares nothing with it.
        let s = stats(&["x", "x", "x", "x"], &["p", "q"], 2);
        assert_eq!(s.combined, 4);
        assert_eq!(s.union_count, 2);
        assert_eq!(s.overlap_count, 2);
        assert_eq!(s.shared_count, 0);
        assert_eq!(s.ratio(OverlapMetric::Redundancy), Some(1.0));
        assert_eq!(s.ratio(OverlapMetric::Jaccard), Some(0.0));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = ["do", "not", "worry", "about", "it", "now"];
        let b = ["please", "do", "not", "worry", "about", "this"];
        assert_eq!(stats(&a, &b, 3), stats(&b, &a, 3));
    }
}
