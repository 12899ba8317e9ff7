//! Serializable comparison requests.
//!
//! Callers that receive comparisons as data (JSON, YAML) may omit any field.
//! Missing texts are rejected; missing parameters fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::config::{OverlapMetric, SimilarityConfig, ZeroUnionPolicy};
use crate::error::SimilarityError;
use crate::{compare, Comparison};

/// A near-duplicate comparison described as data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ComparisonRequest {
    pub text_a: Option<String>,
    pub text_b: Option<String>,
    pub threshold: Option<f64>,
    pub shingle_size: Option<usize>,
    pub metric: Option<OverlapMetric>,
    pub zero_union: Option<ZeroUnionPolicy>,
}

impl ComparisonRequest {
    pub fn new(text_a: impl Into<String>, text_b: impl Into<String>) -> Self {
        Self {
            text_a: Some(text_a.into()),
            text_b: Some(text_b.into()),
            ..Default::default()
        }
    }

    /// Resolve the request against `base`, with request fields taking priority.
    pub fn config_over(&self, base: &SimilarityConfig) -> SimilarityConfig {
        SimilarityConfig {
            version: base.version,
            threshold: self.threshold.unwrap_or(base.threshold),
            shingle_size: self.shingle_size.unwrap_or(base.shingle_size),
            metric: self.metric.unwrap_or(base.metric),
            zero_union: self.zero_union.unwrap_or(base.zero_union),
        }
    }

    /// Run the comparison with library defaults for missing parameters.
    pub fn evaluate(&self) -> Result<Comparison, SimilarityError> {
        self.evaluate_with(&SimilarityConfig::default())
    }

    /// Run the comparison with `base` supplying missing parameters.
    pub fn evaluate_with(&self, base: &SimilarityConfig) -> Result<Comparison, SimilarityError> {
        let text_a = self
            .text_a
            .as_deref()
            .ok_or(SimilarityError::MissingText { field: "text_a" })?;
        let text_b = self
            .text_b
            .as_deref()
            .ok_or(SimilarityError::MissingText { field: "text_b" })?;
        compare(text_a, text_b, &self.config_over(base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_missing_text_a() {
        let req: ComparisonRequest = serde_json::from_str(r#"{"text_b":"a b c"}"#).unwrap();
        assert_eq!(
            req.evaluate().unwrap_err(),
            SimilarityError::MissingText { field: "text_a" }
        );
    }

    #[test]
    fn request_null_text_b() {
        let req: ComparisonRequest =
            serde_json::from_str(r#"{"text_a":"a b c","text_b":null}"#).unwrap();
        let err = req.evaluate().unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err, SimilarityError::MissingText { field: "text_b" });
    }

    #[test]
    fn request_defaults_fill_missing_parameters() {
        let req = ComparisonRequest::new("a b c d", "a b c d");
        let cfg = req.config_over(&SimilarityConfig::default());
        assert_eq!(cfg, SimilarityConfig::default());

        let cmp = req.evaluate().unwrap();
        assert!(cmp.is_near_duplicate);
        assert_eq!(cmp.threshold, 0.9);
    }

    #[test]
    fn request_fields_override_base() {
        let req: ComparisonRequest = serde_json::from_str(
            r#"{"text_a":"x","text_b":"y","threshold":0.4,"shingle_size":1,"metric":"jaccard"}"#,
        )
        .unwrap();
        let base = SimilarityConfig::new().with_zero_union(ZeroUnionPolicy::Reject);
        let cfg = req.config_over(&base);
        assert_eq!(cfg.threshold, 0.4);
        assert_eq!(cfg.shingle_size, 1);
        assert_eq!(cfg.metric, OverlapMetric::Jaccard);
        assert_eq!(cfg.zero_union, ZeroUnionPolicy::Reject);
    }

    #[test]
    fn request_invalid_shingle_size() {
        let req = ComparisonRequest {
            shingle_size: Some(0),
            ..ComparisonRequest::new("a", "b")
        };
        assert_eq!(
            req.evaluate().unwrap_err(),
            SimilarityError::InvalidShingleSize { shingle_size: 0 }
        );
    }
}
