use thiserror::Error;

/// Errors returned by near-duplicate comparisons.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimilarityError {
    #[error("invalid argument: shingle_size must be >= 1 (got {shingle_size})")]
    InvalidShingleSize { shingle_size: usize },

    #[error("invalid argument: threshold must be a finite number (got {threshold})")]
    InvalidThreshold { threshold: f64 },

    #[error("invalid argument: {field} is required")]
    MissingText { field: &'static str },

    #[error("indeterminate comparison: neither document has {shingle_size} or more tokens")]
    IndeterminateComparison { shingle_size: usize },

    #[error("invalid config version {version}; expected >= 1")]
    InvalidConfigVersion { version: u32 },

    #[error("invalid sketch config: num_hashes must be >= 1 (got {num_hashes})")]
    InvalidSketchLength { num_hashes: usize },
}

impl SimilarityError {
    /// True for errors caused by a bad caller-supplied argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            SimilarityError::InvalidShingleSize { .. }
                | SimilarityError::InvalidThreshold { .. }
                | SimilarityError::MissingText { .. }
        )
    }
}
