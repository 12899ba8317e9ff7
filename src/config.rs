//! YAML Configuration File Support for NearDup
//!
//! Loads comparison settings from a single YAML file so the demo binary and
//! library callers can share one configuration.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "lecture notes"
//! log_level: "info"
//! json_logs: false
//!
//! similarity:
//!   version: 1
//!   threshold: 0.9
//!   shingle_size: 3
//!   metric: "redundancy"      # or "jaccard"
//!   zero_union: "not_duplicate" # or "reject"
//!
//! # Optional; requires the `sketch` feature.
//! sketch:
//!   num_hashes: 128
//!   seed: 17297687000019483309
//!   use_parallel: false
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use similarity::{OverlapMetric, SimilarityConfig, SimilarityError, ZeroUnionPolicy};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),

    #[error("invalid similarity settings: {0}")]
    Similarity(#[from] SimilarityError),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NearDupConfig {
    /// Configuration format version
    pub version: String,

    #[serde(default)]
    pub name: Option<String>,

    /// `tracing` filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub json_logs: bool,

    #[serde(default)]
    pub similarity: SimilarityYamlConfig,

    /// Present only when the sketch variant should replace the exact comparison
    #[serde(default)]
    pub sketch: Option<SketchYamlConfig>,
}

impl NearDupConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: NearDupConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        if self.log_level.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "log_level must not be empty".to_string(),
            ));
        }

        self.similarity_config().validate()?;

        if let Some(sketch) = &self.sketch {
            sketch.validate()?;
        }

        Ok(())
    }

    /// The comparison settings as consumed by the `similarity` crate.
    pub fn similarity_config(&self) -> SimilarityConfig {
        self.similarity.to_config()
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl Default for NearDupConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            log_level: default_log_level(),
            json_logs: false,
            similarity: SimilarityYamlConfig::default(),
            sketch: None,
        }
    }
}

/// `similarity` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_threshold")]
    pub threshold: f64,

    #[serde(default = "default_shingle_size")]
    pub shingle_size: usize,

    #[serde(default)]
    pub metric: OverlapMetric,

    #[serde(default)]
    pub zero_union: ZeroUnionPolicy,
}

impl SimilarityYamlConfig {
    fn to_config(&self) -> SimilarityConfig {
        SimilarityConfig {
            version: self.version,
            threshold: self.threshold,
            shingle_size: self.shingle_size,
            metric: self.metric,
            zero_union: self.zero_union,
        }
    }
}

impl Default for SimilarityYamlConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            threshold: default_threshold(),
            shingle_size: default_shingle_size(),
            metric: OverlapMetric::default(),
            zero_union: ZeroUnionPolicy::default(),
        }
    }
}

/// `sketch` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SketchYamlConfig {
    #[serde(default = "default_num_hashes")]
    pub num_hashes: usize,

    #[serde(default = "default_seed")]
    pub seed: u64,

    #[serde(default)]
    pub use_parallel: bool,
}

impl SketchYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if !cfg!(feature = "sketch") {
            return Err(ConfigLoadError::Validation(
                "sketch section requires the `sketch` feature".to_string(),
            ));
        }
        if self.num_hashes == 0 {
            return Err(ConfigLoadError::Validation(
                "sketch.num_hashes must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    #[cfg(feature = "sketch")]
    pub fn to_config(&self) -> similarity::sketch::SketchConfig {
        similarity::sketch::SketchConfig {
            num_hashes: self.num_hashes,
            seed: self.seed,
            use_parallel: self.use_parallel,
        }
    }
}

impl Default for SketchYamlConfig {
    fn default() -> Self {
        Self {
            num_hashes: default_num_hashes(),
            seed: default_seed(),
            use_parallel: false,
        }
    }
}

fn default_version() -> u32 {
    1
}

fn default_threshold() -> f64 {
    similarity::DEFAULT_THRESHOLD
}

fn default_shingle_size() -> usize {
    similarity::DEFAULT_SHINGLE_SIZE
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_num_hashes() -> usize {
    128
}

fn default_seed() -> u64 {
    0xF00D_BAAD_F00D_BAAD
}
