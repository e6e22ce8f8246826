//! Configuration file data structures

use crate::error::ArtifactSizeError;
use crate::snapshot::Compression;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// artifact-size configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Artifacts to measure
    #[serde(default)]
    pub artifacts: Vec<ArtifactConfig>,
}

/// One artifact as written in the config file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactConfig {
    /// Unique identifier for this artifact
    pub id: String,
    /// Name displayed in reports
    pub name: String,
    /// Files to include (globs supported)
    #[serde(default)]
    pub include: OneOrMany,
    /// Files to exclude (globs supported)
    #[serde(default)]
    pub exclude: OneOrMany,
    /// Compression algorithms to measure, all when omitted
    #[serde(default)]
    pub compression: Option<CompressionSetting>,
}

/// A single glob or a list of globs
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    /// `"dist/*.js"`
    One(String),
    /// `["dist/*.js", "dist/*.css"]`
    Many(Vec<String>),
}

impl Default for OneOrMany {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl OneOrMany {
    /// Flatten into a list
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

/// Compression algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionAlgorithm {
    /// gzip (deflate)
    Gzip,
    /// brotli
    Brotli,
}

/// The `compression` field: `false`, one algorithm or a list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CompressionSetting {
    /// Only `false` is accepted; omit the field to measure everything
    Enabled(bool),
    /// `"gzip"`
    One(CompressionAlgorithm),
    /// `["gzip", "brotli"]`
    Many(Vec<CompressionAlgorithm>),
}

/// Artifact configuration after defaults are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedArtifactConfig {
    /// Unique identifier for this artifact
    pub id: String,
    /// Name displayed in reports
    pub name: String,
    /// Include globs
    pub include: Vec<String>,
    /// Exclude globs
    pub exclude: Vec<String>,
    /// Enabled algorithms, in configured order without duplicates
    pub compression: Vec<CompressionAlgorithm>,
}

impl NormalizedArtifactConfig {
    /// Enabled algorithms as flags
    pub fn compression_flags(&self) -> Compression {
        Compression {
            gzip: self.compression.contains(&CompressionAlgorithm::Gzip),
            brotli: self.compression.contains(&CompressionAlgorithm::Brotli),
        }
    }
}

/// Validated configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedConfig {
    /// Artifacts in configured order
    pub artifacts: Vec<NormalizedArtifactConfig>,
}

impl ConfigFile {
    /// Validate and apply defaults
    ///
    /// Rejects empty ids or names, `compression: true`, and duplicate ids.
    /// `path` is only used for error messages.
    pub fn normalize(self, path: &Path) -> Result<NormalizedConfig, ArtifactSizeError> {
        let invalid = |message: String| ArtifactSizeError::InvalidConfig {
            path: path.to_path_buf(),
            message,
        };

        let mut seen = HashSet::new();
        let mut artifacts = Vec::with_capacity(self.artifacts.len());

        for (index, artifact) in self.artifacts.into_iter().enumerate() {
            if artifact.id.is_empty() {
                return Err(invalid(format!("artifacts[{}].id must not be empty", index)));
            }
            if artifact.name.is_empty() {
                return Err(invalid(format!("artifacts[{}].name must not be empty", index)));
            }
            if !seen.insert(artifact.id.clone()) {
                return Err(ArtifactSizeError::DuplicateArtifactId { id: artifact.id });
            }

            let compression = match artifact.compression {
                None => vec![CompressionAlgorithm::Gzip, CompressionAlgorithm::Brotli],
                Some(CompressionSetting::Enabled(false)) => Vec::new(),
                Some(CompressionSetting::Enabled(true)) => {
                    return Err(invalid(format!(
                        "artifacts[{}].compression must be false, \"gzip\", \"brotli\" or a list of them",
                        index
                    )));
                }
                Some(CompressionSetting::One(algorithm)) => vec![algorithm],
                Some(CompressionSetting::Many(list)) => {
                    let mut unique = Vec::with_capacity(list.len());
                    for algorithm in list {
                        if !unique.contains(&algorithm) {
                            unique.push(algorithm);
                        }
                    }
                    unique
                }
            };

            artifacts.push(NormalizedArtifactConfig {
                id: artifact.id,
                name: artifact.name,
                include: artifact.include.into_vec(),
                exclude: artifact.exclude.into_vec(),
                compression,
            });
        }

        Ok(NormalizedConfig { artifacts })
    }
}
