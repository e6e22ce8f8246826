//! Artifact configuration
//!
//! This module provides:
//! - The JSON/TOML config file schema
//! - Validation and normalization into [`NormalizedConfig`]
//! - Loading through [`ConfigLoader`]

pub mod file;
pub mod loader;

pub use file::{
    ArtifactConfig, CompressionAlgorithm, CompressionSetting, ConfigFile, NormalizedArtifactConfig,
    NormalizedConfig, OneOrMany,
};
pub use loader::ConfigLoader;
