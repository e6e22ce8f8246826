//! Configuration file loading

use super::file::{ConfigFile, NormalizedConfig};
use crate::error::ArtifactSizeError;
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::Result;
use std::path::Path;

/// Handles loading configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate the config file at `path`
    ///
    /// Files ending in `.toml` are parsed as TOML, everything else as JSON.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use artifact_size::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("artifact-size.json"))?;
    /// println!("Loaded {} artifacts", config.artifacts.len());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<NormalizedConfig> {
        Self::load_with_fs(path, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(path: &Path, fs: &FS) -> Result<NormalizedConfig> {
        let contents = match fs.read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ArtifactSizeError::ConfigNotFound {
                    path: path.to_path_buf(),
                    source: e,
                }
                .into());
            }
            Err(e) => {
                return Err(ArtifactSizeError::Io {
                    context: format!("reading {}", path.display()),
                    source: e,
                }
                .into());
            }
        };

        let parsed = if is_toml(path) {
            toml_edit::de::from_str::<ConfigFile>(&contents).map_err(|e| e.to_string())
        } else {
            serde_json::from_str::<ConfigFile>(&contents).map_err(|e| e.to_string())
        };

        let config = parsed.map_err(|message| ArtifactSizeError::InvalidConfig {
            path: path.to_path_buf(),
            message: message.trim_end().to_string(),
        })?;

        let config = config.normalize(path)?;
        log::debug!(
            "Loaded {} artifact(s) from {}",
            config.artifacts.len(),
            path.display()
        );

        Ok(config)
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}
