//! Output targets for CI/CD integration
//!
//! Reports can be written to files (`--output-file [format:]path`) and to
//! GitHub Actions step outputs (`--output-github format:key`).

use crate::infra::FileSystem;
use crate::report::Format;
use std::path::Path;
use thiserror::Error;

/// Errors from parsing a `format:target` argument
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutputSpecError {
    /// No `format:` prefix where one is required
    #[error("{param} must be in the form 'format:key', got '{spec}'")]
    MissingFormat {
        /// Command line option name
        param: &'static str,
        /// Raw argument
        spec: String,
    },

    /// Prefix is not a known format
    #[error("Invalid format for {param}: {format}. Supported formats: json,markdown,text")]
    UnknownFormat {
        /// Command line option name
        param: &'static str,
        /// Unrecognized prefix
        format: String,
    },

    /// Nothing after the `format:` prefix
    #[error("{param} key must not be empty")]
    EmptyTarget {
        /// Command line option name
        param: &'static str,
    },
}

/// A parsed `format:target` output argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    /// Report format to render
    pub format: Format,
    /// File name or GitHub output key
    pub target: String,
}

impl OutputSpec {
    /// Parse a `format:target` argument
    ///
    /// Without a `format:` prefix the whole value is the target and
    /// `default_format` applies; passing `None` makes the prefix mandatory.
    /// Only the first `:` separates format from target.
    ///
    /// # Examples
    ///
    /// ```
    /// use artifact_size::cicd::OutputSpec;
    /// use artifact_size::report::Format;
    ///
    /// let spec = OutputSpec::parse("markdown:summary", "--output-github", None).unwrap();
    /// assert_eq!(spec.format, Format::Markdown);
    /// assert_eq!(spec.target, "summary");
    ///
    /// let spec = OutputSpec::parse("report.txt", "--output-file", Some(Format::Text)).unwrap();
    /// assert_eq!(spec.format, Format::Text);
    /// assert_eq!(spec.target, "report.txt");
    ///
    /// assert!(OutputSpec::parse("xml:out", "--output-file", Some(Format::Text)).is_err());
    /// ```
    pub fn parse(
        value: &str,
        param: &'static str,
        default_format: Option<Format>,
    ) -> Result<Self, OutputSpecError> {
        let Some((format, target)) = value.split_once(':') else {
            return match default_format {
                Some(format) => Ok(Self {
                    format,
                    target: value.to_string(),
                }),
                None => Err(OutputSpecError::MissingFormat {
                    param,
                    spec: value.to_string(),
                }),
            };
        };

        let format = format
            .parse::<Format>()
            .map_err(|_| OutputSpecError::UnknownFormat {
                param,
                format: format.to_string(),
            })?;

        if target.is_empty() {
            return Err(OutputSpecError::EmptyTarget { param });
        }

        Ok(Self {
            format,
            target: target.to_string(),
        })
    }
}

/// Write `content` to `filename`, resolved against `cwd`
///
/// Missing parent directories are created.
pub fn write_file<F: FileSystem>(
    fs: &F,
    cwd: &Path,
    filename: &str,
    content: &str,
) -> std::io::Result<()> {
    let path = cwd.join(filename);
    if let Some(parent) = path.parent() {
        fs.create_dir_all(parent)?;
    }
    log::debug!("Writing {} bytes to {}", content.len(), path.display());
    fs.write(&path, content)
}

/// Append `content` as a multi-line GitHub Actions step output
///
/// `github_output` is the value of `$GITHUB_OUTPUT`; nothing is written when
/// it is unset. Carriage returns are stripped.
pub fn write_github<F: FileSystem>(
    fs: &F,
    github_output: Option<&Path>,
    key: &str,
    content: &str,
) -> std::io::Result<()> {
    let Some(path) = github_output else {
        log::debug!("GITHUB_OUTPUT not set, skipping output '{}'", key);
        return Ok(());
    };

    let value = content.replace('\r', "");
    log::debug!("Appending output '{}' to {}", key, path.display());
    fs.append(path, format!("{}<<EOF\n{}\nEOF\n", key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::RealFileSystem;
    use tempfile::TempDir;

    const PARAM: &str = "--output-github";

    #[test]
    fn test_parse_with_format() {
        for (value, format, target) in [
            ("json:report", Format::Json, "report"),
            ("markdown:summary", Format::Markdown, "summary"),
            ("text:out", Format::Text, "out"),
        ] {
            let spec = OutputSpec::parse(value, PARAM, None).unwrap();
            assert_eq!(spec.format, format);
            assert_eq!(spec.target, target);
        }
    }

    #[test]
    fn test_parse_missing_separator_requires_format() {
        let err = OutputSpec::parse("json", PARAM, None).unwrap_err();
        assert_eq!(
            err,
            OutputSpecError::MissingFormat {
                param: PARAM,
                spec: "json".to_string()
            }
        );
        assert!(err.to_string().contains("must be in the form 'format:key'"));
    }

    #[test]
    fn test_parse_missing_separator_uses_default() {
        let spec = OutputSpec::parse("report", "--output-file", Some(Format::Json)).unwrap();
        assert_eq!(
            spec,
            OutputSpec {
                format: Format::Json,
                target: "report".to_string()
            }
        );
    }

    #[test]
    fn test_parse_unknown_format() {
        let err = OutputSpec::parse("xml:foo", PARAM, None).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Invalid format for --output-github: xml"));
    }

    #[test]
    fn test_parse_empty_target() {
        let err = OutputSpec::parse("json:", PARAM, None).unwrap_err();
        assert_eq!(err.to_string(), "--output-github key must not be empty");
    }

    #[test]
    fn test_parse_keeps_colons_in_target() {
        let spec = OutputSpec::parse("text:out:1", PARAM, None).unwrap();
        assert_eq!(spec.target, "out:1");
    }

    #[test]
    fn test_write_file_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();

        write_file(&RealFileSystem, temp_dir.path(), "temp/report.md", "# hi\n").unwrap();

        let written = std::fs::read_to_string(temp_dir.path().join("temp/report.md")).unwrap();
        assert_eq!(written, "# hi\n");
    }

    #[test]
    fn test_write_github_appends_heredoc() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gha_out.txt");

        write_github(&RealFileSystem, Some(&path), "foo", "line 1\r\nline 2").unwrap();
        write_github(&RealFileSystem, Some(&path), "bar", "x").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "foo<<EOF\nline 1\nline 2\nEOF\nbar<<EOF\nx\nEOF\n");
    }

    #[test]
    fn test_write_github_without_env_is_noop() {
        let temp_dir = TempDir::new().unwrap();

        write_github(&RealFileSystem, None, "foo", "ignored").unwrap();

        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }
}
