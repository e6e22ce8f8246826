//! Glob resolution for artifact include/exclude patterns

use crate::config::NormalizedArtifactConfig;
use crate::error::ArtifactSizeError;
use globset::{Glob, GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};
use jwalk::{Parallelism, WalkDir};
use std::collections::BTreeSet;
use std::io;
use std::path::{Component, Path};

const GLOB_META: &[char] = &['*', '?', '[', ']', '{', '}'];

/// Resolve an artifact's patterns to the files it contains
///
/// Patterns are relative to `cwd`. `*` stops at `/`, `**` crosses
/// directories. Only regular files (or symlinks to them) are kept, anything
/// matching an exclude pattern is dropped, and the result is deduplicated and
/// sorted. Returned paths are relative to `cwd` and `/`-separated.
pub fn resolve_files(
    artifact: &NormalizedArtifactConfig,
    cwd: &Path,
) -> Result<Vec<String>, ArtifactSizeError> {
    let excludes = build_set(&artifact.id, &artifact.exclude)?;
    let mut found = BTreeSet::new();

    for pattern in &artifact.include {
        let pattern = trim_dot_slash(pattern);
        let matcher = build_glob(&artifact.id, pattern)?.compile_matcher();
        collect_matches(cwd, pattern, &matcher, &mut found)?;
    }

    found.retain(|file| !excludes.is_match(file));

    log::debug!(
        "Artifact '{}' resolved to {} file(s)",
        artifact.id,
        found.len()
    );

    Ok(found.into_iter().collect())
}

fn collect_matches(
    cwd: &Path,
    pattern: &str,
    matcher: &GlobMatcher,
    found: &mut BTreeSet<String>,
) -> Result<(), ArtifactSizeError> {
    let root = cwd.join(literal_prefix(pattern));
    if !root.exists() {
        return Ok(());
    }

    // Artifacts already fan out over rayon in `analyze_all`
    let walker = WalkDir::new(&root)
        .parallelism(Parallelism::Serial)
        .skip_hidden(false)
        .sort(true);

    for entry in walker {
        let entry = entry.map_err(|err| ArtifactSizeError::Io {
            context: format!("walking {}", root.display()),
            source: io::Error::other(err.to_string()),
        })?;

        let path = entry.path();
        let file_type = entry.file_type();
        let is_file = file_type.is_file() || (file_type.is_symlink() && path.is_file());
        if !is_file {
            continue;
        }

        if let Some(relative) = relative_slash_path(&path, cwd) {
            if matcher.is_match(&relative) {
                found.insert(relative);
            }
        }
    }

    Ok(())
}

fn build_glob(artifact: &str, pattern: &str) -> Result<Glob, ArtifactSizeError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|source| ArtifactSizeError::InvalidPattern {
            artifact: artifact.to_string(),
            pattern: pattern.to_string(),
            source,
        })
}

fn build_set(artifact: &str, patterns: &[String]) -> Result<GlobSet, ArtifactSizeError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(build_glob(artifact, trim_dot_slash(pattern))?);
    }
    builder
        .build()
        .map_err(|source| ArtifactSizeError::InvalidPattern {
            artifact: artifact.to_string(),
            pattern: patterns.join(", "),
            source,
        })
}

fn trim_dot_slash(pattern: &str) -> &str {
    let mut pattern = pattern;
    while let Some(rest) = pattern.strip_prefix("./") {
        pattern = rest;
    }
    pattern
}

/// Leading directories of `pattern` that contain no glob syntax
///
/// For a pattern without any glob syntax this is the pattern itself, so the
/// walk starts (and ends) at that single file.
fn literal_prefix(pattern: &str) -> &str {
    let Some(meta) = pattern.find(GLOB_META) else {
        return pattern;
    };
    match pattern[..meta].rfind('/') {
        Some(slash) => &pattern[..slash],
        None => "",
    }
}

fn relative_slash_path(path: &Path, cwd: &Path) -> Option<String> {
    let relative = path.strip_prefix(cwd).ok()?;
    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    (!parts.is_empty()).then(|| parts.join("/"))
}
