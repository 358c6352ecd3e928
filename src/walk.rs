use crate::errors::Result;
use crate::ident::SourceLanguage;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(Some(builder.build()?))
}

/// Enumerate `.java`/`.kt` files under `root`.
///
/// - `recursive: false` scans the immediate directory contents only
/// - Respects `.gitignore`
/// - Applies include/exclude glob patterns
/// - Returns sorted paths so tree shape is deterministic across runs
pub fn list_sources(
    root: &Path,
    recursive: bool,
    include_patterns: &[String],
    exclude_patterns: &[String],
) -> Result<Vec<PathBuf>> {
    let extensions = SourceLanguage::extensions();
    let include_set = build_globset(include_patterns)?;
    let exclude_set = build_globset(exclude_patterns)?;

    let mut builder = WalkBuilder::new(root);
    builder.hidden(false).git_ignore(true);
    if !recursive {
        builder.max_depth(Some(1));
    }

    let mut files = Vec::new();

    for entry in builder.build() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::warn!("skipping unreadable entry: {err}");
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let ext_match = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| extensions.contains(&ext));
        if !ext_match {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);

        if let Some(ref exclude) = exclude_set {
            if exclude.is_match(relative) || exclude.is_match(path) {
                continue;
            }
        }
        if let Some(ref include) = include_set {
            if !include.is_match(relative) && !include.is_match(path) {
                continue;
            }
        }

        files.push(path.to_path_buf());
    }

    files.sort();

    tracing::debug!(
        "corpus: {} files under {} (recursive={recursive})",
        files.len(),
        root.display()
    );

    Ok(files)
}
