use crate::errors::{Result, SiftError};
use crate::graph::{dedup, tree};
use crate::ident;
use crate::parse::ImportExtractor;
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Explicit locator configuration — no ambient working-directory or pattern
/// defaults inside the core.
#[derive(Debug, Clone)]
pub struct LocateOptions {
    /// Directory whose source files form the corpus.
    pub project_root: PathBuf,
    /// Substring a node path must contain to count as a match.
    pub pattern: String,
    /// Scan the whole project instead of the root directory's immediate
    /// contents. Off by default: the historical behavior scans one level
    /// only, and UI tests in subdirectories are invisible to it.
    pub recursive: bool,
    /// Report each matching test once even when it is reachable via several
    /// import paths.
    pub dedup: bool,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl LocateOptions {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            pattern: ident::ui_test_pattern().to_string(),
            recursive: false,
            dedup: false,
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

/// Matches for a single changed source file.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionResult {
    pub source: String,
    pub tests: Vec<String>,
}

/// Find the identifiers of all test sources that transitively import
/// `source_path` and whose own path matches the configured pattern.
pub fn locate(
    source_path: &Path,
    opts: &LocateOptions,
    extractor: &dyn ImportExtractor,
) -> Result<Vec<String>> {
    let identifier = ident::package_name(source_path)?;
    let role = ident::classify(source_path)?;
    if role.is_ui_test() {
        tracing::debug!("{identifier} is itself a UI test source");
    }
    let corpus = crate::walk::list_sources(
        &opts.project_root,
        opts.recursive,
        &opts.include,
        &opts.exclude,
    )?;

    tracing::debug!(
        "locating importers of {identifier} across {} files",
        corpus.len()
    );

    if opts.dedup {
        let reachable =
            dedup::reachable_importers(&identifier, source_path, &corpus, extractor)?;
        return Ok(reachable.matches(&opts.pattern));
    }

    let root = tree::build(&identifier, source_path, &corpus, extractor)?;
    Ok(matches_in_tree(&root, &opts.pattern))
}

/// Pre-order pattern search over a built tree. The root participates, so a
/// changed file that is itself a UI test reports itself.
pub fn matches_in_tree(root: &tree::DependencyNode, pattern: &str) -> Vec<String> {
    root.preorder()
        .into_iter()
        .filter(|node| node.path.to_string_lossy().contains(pattern))
        .map(|node| node.identifier.clone())
        .collect()
}

/// Batch entry point: one independent lookup per changed path, input order
/// preserved. Lookups share no mutable state, so the outer loop fans out
/// across rayon workers.
pub fn selective_ui_tests(
    changed: &[String],
    opts: &LocateOptions,
    extractor: &dyn ImportExtractor,
) -> Result<Vec<SelectionResult>> {
    if changed.is_empty() {
        return Err(SiftError::EmptyDiff);
    }

    changed
        .par_iter()
        .map(|source| {
            let tests = locate(Path::new(source), opts, extractor)?;
            Ok(SelectionResult {
                source: source.clone(),
                tests,
            })
        })
        .collect()
}
