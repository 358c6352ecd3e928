pub mod line;

pub use line::LineImportExtractor;

use crate::errors::Result;
use std::collections::HashSet;
use std::path::Path;

/// Import discovery seam — swap in an AST-backed extractor without touching
/// the tree builders.
pub trait ImportExtractor: Sync {
    /// Extract the set of imported identifiers from a single source file.
    ///
    /// Identifiers are kept as raw text; they are only ever membership-tested
    /// against a known package name.
    fn extract(&self, path: &Path) -> Result<HashSet<String>>;
}
