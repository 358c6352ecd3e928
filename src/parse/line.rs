use crate::errors::Result;
use crate::parse::ImportExtractor;
use std::collections::HashSet;
use std::path::Path;

const IMPORT_KEYWORD: &str = "import";

/// Line-prefix import extraction.
///
/// A line counts as an import only when it starts with the literal `import`
/// keyword in column zero; indented import statements are not recognized.
/// The keyword is stripped and the rest of the line is kept verbatim
/// (trimmed), so trailing semicolons or aliases survive as written.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineImportExtractor;

impl LineImportExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ImportExtractor for LineImportExtractor {
    fn extract(&self, path: &Path) -> Result<HashSet<String>> {
        let text = std::fs::read_to_string(path)?;
        Ok(text
            .lines()
            .filter(|line| line.starts_with(IMPORT_KEYWORD))
            .map(|line| line[IMPORT_KEYWORD.len()..].trim().to_string())
            .collect())
    }
}
