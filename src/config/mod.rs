pub mod resolve;
pub mod schema;

use std::path::PathBuf;

/// Fully resolved configuration — no Option fields.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub pattern: String,
    pub recursive: bool,
    pub dedup: bool,
    pub format: String,
    pub quiet: bool,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    /// Config files that contributed, lowest precedence first.
    pub loaded_files: Vec<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            pattern: crate::ident::ui_test_pattern().to_string(),
            recursive: false,
            dedup: false,
            format: "text".to_string(),
            quiet: false,
            include: Vec::new(),
            exclude: Vec::new(),
            loaded_files: Vec::new(),
        }
    }
}
