use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum SiftError {
    #[error("No recognized source root in {path}: expected a src/{{main,test,androidTest}}/{{java,kotlin}} path")]
    #[diagnostic(code(testsift::bad_source_root))]
    UnrecognizedSourceRoot { path: PathBuf },

    #[error("No files changed")]
    #[diagnostic(code(testsift::empty_diff))]
    EmptyDiff,

    #[error("Configuration error: {0}")]
    #[diagnostic(code(testsift::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(testsift::io))]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(code(testsift::git))]
    Git(#[from] git2::Error),

    #[error(transparent)]
    #[diagnostic(code(testsift::json))]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(code(testsift::glob))]
    Glob(#[from] globset::Error),
}

pub type Result<T> = std::result::Result<T, SiftError>;
