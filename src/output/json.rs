use crate::errors::Result;
use crate::graph::DependencyNode;
use crate::locate::SelectionResult;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Run metadata attached to machine-readable output.
#[derive(Debug, Serialize)]
pub struct Metadata {
    pub project_root: PathBuf,
    pub pattern: String,
    pub recursive: bool,
    pub dedup: bool,
    pub changed_files: usize,
    pub elapsed_ms: u64,
}

#[derive(Debug, Serialize)]
struct SelectionReport<'a> {
    metadata: &'a Metadata,
    results: &'a [SelectionResult],
}

/// Write batch selection results as pretty JSON.
pub fn write_selection_json<W: Write>(
    writer: &mut W,
    results: &[SelectionResult],
    metadata: &Metadata,
) -> Result<()> {
    let report = SelectionReport { metadata, results };
    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;
    Ok(())
}

/// Write a dependency tree as pretty JSON.
pub fn write_tree_json<W: Write>(writer: &mut W, root: &DependencyNode) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, root)?;
    writeln!(writer)?;
    Ok(())
}
