use crate::errors::Result;
use crate::graph::DependencyNode;
use crate::locate::SelectionResult;
use std::io::Write;

/// Write batch selection results as human-readable text.
pub fn write_selection_text<W: Write>(writer: &mut W, results: &[SelectionResult]) -> Result<()> {
    for result in results {
        if result.tests.is_empty() {
            writeln!(writer, "{}: no impacted UI tests", result.source)?;
            continue;
        }
        writeln!(writer, "{}:", result.source)?;
        for test in &result.tests {
            writeln!(writer, "  {test}")?;
        }
    }

    let total: usize = results.iter().map(|r| r.tests.len()).sum();
    writeln!(writer)?;
    writeln!(
        writer,
        "{} impacted UI test(s) across {} changed file(s)",
        total,
        results.len()
    )?;
    Ok(())
}

/// Render a dependency tree with box-drawing connectors, one node per line.
pub fn write_tree<W: Write>(writer: &mut W, root: &DependencyNode) -> Result<()> {
    writeln!(writer, "{}", root.identifier)?;
    write_children(writer, root, "")?;
    Ok(())
}

fn write_children<W: Write>(writer: &mut W, node: &DependencyNode, prefix: &str) -> Result<()> {
    let last_child = node.children.len().saturating_sub(1);
    for (i, child) in node.children.iter().enumerate() {
        let is_last = i == last_child && node.back_edges.is_empty();
        let connector = if is_last { "└── " } else { "├── " };
        writeln!(writer, "{prefix}{connector}{}", child.identifier)?;
        let child_prefix = if is_last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };
        write_children(writer, child, &child_prefix)?;
    }
    let last_back = node.back_edges.len().saturating_sub(1);
    for (i, back) in node.back_edges.iter().enumerate() {
        let connector = if i == last_back { "└── " } else { "├── " };
        writeln!(writer, "{prefix}{connector}{back} (cycle)")?;
    }
    Ok(())
}
