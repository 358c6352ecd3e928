use crate::errors::Result;
use crate::ident;
use crate::parse::ImportExtractor;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Node in a transitive-importer tree.
///
/// The root is the changed file; each child is a file whose import set
/// contains the parent's identifier. Diamonds produce duplicate subtrees —
/// the structure is a tree, not a DAG.
#[derive(Debug, Clone, Serialize)]
pub struct DependencyNode {
    pub identifier: String,
    pub path: PathBuf,
    pub children: Vec<DependencyNode>,
    /// Identifiers that import this node but were already on the recursion
    /// path. Recorded for diagnostics instead of recursing into them, which
    /// is what keeps cyclic import graphs from overflowing the stack.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub back_edges: Vec<String>,
}

impl DependencyNode {
    /// Pre-order traversal: the node itself, then each child subtree in
    /// attachment order.
    pub fn preorder(&self) -> Vec<&DependencyNode> {
        let mut nodes = Vec::new();
        self.collect_preorder(&mut nodes);
        nodes
    }

    fn collect_preorder<'a>(&'a self, out: &mut Vec<&'a DependencyNode>) {
        out.push(self);
        for child in &self.children {
            child.collect_preorder(out);
        }
    }
}

/// Build the transitive-importer tree for `identifier`.
///
/// Every recursion level re-scans the same full corpus; children are
/// attached in corpus enumeration order. A single unreadable corpus file
/// fails the whole build.
pub fn build(
    identifier: &str,
    path: &Path,
    corpus: &[PathBuf],
    extractor: &dyn ImportExtractor,
) -> Result<DependencyNode> {
    let mut on_path = HashSet::new();
    on_path.insert(identifier.to_string());
    build_subtree(identifier, path, corpus, extractor, &mut on_path)
}

fn build_subtree(
    identifier: &str,
    path: &Path,
    corpus: &[PathBuf],
    extractor: &dyn ImportExtractor,
    on_path: &mut HashSet<String>,
) -> Result<DependencyNode> {
    let mut node = DependencyNode {
        identifier: identifier.to_string(),
        path: path.to_path_buf(),
        children: Vec::new(),
        back_edges: Vec::new(),
    };

    for file in corpus {
        let imports = extractor.extract(file)?;
        if !imports.contains(identifier) {
            continue;
        }

        let child_identifier = ident::package_name(file)?;
        if on_path.contains(&child_identifier) {
            tracing::debug!("cycle: {child_identifier} already on path, recording back edge");
            node.back_edges.push(child_identifier);
            continue;
        }

        on_path.insert(child_identifier.clone());
        let child = build_subtree(&child_identifier, file, corpus, extractor, on_path)?;
        on_path.remove(&child_identifier);
        node.children.push(child);
    }

    Ok(node)
}
