use crate::errors::Result;
use crate::ident;
use crate::parse::ImportExtractor;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};

/// Node in the deduplicated importer graph.
#[derive(Debug, Clone)]
pub struct ImporterNode {
    pub identifier: String,
    pub path: PathBuf,
}

/// Directed graph with edges importer → imported, restricted to files that
/// transitively import the root identifier.
pub type ImporterGraph = DiGraph<ImporterNode, ()>;

/// Importer graph plus BFS discovery order (root first).
pub struct Reachable {
    pub graph: ImporterGraph,
    pub order: Vec<NodeIndex>,
}

impl Reachable {
    /// Identifiers of nodes whose path contains `pattern`, each reported
    /// once, in discovery order.
    pub fn matches(&self, pattern: &str) -> Vec<String> {
        self.order
            .iter()
            .filter(|&&idx| self.graph[idx].path.to_string_lossy().contains(pattern))
            .map(|&idx| self.graph[idx].identifier.clone())
            .collect()
    }
}

/// Breadth-first reverse-import reachability from `identifier`.
///
/// Unlike the tree builder this reads each corpus file exactly once and
/// shares nodes between paths, so a diamond yields a single node.
pub fn reachable_importers(
    identifier: &str,
    path: &Path,
    corpus: &[PathBuf],
    extractor: &dyn ImportExtractor,
) -> Result<Reachable> {
    let file_imports: Vec<(&PathBuf, HashSet<String>)> = corpus
        .iter()
        .map(|file| extractor.extract(file).map(|imports| (file, imports)))
        .collect::<Result<_>>()?;

    let mut graph = ImporterGraph::new();
    let mut index_of: HashMap<String, NodeIndex> = HashMap::new();

    let root_idx = graph.add_node(ImporterNode {
        identifier: identifier.to_string(),
        path: path.to_path_buf(),
    });
    index_of.insert(identifier.to_string(), root_idx);

    let mut order = vec![root_idx];
    let mut queue = VecDeque::from([root_idx]);

    while let Some(current) = queue.pop_front() {
        let current_identifier = graph[current].identifier.clone();
        for (file, imports) in &file_imports {
            if !imports.contains(&current_identifier) {
                continue;
            }
            let importer_identifier = ident::package_name(file)?;
            let importer_idx = match index_of.get(&importer_identifier) {
                Some(&idx) => idx,
                None => {
                    let idx = graph.add_node(ImporterNode {
                        identifier: importer_identifier.clone(),
                        path: (*file).clone(),
                    });
                    index_of.insert(importer_identifier, idx);
                    order.push(idx);
                    queue.push_back(idx);
                    idx
                }
            };
            if graph.find_edge(importer_idx, current).is_none() {
                graph.add_edge(importer_idx, current, ());
            }
        }
    }

    Ok(Reachable { graph, order })
}
