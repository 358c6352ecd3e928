pub mod dedup;
pub mod tree;

pub use tree::DependencyNode;
