//! In-memory undirected graph: storage, construction and traversal.

pub mod builder;
pub mod traversal;
pub mod undirected_graph;

pub use builder::GraphBuilder;
pub use traversal::{traverse, Traversal, TraversalOrder, TraversalParams};
pub use undirected_graph::Graph;
