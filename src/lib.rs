//! graphwalk — a small in-memory undirected graph.
//!
//! Vertices carry an arbitrary value and are identified by identity, not by
//! value. Edges are undirected and kept symmetric by every mutation. Two
//! traversals are provided, depth-first and breadth-first, both returning
//! the values of the vertices reachable from a start vertex.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, GraphBuilder, Traversal, TraversalOrder, TraversalParams};
pub use types::{GraphError, GraphResult, Vertex, VertexId};
