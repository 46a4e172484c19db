//! Error types for the graphwalk library.

use thiserror::Error;

use super::VertexId;

/// All errors that can occur in the graphwalk library.
///
/// Ordinary misuse (removing an absent edge, traversing from a vertex the
/// graph does not hold) is a no-op, not an error. These variants are only
/// produced by the strict entry points and by [`check_invariants`].
///
/// [`check_invariants`]: crate::graph::Graph::check_invariants
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex is not a member of the graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    /// `from` lists `to` as a neighbor, but `to` does not list `from`.
    #[error("Asymmetric edge: {from} lists {to} as a neighbor but {to} does not list {from}")]
    AsymmetricEdge { from: VertexId, to: VertexId },

    /// An adjacency set names a vertex the graph does not hold.
    #[error("Vertex {vertex} has neighbor {neighbor} outside the graph")]
    OrphanedNeighbor { vertex: VertexId, neighbor: VertexId },
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
