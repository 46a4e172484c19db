//! Fluent API for building Graph instances.

use crate::types::Vertex;

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Vertices are created through the builder and handed back so the caller
/// can wire edges and keep handles for later traversal.
pub struct GraphBuilder<T> {
    graph: Graph<T>,
}

impl<T> GraphBuilder<T> {
    /// Create a new builder over an empty graph.
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    /// Create a vertex, add it, and return its handle.
    pub fn vertex(&mut self, value: T) -> Vertex<T> {
        let vertex = Vertex::new(value);
        self.graph.add_vertex(&vertex);
        vertex
    }

    /// Add an existing vertex (and its seed neighbors).
    pub fn add(&mut self, vertex: &Vertex<T>) -> &mut Self {
        self.graph.add_vertex(vertex);
        self
    }

    /// Add an edge between two vertices.
    pub fn edge(&mut self, v1: &Vertex<T>, v2: &Vertex<T>) -> &mut Self {
        self.graph.add_edge(v1, v2);
        self
    }

    /// Create one vertex per value and chain consecutive ones with edges.
    pub fn path<I>(&mut self, values: I) -> Vec<Vertex<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let vertices: Vec<Vertex<T>> = values.into_iter().map(|v| self.vertex(v)).collect();
        for pair in vertices.windows(2) {
            self.graph.add_edge(&pair[0], &pair[1]);
        }
        vertices
    }

    /// Build the final Graph.
    pub fn build(self) -> Graph<T> {
        self.graph
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path() {
        let mut builder = GraphBuilder::new();
        let vs = builder.path(1..=4);
        let graph = builder.build();

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.contains_edge(&vs[0], &vs[1]));
        assert!(!graph.contains_edge(&vs[0], &vs[2]));
    }

    #[test]
    fn test_single_value_path_has_no_edges() {
        let mut builder = GraphBuilder::new();
        let vs = builder.path(["only"]);
        let graph = builder.build();

        assert_eq!(vs.len(), 1);
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_chained_edges() {
        let mut builder = GraphBuilder::new();
        let a = builder.vertex('a');
        let b = builder.vertex('b');
        let c = Vertex::new('c');
        builder.edge(&a, &b).edge(&b, &c);
        let graph = builder.build();

        assert!(graph.contains_vertex(&c));
        assert_eq!(graph.breadth_first_search(&a), vec!['a', 'b', 'c']);
    }
}
