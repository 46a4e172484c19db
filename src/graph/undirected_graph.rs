//! Core graph structure — vertex arena + symmetric adjacency sets.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::types::{GraphError, GraphResult, Vertex, VertexId};

use super::traversal::{self, Traversal, TraversalOrder, TraversalParams};

/// One live vertex: the shared handle plus its neighbor ids.
struct Slot<T> {
    vertex: Vertex<T>,
    /// Ordered by id, i.e. by vertex creation order.
    adjacent: BTreeSet<VertexId>,
}

/// An in-memory undirected graph.
///
/// Vertices are stored in an arena keyed by [`VertexId`]; edges are stored
/// as id sets on both endpoints. Every mutation keeps two invariants:
///
/// - **symmetry**: `a` is adjacent to `b` iff `b` is adjacent to `a`;
/// - **no orphans**: every id in an adjacency set is a member of the graph.
///
/// No operation fails on ordinary misuse. Removing an absent edge or
/// vertex is a no-op and traversing from a non-member yields nothing.
pub struct Graph<T> {
    nodes: HashMap<VertexId, Slot<T>>,
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        self.nodes
            .iter()
            .map(|(id, slot)| slot.adjacent.iter().filter(|n| *n >= id).count())
            .sum()
    }

    /// True when the graph holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `vertex` is a member of this graph.
    pub fn contains_vertex(&self, vertex: &Vertex<T>) -> bool {
        self.nodes.contains_key(&vertex.id())
    }

    /// Whether an edge joins `v1` and `v2`.
    pub fn contains_edge(&self, v1: &Vertex<T>, v2: &Vertex<T>) -> bool {
        self.nodes
            .get(&v1.id())
            .is_some_and(|slot| slot.adjacent.contains(&v2.id()))
    }

    /// Look up a member vertex by id.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.nodes.get(&id).map(|slot| &slot.vertex)
    }

    /// All member vertices, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> + '_ {
        self.nodes.values().map(|slot| &slot.vertex)
    }

    /// Neighbors of `vertex` in adjacency order. Empty for non-members.
    pub fn neighbors<'a>(&'a self, vertex: &Vertex<T>) -> impl Iterator<Item = &'a Vertex<T>> + 'a {
        self.nodes
            .get(&vertex.id())
            .into_iter()
            .flat_map(|slot| slot.adjacent.iter())
            .filter_map(move |id| self.vertex(*id))
    }

    /// Number of neighbors of `vertex`; 0 for non-members.
    pub fn degree(&self, vertex: &Vertex<T>) -> usize {
        self.nodes
            .get(&vertex.id())
            .map_or(0, |slot| slot.adjacent.len())
    }

    /// Neighbor ids of a member vertex.
    pub(crate) fn adjacent_ids(&self, id: VertexId) -> Option<&BTreeSet<VertexId>> {
        self.nodes.get(&id).map(|slot| &slot.adjacent)
    }

    /// Add a vertex. Returns `false` if it was already a member.
    ///
    /// Seed neighbors carried by the vertex are linked as if by
    /// [`add_edge`](Self::add_edge), joining absent ones to the graph.
    pub fn add_vertex(&mut self, vertex: &Vertex<T>) -> bool {
        if self.contains_vertex(vertex) {
            return false;
        }
        self.insert_slot(vertex);

        // Seeds can chain, so walk them with a worklist instead of recursing.
        let mut pending = vec![vertex.clone()];
        while let Some(current) = pending.pop() {
            for seed in current.seed_adjacent() {
                if !self.contains_vertex(seed) {
                    log::debug!("Seed adjacency of {} adds {}", current.id(), seed.id());
                    self.insert_slot(seed);
                    pending.push(seed.clone());
                }
                self.link(current.id(), seed.id());
            }
        }
        true
    }

    /// Add each vertex in order.
    pub fn add_vertices<'a, I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = &'a Vertex<T>>,
        T: 'a,
    {
        for vertex in vertices {
            self.add_vertex(vertex);
        }
    }

    /// Join `v1` and `v2`, adding either endpoint that is not yet a member.
    ///
    /// `v1 == v2` makes a self-loop: the vertex becomes its own neighbor.
    pub fn add_edge(&mut self, v1: &Vertex<T>, v2: &Vertex<T>) {
        let before = self.vertex_count();
        self.add_vertex(v1);
        self.add_vertex(v2);
        let added = self.vertex_count() - before;
        if added > 0 {
            // Counts seed neighbors pulled in alongside missing endpoints.
            log::debug!("Edge {} - {} added {} vertices", v1.id(), v2.id(), added);
        }
        self.link(v1.id(), v2.id());
    }

    /// Remove the edge between `v1` and `v2` in both directions.
    ///
    /// Returns whether anything was removed; an absent edge is a no-op.
    pub fn remove_edge(&mut self, v1: &Vertex<T>, v2: &Vertex<T>) -> bool {
        let forward = self.unlink_one(v1.id(), v2.id());
        let backward = self.unlink_one(v2.id(), v1.id());
        if !(forward || backward) {
            log::debug!("No edge between {} and {}", v1.id(), v2.id());
        }
        forward || backward
    }

    /// Remove a vertex and every edge touching it.
    ///
    /// Returns whether the vertex was a member; absence is a no-op. The
    /// caller's handle stays valid, detached from this graph.
    pub fn remove_vertex(&mut self, vertex: &Vertex<T>) -> bool {
        let id = vertex.id();
        let Some(mut slot) = self.nodes.remove(&id) else {
            log::debug!("Vertex {} not in graph, nothing to remove", id);
            return false;
        };
        for neighbor in &slot.adjacent {
            if let Some(other) = self.nodes.get_mut(neighbor) {
                other.adjacent.remove(&id);
            }
        }
        slot.adjacent.clear();
        log::trace!("Removed vertex {}", id);
        true
    }

    /// Remove every vertex and edge.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    fn insert_slot(&mut self, vertex: &Vertex<T>) {
        log::trace!("Added vertex {}", vertex.id());
        self.nodes.insert(
            vertex.id(),
            Slot {
                vertex: vertex.clone(),
                adjacent: BTreeSet::new(),
            },
        );
    }

    /// Both endpoints must already be members.
    fn link(&mut self, a: VertexId, b: VertexId) {
        if let Some(slot) = self.nodes.get_mut(&a) {
            slot.adjacent.insert(b);
        }
        if let Some(slot) = self.nodes.get_mut(&b) {
            slot.adjacent.insert(a);
        }
        log::trace!("Linked {} and {}", a, b);
    }

    fn unlink_one(&mut self, from: VertexId, to: VertexId) -> bool {
        self.nodes
            .get_mut(&from)
            .is_some_and(|slot| slot.adjacent.remove(&to))
    }

    /// Verify the symmetry and no-orphan invariants.
    pub fn check_invariants(&self) -> GraphResult<()> {
        for (id, slot) in &self.nodes {
            for neighbor in &slot.adjacent {
                match self.nodes.get(neighbor) {
                    None => {
                        log::warn!("Vertex {} has orphaned neighbor {}", id, neighbor);
                        return Err(GraphError::OrphanedNeighbor {
                            vertex: *id,
                            neighbor: *neighbor,
                        });
                    }
                    Some(other) if !other.adjacent.contains(id) => {
                        log::warn!("Edge {} -> {} has no back-reference", id, neighbor);
                        return Err(GraphError::AsymmetricEdge {
                            from: *id,
                            to: *neighbor,
                        });
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }

    // ==================== Traversal ====================

    /// Run a bounded traversal from `start`.
    pub fn traverse(&self, start: &Vertex<T>, params: &TraversalParams) -> GraphResult<Traversal> {
        traversal::traverse(self, start.id(), params)
    }

    /// Member vertices reached from `start` in the given order, as handles.
    fn walk(&self, start: &Vertex<T>, order: TraversalOrder) -> Vec<Vertex<T>> {
        let params = TraversalParams::unbounded(order);
        match self.traverse(start, &params) {
            Ok(walk) => self.project(&walk.visited),
            Err(e) => {
                log::debug!("{} traversal skipped: {}", order, e);
                Vec::new()
            }
        }
    }

    fn project(&self, ids: &[VertexId]) -> Vec<Vertex<T>> {
        ids.iter().filter_map(|id| self.vertex(*id)).cloned().collect()
    }

    /// Depth-first visit order from `start`, as vertex handles.
    pub fn depth_first_vertices(&self, start: &Vertex<T>) -> Vec<Vertex<T>> {
        self.walk(start, TraversalOrder::DepthFirst)
    }

    /// Breadth-first visit order from `start`, as vertex handles.
    pub fn breadth_first_vertices(&self, start: &Vertex<T>) -> Vec<Vertex<T>> {
        self.walk(start, TraversalOrder::BreadthFirst)
    }

    /// Like [`depth_first_search`](Self::depth_first_search), but an unknown
    /// start is reported as [`GraphError::VertexNotFound`].
    pub fn try_depth_first_search(&self, start: &Vertex<T>) -> GraphResult<Vec<T>>
    where
        T: Clone,
    {
        let params = TraversalParams::unbounded(TraversalOrder::DepthFirst);
        let walk = self.traverse(start, &params)?;
        Ok(values(self.project(&walk.visited)))
    }

    /// Like [`breadth_first_search`](Self::breadth_first_search), but an
    /// unknown start is reported as [`GraphError::VertexNotFound`].
    pub fn try_breadth_first_search(&self, start: &Vertex<T>) -> GraphResult<Vec<T>>
    where
        T: Clone,
    {
        let params = TraversalParams::unbounded(TraversalOrder::BreadthFirst);
        let walk = self.traverse(start, &params)?;
        Ok(values(self.project(&walk.visited)))
    }

    /// Values of every vertex reachable from `start`, depth-first.
    ///
    /// Each reachable vertex appears once and after the vertex it was
    /// discovered from. Empty when `start` is not a member.
    pub fn depth_first_search(&self, start: &Vertex<T>) -> Vec<T>
    where
        T: Clone,
    {
        values(self.depth_first_vertices(start))
    }

    /// Values of every vertex reachable from `start`, breadth-first.
    ///
    /// Values come in non-decreasing distance from `start`. Empty when
    /// `start` is not a member.
    pub fn breadth_first_search(&self, start: &Vertex<T>) -> Vec<T>
    where
        T: Clone,
    {
        values(self.breadth_first_vertices(start))
    }
}

fn values<T: Clone>(vertices: Vec<Vertex<T>>) -> Vec<T> {
    vertices.iter().map(|v| v.value().clone()).collect()
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Graph<T> {
    /// The clone shares vertex handles with `self` but owns its own edges.
    fn clone(&self) -> Self {
        Self {
            nodes: self
                .nodes
                .iter()
                .map(|(id, slot)| {
                    (
                        *id,
                        Slot {
                            vertex: slot.vertex.clone(),
                            adjacent: slot.adjacent.clone(),
                        },
                    )
                })
                .collect(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&VertexId> = self.nodes.keys().collect();
        ids.sort();
        let mut map = f.debug_map();
        for id in ids {
            let slot = &self.nodes[id];
            map.entry(slot.vertex.value(), &slot.adjacent);
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph: Graph<u32> = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.check_invariants().is_ok());
    }

    #[test]
    fn test_self_loop() {
        let mut graph = Graph::new();
        let a = Vertex::new('a');
        graph.add_edge(&a, &a);

        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_edge(&a, &a));
        assert_eq!(graph.degree(&a), 1);
        assert_eq!(graph.depth_first_search(&a), vec!['a']);
        assert_eq!(graph.breadth_first_search(&a), vec!['a']);

        assert!(graph.remove_vertex(&a));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_orphan_detected() {
        let mut graph = Graph::new();
        let a = Vertex::new(1);
        let b = Vertex::new(2);
        graph.add_edge(&a, &b);

        // Drop b's slot behind the graph's back.
        graph.nodes.remove(&b.id());
        match graph.check_invariants() {
            Err(GraphError::OrphanedNeighbor { vertex, neighbor }) => {
                assert_eq!(vertex, a.id());
                assert_eq!(neighbor, b.id());
            }
            other => panic!("Expected OrphanedNeighbor, got {:?}", other),
        }
    }

    #[test]
    fn test_asymmetry_detected() {
        let mut graph = Graph::new();
        let a = Vertex::new(1);
        let b = Vertex::new(2);
        graph.add_edge(&a, &b);

        graph.unlink_one(b.id(), a.id());
        assert_eq!(
            graph.check_invariants(),
            Err(GraphError::AsymmetricEdge {
                from: a.id(),
                to: b.id()
            })
        );
    }

    #[test]
    fn test_clone_has_independent_edges() {
        let mut graph = Graph::new();
        let a = Vertex::new(1);
        let b = Vertex::new(2);
        graph.add_edge(&a, &b);

        let mut copy = graph.clone();
        copy.remove_edge(&a, &b);

        assert!(graph.contains_edge(&a, &b));
        assert!(!copy.contains_edge(&a, &b));
        assert!(copy.contains_vertex(&a));
    }
}
