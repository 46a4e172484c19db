//! Graph traversal algorithms (DFS, BFS).

use std::collections::{HashMap, VecDeque};
use std::fmt;

use crate::types::{GraphError, GraphResult, VertexId};

use super::Graph;

/// Visit order for a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    /// Follow one neighbor chain as far as it goes before backtracking.
    #[default]
    DepthFirst,
    /// Visit all vertices at distance k before any at distance k + 1.
    BreadthFirst,
}

impl TraversalOrder {
    /// Return a human-readable name for this order.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DepthFirst => "depth_first",
            Self::BreadthFirst => "breadth_first",
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parameters for a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalParams {
    /// Visit order.
    pub order: TraversalOrder,
    /// Vertices at this depth are visited but not expanded.
    pub max_depth: u32,
    /// Maximum number of vertices to return.
    pub max_results: usize,
}

impl TraversalParams {
    /// No depth or result limit.
    pub fn unbounded(order: TraversalOrder) -> Self {
        Self {
            order,
            max_depth: u32::MAX,
            max_results: usize::MAX,
        }
    }
}

impl Default for TraversalParams {
    fn default() -> Self {
        Self::unbounded(TraversalOrder::default())
    }
}

/// Result of a traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Traversal {
    /// Visited vertex ids, in visit order.
    pub visited: Vec<VertexId>,
    /// Hops from the start. Shortest distance for breadth-first and for
    /// depth-limited depth-first traversals; discovery-tree depth for an
    /// unbounded depth-first traversal.
    pub depths: HashMap<VertexId, u32>,
}

impl Traversal {
    /// Number of visited vertices.
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    /// True when nothing was visited.
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}

/// Traverse `graph` from `start_id`.
///
/// Fails with [`GraphError::VertexNotFound`] if `start_id` is not a member.
pub fn traverse<T>(
    graph: &Graph<T>,
    start_id: VertexId,
    params: &TraversalParams,
) -> GraphResult<Traversal> {
    if graph.vertex(start_id).is_none() {
        return Err(GraphError::VertexNotFound(start_id));
    }
    if params.max_results == 0 {
        return Ok(Traversal::default());
    }

    let result = match params.order {
        TraversalOrder::DepthFirst => dfs_traverse(graph, start_id, params),
        TraversalOrder::BreadthFirst => bfs_traverse(graph, start_id, params),
    };
    log::trace!(
        "{} traversal from {} visited {} vertices",
        params.order,
        start_id,
        result.len()
    );
    Ok(result)
}

/// Explicit-stack DFS. A vertex is marked when popped, so the first
/// unvisited neighbor's whole subtree is walked before its siblings.
///
/// Under a depth limit a vertex first reached by a long path may be cut
/// off; when a shorter path reaches it later its depth is lowered and it
/// is expanded again, so every vertex within `max_depth` hops is found.
fn dfs_traverse<T>(graph: &Graph<T>, start_id: VertexId, params: &TraversalParams) -> Traversal {
    let mut result = Traversal::default();
    let mut stack: Vec<(VertexId, u32)> = vec![(start_id, 0)];
    // Without a limit nothing is cut off, so nothing is ever re-expanded.
    let bounded = params.max_depth != u32::MAX;

    while let Some((current_id, depth)) = stack.pop() {
        if result.visited.len() >= params.max_results {
            break;
        }
        match result.depths.get(&current_id) {
            Some(&seen) if !bounded || seen <= depth => continue,
            Some(_) => {}
            None => result.visited.push(current_id),
        }
        result.depths.insert(current_id, depth);

        if depth >= params.max_depth {
            continue;
        }
        if let Some(adjacent) = graph.adjacent_ids(current_id) {
            // Reversed so the first neighbor is popped first.
            for &neighbor_id in adjacent.iter().rev() {
                let improves = match result.depths.get(&neighbor_id) {
                    None => true,
                    Some(&seen) => bounded && seen > depth + 1,
                };
                if improves {
                    stack.push((neighbor_id, depth + 1));
                }
            }
        }
    }

    result
}

/// Queue-based BFS. A vertex is marked when enqueued.
fn bfs_traverse<T>(graph: &Graph<T>, start_id: VertexId, params: &TraversalParams) -> Traversal {
    let mut result = Traversal::default();
    let mut queue: VecDeque<(VertexId, u32)> = VecDeque::new();

    result.visited.push(start_id);
    result.depths.insert(start_id, 0);
    queue.push_back((start_id, 0));

    'outer: while let Some((current_id, depth)) = queue.pop_front() {
        if depth >= params.max_depth {
            continue;
        }
        let Some(adjacent) = graph.adjacent_ids(current_id) else {
            continue;
        };
        for &neighbor_id in adjacent {
            if result.visited.len() >= params.max_results {
                break 'outer;
            }
            if result.depths.contains_key(&neighbor_id) {
                continue;
            }
            result.visited.push(neighbor_id);
            result.depths.insert(neighbor_id, depth + 1);
            queue.push_back((neighbor_id, depth + 1));
        }
    }

    result
}
