//! Vertex handles and vertex identity.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Source of vertex identities. Shared by every graph in the process.
static NEXT_VERTEX_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a vertex, assigned once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(u64);

impl VertexId {
    fn next() -> Self {
        Self(NEXT_VERTEX_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric identity.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct VertexInner<T> {
    id: VertexId,
    value: T,
    seed: Vec<Vertex<T>>,
}

/// A node of an undirected graph: a value plus an identity.
///
/// `Vertex` is a shared handle. Cloning it yields another handle to the
/// same vertex, so a graph and its caller can both hold one. Equality and
/// hashing go by identity, never by value: two vertices built from equal
/// values are distinct.
///
/// Live adjacency is owned by the [`Graph`](crate::graph::Graph) that holds
/// the vertex. A vertex may additionally carry *seed* neighbors given at
/// construction; these become edges when the vertex enters a graph.
pub struct Vertex<T> {
    inner: Arc<VertexInner<T>>,
}

impl<T> Vertex<T> {
    /// Create a detached vertex with no seed neighbors.
    pub fn new(value: T) -> Self {
        Self::with_adjacent(value, std::iter::empty())
    }

    /// Create a detached vertex whose seed adjacency is `neighbors`.
    ///
    /// Duplicate handles are collapsed, keeping first-seen order.
    pub fn with_adjacent<'a, I>(value: T, neighbors: I) -> Self
    where
        I: IntoIterator<Item = &'a Vertex<T>>,
        T: 'a,
    {
        let mut seed: Vec<Vertex<T>> = Vec::new();
        for neighbor in neighbors {
            if !seed.contains(neighbor) {
                seed.push(neighbor.clone());
            }
        }
        Self {
            inner: Arc::new(VertexInner {
                id: VertexId::next(),
                value,
                seed,
            }),
        }
    }

    /// The vertex identity.
    pub fn id(&self) -> VertexId {
        self.inner.id
    }

    /// The payload.
    pub fn value(&self) -> &T {
        &self.inner.value
    }

    /// Neighbors given at construction.
    pub fn seed_adjacent(&self) -> &[Vertex<T>] {
        &self.inner.seed
    }

    /// Whether `self` and `other` are handles to the same vertex.
    pub fn ptr_eq(&self, other: &Vertex<T>) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Clone for Vertex<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for Vertex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl<T> Eq for Vertex<T> {}

impl<T> Hash for Vertex<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vertex")
            .field("id", &self.inner.id)
            .field("value", &self.inner.value)
            .field(
                "seed",
                &self.inner.seed.iter().map(Vertex::id).collect::<Vec<_>>(),
            )
            .finish()
    }
}
