//! Weighted undirected graph container.
//!
//! [`Graph`] is the single entry point for building a graph and querying its
//! adjacency. The underlying petgraph storage is private; all mutation goes
//! through [`Graph::add_edge`], which validates vertex indices eagerly so the
//! traversal code never sees an out-of-range index. A read-only accessor is
//! provided for algorithms and tests that want to walk the raw adjacency.
//!
//! The vertex count is fixed at construction. Edges are inserted one at a
//! time before any traversal runs, and the structure is read-only during MST
//! computation. The container is not designed for concurrent mutation;
//! callers that share a graph across threads must serialize access
//! externally.

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::id::{EdgeId, VertexId};

/// Edge weight. Signed: spanning tree computation has no correctness
/// dependency on non-negative weights, unlike shortest-path algorithms.
pub type Weight = i64;

/// A weighted undirected graph with a fixed vertex count.
///
/// Vertices are indexed `0..vertex_count`. Each inserted edge is visible
/// from both endpoints' adjacency with the same weight. Self-loops and
/// parallel edges are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    adj: UnGraph<(), Weight>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        let mut adj = UnGraph::with_capacity(vertex_count, 0);
        for _ in 0..vertex_count {
            adj.add_node(());
        }
        Graph { adj }
    }

    /// Inserts the undirected edge `(u, v)` with the given weight.
    ///
    /// Returns the new [`EdgeId`]. Fails with [`GraphError::InvalidVertex`]
    /// when either endpoint is out of range; validation happens before any
    /// mutation, so a failed insert leaves the graph unchanged.
    pub fn add_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        weight: Weight,
    ) -> Result<EdgeId, GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let idx = self.adj.add_edge(u.into(), v.into(), weight);
        Ok(EdgeId::from(idx))
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adj.node_count()
    }

    /// Returns the number of undirected edges (each counted once).
    pub fn edge_count(&self) -> usize {
        self.adj.edge_count()
    }

    /// Returns all vertices in index order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adj.node_indices().map(VertexId::from)
    }

    /// Returns the `(neighbor, weight)` pairs incident to a vertex.
    ///
    /// Parallel edges appear once per insertion; a self-loop appears once.
    pub fn neighbors(&self, vertex: VertexId) -> Result<Vec<(VertexId, Weight)>, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.incident(vertex).collect())
    }

    /// Returns the number of edges incident to a vertex.
    pub fn degree(&self, vertex: VertexId) -> Result<usize, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.incident(vertex).count())
    }

    /// Returns a read-only reference to the underlying adjacency structure.
    pub fn adjacency(&self) -> &UnGraph<(), Weight> {
        &self.adj
    }

    // -----------------------------------------------------------------------
    // Crate-internal helpers
    // -----------------------------------------------------------------------

    /// Iterates the incident edges of a vertex, oriented away from it.
    ///
    /// Callers must pass an in-range vertex.
    pub(crate) fn incident(
        &self,
        vertex: VertexId,
    ) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        let idx: NodeIndex<u32> = vertex.into();
        self.adj.edges(idx).map(move |edge| {
            let other = if edge.source() == idx {
                edge.target()
            } else {
                edge.source()
            };
            (VertexId::from(other), *edge.weight())
        })
    }

    /// Validates that a vertex index is in `0..vertex_count`.
    pub(crate) fn check_vertex(&self, vertex: VertexId) -> Result<(), GraphError> {
        if (vertex.0 as usize) < self.adj.node_count() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex,
                vertex_count: self.adj.node_count(),
            })
        }
    }
}
