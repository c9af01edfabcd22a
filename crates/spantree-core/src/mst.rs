//! Minimum spanning tree via Prim's algorithm.
//!
//! [`Graph::minimum_spanning_tree`] grows a tree from a start vertex by
//! repeatedly taking the cheapest edge crossing the visited/unvisited
//! boundary. Candidates live in a binary heap and stale entries are skipped
//! at pop time (lazy deletion) instead of maintaining a decrease-key
//! structure.
//!
//! # Disconnected graphs
//!
//! When the graph is disconnected the result is the minimum spanning tree of
//! the component containing the start vertex only: `edges` holds
//! `|component| - 1` entries and `total_cost` covers that component. This is
//! deliberate, queryable behavior ([`SpanningTree::spans`]), not an error.
//!
//! Runs in O(E log E) time and O(V + E) space.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::{Graph, Weight};
use crate::id::VertexId;

/// A single tree edge, oriented the way the algorithm fixed it: `parent` was
/// already in the tree when `child` was attached through this edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEdge {
    pub parent: VertexId,
    pub child: VertexId,
    pub weight: Weight,
}

/// Result of a [`Graph::minimum_spanning_tree`] run.
///
/// `edges` are listed in the order the algorithm fixed them, and
/// `total_cost` equals the sum of their weights. Recomputing with the same
/// graph and start produces the same result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningTree {
    /// The start vertex the tree was grown from.
    pub root: VertexId,
    /// Tree edges in the order they were fixed.
    pub edges: Vec<TreeEdge>,
    /// Sum of the weights of `edges`.
    pub total_cost: Weight,
}

impl SpanningTree {
    /// Returns the number of vertices the tree touches (root included).
    pub fn vertex_count(&self) -> usize {
        self.edges.len() + 1
    }

    /// Returns `true` if the tree covers every vertex of `graph`.
    ///
    /// `false` means the graph is disconnected and the tree spans only the
    /// component containing [`SpanningTree::root`].
    pub fn spans(&self, graph: &Graph) -> bool {
        self.vertex_count() == graph.vertex_count()
    }

    /// Verifies that the edge order respects the grow-from-root invariant
    /// and that `total_cost` matches the edge weights.
    ///
    /// Only called in debug builds (via `cfg(debug_assertions)`).
    #[cfg(debug_assertions)]
    fn assert_consistency(&self) {
        use std::collections::HashSet;

        let sum: Weight = self.edges.iter().map(|edge| edge.weight).sum();
        assert_eq!(sum, self.total_cost, "total cost drifted from edge weights");

        let mut attached = HashSet::new();
        attached.insert(self.root);
        for edge in &self.edges {
            assert!(
                attached.contains(&edge.parent),
                "edge to {} fixed before its parent {}",
                edge.child,
                edge.parent
            );
            assert!(
                attached.insert(edge.child),
                "vertex {} attached twice",
                edge.child
            );
        }
    }
}

/// Candidate edge crossing the visited/unvisited boundary.
///
/// Ordered min-weight-first so `BinaryHeap` (a max-heap) pops the cheapest
/// candidate. Equal weights break by vertex index, then parent, keeping runs
/// reproducible; correctness never depends on the tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    weight: Weight,
    vertex: VertexId,
    parent: Option<VertexId>,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.vertex.cmp(&self.vertex))
            .then_with(|| other.parent.cmp(&self.parent))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Graph {
    /// Computes a minimum spanning tree from `start` using Prim's algorithm.
    ///
    /// The heap is seeded with a zero-weight sentinel carrying no parent, so
    /// the start vertex is fixed first without contributing an edge. Each
    /// newly fixed vertex pushes its unvisited neighbors as candidates; a
    /// popped candidate whose vertex was fixed in the meantime is stale and
    /// skipped.
    ///
    /// Fails with [`GraphError::InvalidVertex`] iff `start` is out of range.
    /// For a disconnected graph the tree covers only the component of
    /// `start` (see the module docs).
    pub fn minimum_spanning_tree(&self, start: VertexId) -> Result<SpanningTree, GraphError> {
        self.check_vertex(start)?;

        let mut visited = vec![false; self.vertex_count()];
        let mut heap = BinaryHeap::new();
        heap.push(Candidate {
            weight: 0,
            vertex: start,
            parent: None,
        });

        let mut edges = Vec::new();
        let mut total_cost: Weight = 0;

        while let Some(Candidate {
            weight,
            vertex,
            parent,
        }) = heap.pop()
        {
            if visited[vertex.0 as usize] {
                // Stale candidate: the vertex was reached through a cheaper
                // edge after this entry was pushed.
                continue;
            }
            visited[vertex.0 as usize] = true;

            total_cost += weight;
            if let Some(parent) = parent {
                edges.push(TreeEdge {
                    parent,
                    child: vertex,
                    weight,
                });
            }

            for (neighbor, weight) in self.incident(vertex) {
                if !visited[neighbor.0 as usize] {
                    heap.push(Candidate {
                        weight,
                        vertex: neighbor,
                        parent: Some(vertex),
                    });
                }
            }
        }

        let tree = SpanningTree {
            root: start,
            edges,
            total_cost,
        };

        #[cfg(debug_assertions)]
        tree.assert_consistency();

        Ok(tree)
    }
}
