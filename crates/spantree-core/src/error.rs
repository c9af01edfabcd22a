//! Error types for spantree-core.
//!
//! Uses `thiserror` for structured, matchable error variants. Vertex indices
//! are validated eagerly at the API boundary, so the traversal code itself is
//! total: any valid graph, connected or not, produces a result.

use crate::id::VertexId;
use thiserror::Error;

/// Errors produced by graph construction and traversal.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A vertex index falls outside `0..vertex_count`.
    #[error("invalid vertex: {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidVertex {
        vertex: VertexId,
        vertex_count: usize,
    },
}
