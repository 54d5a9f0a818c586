//! Error types for the global minimum cut engine

use thiserror::Error;

use crate::graph::{VertexId, Weight};

/// Result type for mincut operations
pub type Result<T> = std::result::Result<T, MinCutError>;

/// Errors that can occur while building a graph or computing its minimum cut
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MinCutError {
    /// Fewer than two active vertices, so no cut exists
    #[error("Graph has {0} active vertices, at least 2 are required")]
    TooFewVertices(usize),

    /// Edge carries a negative weight
    #[error("Negative weight {weight} on edge ({u}, {v})")]
    NegativeWeight {
        /// First endpoint
        u: VertexId,
        /// Second endpoint
        v: VertexId,
        /// Offending weight
        weight: Weight,
    },

    /// weight(u, v) differs from weight(v, u)
    #[error("Asymmetric weight on edge ({u}, {v}): {forward} != {backward}")]
    AsymmetricWeight {
        /// First endpoint
        u: VertexId,
        /// Second endpoint
        v: VertexId,
        /// weight(u, v)
        forward: Weight,
        /// weight(v, u)
        backward: Weight,
    },

    /// Vertex has nonzero weight to itself
    #[error("Self-loop on vertex {0}")]
    SelfLoop(VertexId),

    /// Vertex ID outside the graph or no longer active
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(VertexId),

    /// Sum of edge weights does not fit the weight type
    #[error("Total edge weight overflows")]
    WeightOverflow,

    /// Vertex name heads more than one adjacency line
    #[error("Vertex name defined more than once: {0}")]
    DuplicateVertexName(String),

    /// Vertex name not present in the input
    #[error("Unknown vertex name: {0}")]
    UnknownVertexName(String),

    /// Malformed adjacency line
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<std::io::Error> for MinCutError {
    fn from(err: std::io::Error) -> Self {
        MinCutError::SerializationError(err.to_string())
    }
}

impl From<serde_json::Error> for MinCutError {
    fn from(err: serde_json::Error) -> Self {
        MinCutError::SerializationError(err.to_string())
    }
}

impl MinCutError {
    /// Check if the error means the graph itself is not a valid cut input
    pub fn is_invalid_graph(&self) -> bool {
        matches!(
            self,
            MinCutError::TooFewVertices(_)
                | MinCutError::NegativeWeight { .. }
                | MinCutError::AsymmetricWeight { .. }
                | MinCutError::SelfLoop(_)
                | MinCutError::InvalidVertex(_)
                | MinCutError::WeightOverflow
        )
    }

    /// Check if the error came from reading named adjacency input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            MinCutError::DuplicateVertexName(_)
                | MinCutError::UnknownVertexName(_)
                | MinCutError::Parse { .. }
                | MinCutError::SerializationError(_)
        )
    }
}
