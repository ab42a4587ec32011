use std::fmt::Display;

/// Errors raised by the shortest path engine.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("The graph contains a negative weight cycle.")]
    NegativeCycle,

    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("Graph has no vertices")]
    EmptyGraph,
}

impl EngineError {
    pub(crate) fn unknown_vertex(vertex: &impl Display) -> Self {
        Self::UnknownVertex(vertex.to_string())
    }
}

/// Result type for the engine
pub type Result<T> = std::result::Result<T, EngineError>;
