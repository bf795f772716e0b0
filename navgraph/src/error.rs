use thiserror::Error;

/// Failure to decode one of the persisted documents.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{what} exceeds limit of {limit}")]
    CapsExceeded { what: &'static str, limit: usize },
    #[error("{0} is out of bounds")]
    OutOfBounds(String),
    #[error("invalid structure: {0}")]
    InvalidStructure(String),
}

impl CodecError {
    /// Stable short code for the JS error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            CodecError::Parse(_) => "json_parse",
            CodecError::CapsExceeded { .. } => "caps_exceeded",
            CodecError::OutOfBounds(_) => "out_of_bounds",
            CodecError::InvalidStructure(_) => "invalid_structure",
        }
    }
}

/// Why no route could be produced.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("graph has no vertices")]
    EmptyGraph,
    #[error("no vertex for location '{name}'")]
    UnknownLocation { name: String },
    #[error("destination is not reachable from the start")]
    Unreachable,
}

impl RouteError {
    pub fn code(&self) -> &'static str {
        match self {
            RouteError::EmptyGraph => "empty_graph",
            RouteError::UnknownLocation { .. } => "not_found",
            RouteError::Unreachable => "unreachable",
        }
    }
}
