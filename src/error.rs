use thiserror::Error;

// =============================================================================
// Error taxonomy shared by every algorithm in the crate
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgoError {
    #[error("Node '{node}' not in graph")]
    NodeNotFound { node: String },

    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{what} not found")]
    NotFound { what: String },

    #[error("Collection is empty")]
    EmptyCollection,

    #[error("Invalid capacity: must be at least 1")]
    InvalidCapacity,

    #[error("Invalid key: keys must be non-empty")]
    EmptyKey,

    #[error("Failed to load config {origin}: {message}")]
    Config { origin: String, message: String },
}

impl AlgoError {
    pub fn node_not_found(node: impl Into<String>) -> Self {
        Self::NodeNotFound { node: node.into() }
    }

    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    pub fn config(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            origin: origin.into(),
            message: message.into(),
        }
    }

    /// Out-of-range helper used by the 1-indexed structures.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}

pub type Result<T> = std::result::Result<T, AlgoError>;
