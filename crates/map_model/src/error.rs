//! Error types for the map model

use crate::NodeId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Duplicate node id: {0}")]
    DuplicateId(NodeId),

    #[error("Invalid map input: {0}")]
    InvalidInput(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
