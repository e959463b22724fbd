//! Error types for the export pipeline
//!
//! Image-fetch failures are not represented here: they are absorbed at
//! the node level (the image block is skipped) and never abort an export.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Invalid map: {0}")]
    Model(#[from] map_model::ModelError),

    #[error("Layout failed: {0}")]
    Layout(#[from] layout_engine::LayoutError),

    #[error("PDF emission failed: {0}")]
    Pdf(String),
}

pub type Result<T> = std::result::Result<T, ExportError>;
