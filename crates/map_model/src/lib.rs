//! Map Model - Mind-map tree structure and input format
//!
//! This crate defines the mind-map tree consumed by the export pipeline:
//! node types, the JSON wire format produced by the map editor, cover-page
//! metadata for the ABNT variant, and read-only traversal helpers.

mod cover;
mod error;
mod node;
mod tree;

pub use cover::*;
pub use error::*;
pub use node::*;
pub use tree::*;
