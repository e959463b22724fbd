//! Export Engine - mind-map to paginated PDF
//!
//! A single-pass, depth-first tree-to-document renderer with manual
//! pagination. The walk produces a layout plan (pages of drawing
//! operations); the painter replays the plan into PDF bytes. Image
//! fetches are awaited sequentially in visitation order so the plan's
//! page/cursor state is deterministic.
//!
//! # Modules
//!
//! - `fetch`: remote image retrieval and decoding
//! - `plan`: drawing operations, pages, and the pagination builder
//! - `plain`: the plain export variant (bullets, footers)
//! - `abnt`: the ABNT variant (cover, summary, references, numbering)
//! - `pdf`: the printpdf painter
//! - `export`: top-level entry points

mod abnt;
mod error;
mod export;
mod fetch;
mod pdf;
mod plain;
mod plan;
mod style;

pub use error::*;
pub use export::*;
pub use fetch::*;
pub use plan::*;
