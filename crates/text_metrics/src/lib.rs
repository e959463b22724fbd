//! Text Metrics - deterministic measurement for the exporter's fonts
//!
//! The PDF painter only uses built-in base-14 faces (Helvetica and Times
//! families), so their advance widths can be carried as static tables and
//! measurement stays a pure function: same text, same font, same size,
//! same width. No system font access, no shaping engine.
//!
//! Widths are in the AFM convention of 1/1000 em units.

mod font;
mod widths;

pub use font::*;
