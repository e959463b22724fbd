//! Visual constants for the two export variants
//!
//! Node kind selects glyph and color in the plain variant and nothing
//! but font weight in the ABNT variant.

use crate::Color;
use map_model::NodeKind;
use text_metrics::Font;

/// Plain variant: Helvetica, colored bullets, per-line indent.
pub(crate) mod plain {
    use super::*;

    pub const TITLE: &str = "Mapa Mental";
    pub const TITLE_FONT: Font = Font::HelveticaBold;
    pub const TITLE_SIZE: f32 = 18.0;
    pub const TITLE_ADVANCE: f32 = 30.0;

    pub const BODY_FONT: Font = Font::Helvetica;
    pub const BODY_SIZE: f32 = 11.0;
    pub const LINE_HEIGHT: f32 = 15.0;

    pub const HEADING_FONT: Font = Font::HelveticaBold;
    pub const HEADING_SIZE: f32 = 16.0;
    pub const HEADING_LINE_HEIGHT: f32 = 21.0;

    pub const CITATION_FONT: Font = Font::HelveticaOblique;
    pub const CITATION_SIZE: f32 = 9.0;

    /// Horizontal offset per tree level
    pub const INDENT_UNIT: f32 = 18.0;
    /// Gap between the bullet glyph and the first text line
    pub const BULLET_GAP: f32 = 5.0;
    /// Extra gap after the root's own content, before its children
    pub const ROOT_GAP: f32 = 10.0;

    pub const IMAGE_MAX_WIDTH: f32 = 160.0;
    /// Reserved block height checked by the guard before drawing
    pub const IMAGE_BLOCK_RESERVE: f32 = 170.0;
    pub const IMAGE_GAP: f32 = 10.0;

    pub fn bullet(kind: NodeKind) -> &'static str {
        match kind {
            NodeKind::Main => "★",
            NodeKind::Important => "◆",
            _ => "•",
        }
    }

    pub fn color(kind: NodeKind) -> Color {
        match kind {
            NodeKind::Main => Color::rgb(0.43, 0.16, 0.85),
            NodeKind::History => Color::rgb(0.85, 0.47, 0.02),
            NodeKind::Data => Color::rgb(0.15, 0.39, 0.92),
            NodeKind::Context => Color::rgb(0.02, 0.59, 0.41),
            NodeKind::Date => Color::rgb(0.86, 0.15, 0.47),
            NodeKind::Important => Color::rgb(0.86, 0.15, 0.15),
            NodeKind::Other => Color::rgb(0.22, 0.25, 0.32),
        }
    }
}

/// ABNT variant: Times, no bullets, first-line indents, 1.5 spacing.
pub(crate) mod abnt {
    use super::*;
    use layout_engine::CM_TO_PT;

    pub const BODY_FONT: Font = Font::TimesRoman;
    pub const HEADING_FONT: Font = Font::TimesBold;
    pub const CITATION_FONT: Font = Font::TimesItalic;

    pub const BODY_SIZE: f32 = 12.0;
    /// 1.5 line spacing at 12pt
    pub const LINE_HEIGHT: f32 = 18.0;
    pub const PARAGRAPH_GAP: f32 = 6.0;
    pub const ROOT_GAP: f32 = 12.0;

    /// First-line indent per tree level
    pub const FIRST_LINE_INDENT: f32 = 1.25 * CM_TO_PT;

    pub const SECTION_TITLE_SIZE: f32 = 14.0;
    /// Advance after a centered section heading ("SUMÁRIO", "REFERÊNCIAS")
    pub const SECTION_TITLE_ADVANCE: f32 = 36.0;

    pub const COVER_TITLE_SIZE: f32 = 14.0;
    pub const COVER_TITLE_LINE_HEIGHT: f32 = 21.0;
    pub const COVER_LINE_SIZE: f32 = 12.0;

    pub const SUMMARY_CHILD_INDENT: f32 = 14.0;
    pub const SUMMARY_NUMBER_GAP: f32 = 12.0;

    pub const CITATION_SIZE: f32 = 10.0;

    pub const REFERENCE_SIZE: f32 = 11.0;
    /// Simple (single) spacing for the references list
    pub const REFERENCE_LINE_HEIGHT: f32 = 14.0;
    pub const REFERENCE_GAP: f32 = 4.0;

    pub const IMAGE_MAX_WIDTH: f32 = 280.0;
    pub const IMAGE_BLOCK_RESERVE: f32 = 290.0;
    pub const IMAGE_GAP: f32 = 12.0;

    pub const PAGE_NUMBER_SIZE: f32 = 10.0;
}
