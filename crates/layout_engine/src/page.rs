//! Page geometry and margin configuration
//!
//! All values are in PostScript points (1/72 inch). The Y axis grows
//! downward from the top of the page; the PDF painter converts at the
//! drawing boundary.

use crate::{LayoutError, Result};
use serde::{Deserialize, Serialize};

/// Points per millimeter
pub const MM_TO_PT: f32 = 72.0 / 25.4;

/// Points per centimeter
pub const CM_TO_PT: f32 = MM_TO_PT * 10.0;

/// Standard page sizes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PageSize {
    /// A4 (210mm x 297mm)
    A4,
    /// Custom size in points
    Custom { width: f32, height: f32 },
}

impl PageSize {
    /// Get the width and height in points
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.276, 841.89), // 210mm x 297mm at 72 dpi
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::A4
    }
}

/// Page layout configuration for one export variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Page size
    pub page_size: PageSize,
    /// Page width in points
    pub page_width: f32,
    /// Page height in points
    pub page_height: f32,
    /// Top margin in points
    pub margin_top: f32,
    /// Bottom margin in points
    pub margin_bottom: f32,
    /// Left margin in points
    pub margin_left: f32,
    /// Right margin in points
    pub margin_right: f32,
}

impl PageConfig {
    /// A4 with uniform 20mm margins (plain export variant)
    pub fn plain() -> Self {
        let (width, height) = PageSize::A4.dimensions();
        let margin = 20.0 * MM_TO_PT;
        Self {
            page_size: PageSize::A4,
            page_width: width,
            page_height: height,
            margin_top: margin,
            margin_bottom: margin,
            margin_left: margin,
            margin_right: margin,
        }
    }

    /// A4 with ABNT margins: top 3cm, left 3cm, right 2cm, bottom 2cm
    pub fn abnt() -> Self {
        let (width, height) = PageSize::A4.dimensions();
        Self {
            page_size: PageSize::A4,
            page_width: width,
            page_height: height,
            margin_top: 3.0 * CM_TO_PT,
            margin_bottom: 2.0 * CM_TO_PT,
            margin_left: 3.0 * CM_TO_PT,
            margin_right: 2.0 * CM_TO_PT,
        }
    }

    /// Custom page with explicit margins
    pub fn custom(
        width: f32,
        height: f32,
        margin_top: f32,
        margin_bottom: f32,
        margin_left: f32,
        margin_right: f32,
    ) -> Result<Self> {
        let config = Self {
            page_size: PageSize::Custom { width, height },
            page_width: width,
            page_height: height,
            margin_top,
            margin_bottom,
            margin_left,
            margin_right,
        };
        if config.content_width() <= 0.0 || config.content_height() <= 0.0 {
            return Err(LayoutError::InvalidPageSetup(format!(
                "margins leave no content area on a {width}x{height}pt page"
            )));
        }
        Ok(config)
    }

    /// Content area width (page minus left/right margins)
    pub fn content_width(&self) -> f32 {
        self.page_width - self.margin_left - self.margin_right
    }

    /// Content area height (page minus top/bottom margins)
    pub fn content_height(&self) -> f32 {
        self.page_height - self.margin_top - self.margin_bottom
    }

    /// Vertical cursor position at the top of a fresh page
    pub fn content_top(&self) -> f32 {
        self.margin_top
    }

    /// Lowest cursor position content may reach
    pub fn content_bottom(&self) -> f32 {
        self.page_height - self.margin_bottom
    }

    /// Available text width at the given left indent
    pub fn indented_width(&self, indent: f32) -> f32 {
        self.content_width() - indent
    }

    /// Horizontal center of the content area
    pub fn center_x(&self) -> f32 {
        self.margin_left + self.content_width() / 2.0
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::plain()
    }
}
