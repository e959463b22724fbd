//! Layout plan: pages of drawing operations plus the builder that owns
//! the pagination state
//!
//! Rendering never touches the PDF library directly. The tree walk
//! produces a [`DocumentPlan`] (an ordered list of pages, each an
//! ordered list of [`DrawOp`]s) which the painter replays verbatim.
//! Coordinates are points with Y growing downward from the page top;
//! text Y is the baseline.

use crate::FetchedImage;
use layout_engine::{overflows, PageConfig};
use serde::{Deserialize, Serialize};
use text_metrics::Font;

/// An RGB color with components in 0..=1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const GRAY: Color = Color::rgb(0.42, 0.45, 0.50);
}

/// One drawing operation on a page
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        /// Left edge of the text run, points from the page's left edge
        x: f32,
        /// Baseline, points from the page's top edge
        y: f32,
        content: String,
        font: Font,
        size: f32,
        color: Color,
    },
    Image {
        /// Left edge, points
        x: f32,
        /// Top edge, points
        y: f32,
        /// Display width in points
        width: f32,
        /// Display height in points
        height: f32,
        pixels: FetchedImage,
    },
}

/// Ordered drawing operations for one page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PagePlan {
    pub ops: Vec<DrawOp>,
}

impl PagePlan {
    /// Text contents in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { content, .. } => Some(content.as_str()),
            DrawOp::Image { .. } => None,
        })
    }

    /// Number of image operations on this page
    pub fn image_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Image { .. }))
            .count()
    }
}

/// The finished layout of one export run
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentPlan {
    pub config: PageConfig,
    pub pages: Vec<PagePlan>,
}

impl DocumentPlan {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All text contents across pages, in draw order
    pub fn text_content(&self) -> Vec<&str> {
        self.pages.iter().flat_map(|p| p.texts()).collect()
    }

    /// Stamp a page number bottom-right on every page from `skip`
    /// onward, numbered 1-based so that page index `skip` reads "1".
    ///
    /// Pages with no other content are numbered too; one explicit rule
    /// instead of a blank-page heuristic.
    pub fn stamp_page_numbers(&mut self, skip: usize, font: Font, size: f32) {
        let config = self.config.clone();
        for (index, page) in self.pages.iter_mut().enumerate().skip(skip) {
            let label = (index - skip + 1).to_string();
            page.ops.push(DrawOp::Text {
                x: config.page_width - config.margin_right - font.measure(&label, size),
                y: config.page_height - config.margin_bottom / 2.0,
                content: label,
                font,
                size,
                color: Color::BLACK,
            });
        }
    }
}

/// Footer drawn when a page closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterStyle {
    /// No footer (ABNT body; numbering happens in a later pass)
    None,
    /// Centered "Página {n}" in the bottom margin
    PageLabel,
}

/// Owns the in-progress plan: current page, footer policy, and the
/// stateful side of the overflow guard. One builder per export run,
/// never shared.
#[derive(Debug)]
pub struct PlanBuilder {
    config: PageConfig,
    footer: FooterStyle,
    pages: Vec<PagePlan>,
}

impl PlanBuilder {
    pub fn new(config: PageConfig, footer: FooterStyle) -> Self {
        Self {
            config,
            footer,
            pages: vec![PagePlan::default()],
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Index of the page currently receiving operations
    pub fn page_index(&self) -> usize {
        self.pages.len() - 1
    }

    /// Append an operation to the current page
    pub fn push(&mut self, op: DrawOp) {
        self.pages
            .last_mut()
            .expect("builder always holds one page")
            .ops
            .push(op);
    }

    /// Close the current page (drawing its footer) and open a fresh one.
    /// Returns the cursor position at the top of the new page.
    pub fn new_page(&mut self) -> f32 {
        self.draw_footer();
        self.pages.push(PagePlan::default());
        self.config.content_top()
    }

    /// The overflow guard: if a block of `required_height` no longer
    /// fits at `cursor_y`, close the page and reset the cursor.
    /// Returns the (possibly reset) cursor and whether a break happened.
    pub fn ensure_space(&mut self, cursor_y: f32, required_height: f32) -> (f32, bool) {
        if overflows(cursor_y, required_height, &self.config) {
            (self.new_page(), true)
        } else {
            (cursor_y, false)
        }
    }

    /// Finish the run: footer on the final page, plan handed back
    pub fn finish(mut self) -> DocumentPlan {
        self.draw_footer();
        DocumentPlan {
            config: self.config,
            pages: self.pages,
        }
    }

    fn draw_footer(&mut self) {
        match self.footer {
            FooterStyle::None => {}
            FooterStyle::PageLabel => {
                let label = format!("Página {}", self.page_index() + 1);
                let font = Font::Helvetica;
                let size = 9.0;
                let x = self.config.center_x() - font.measure(&label, size) / 2.0;
                let y = self.config.page_height - self.config.margin_bottom / 2.0;
                self.push(DrawOp::Text {
                    x,
                    y,
                    content: label,
                    font,
                    size,
                    color: Color::GRAY,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ensure_space_keeps_cursor_when_block_fits() {
        let mut builder = PlanBuilder::new(PageConfig::plain(), FooterStyle::None);
        let cursor = builder.config().content_top() + 100.0;
        let (after, broke) = builder.ensure_space(cursor, 50.0);
        assert!(!broke);
        assert_eq!(after, cursor);
        assert_eq!(builder.page_index(), 0);
    }

    #[test]
    fn ensure_space_resets_cursor_to_content_top_on_break() {
        let config = PageConfig::plain();
        let mut builder = PlanBuilder::new(config.clone(), FooterStyle::None);
        let cursor = config.content_bottom() - 10.0;
        let (after, broke) = builder.ensure_space(cursor, 50.0);
        assert!(broke);
        assert_eq!(after, config.content_top());
        assert_eq!(builder.page_index(), 1);
        // Cursor lands inside the content band after a triggering call
        assert!(after >= config.content_top());
        assert!(after <= config.content_bottom());
    }

    #[test]
    fn page_label_footer_precedes_the_break() {
        let config = PageConfig::plain();
        let mut builder = PlanBuilder::new(config.clone(), FooterStyle::PageLabel);
        builder.ensure_space(config.content_bottom(), 10.0);
        let plan = builder.finish();
        assert_eq!(plan.page_count(), 2);
        // Footer is the last op of the closed first page
        let first_page_texts: Vec<&str> = plan.pages[0].texts().collect();
        assert_eq!(first_page_texts.last(), Some(&"Página 1"));
        let second_page_texts: Vec<&str> = plan.pages[1].texts().collect();
        assert_eq!(second_page_texts.last(), Some(&"Página 2"));
    }

    #[test]
    fn footer_none_draws_nothing() {
        let config = PageConfig::abnt();
        let mut builder = PlanBuilder::new(config.clone(), FooterStyle::None);
        builder.new_page();
        let plan = builder.finish();
        assert_eq!(plan.page_count(), 2);
        assert!(plan.text_content().is_empty());
    }

    proptest! {
        // The cursor returned by a triggering guard call always lands in
        // the content band, and a non-triggering call never moves it
        #[test]
        fn guarded_cursor_stays_in_the_content_band(
            cursor in 0.0f32..842.0,
            required in 0.0f32..400.0,
        ) {
            let config = PageConfig::plain();
            let mut builder = PlanBuilder::new(config.clone(), FooterStyle::None);
            let (after, broke) = builder.ensure_space(cursor, required);
            if broke {
                prop_assert_eq!(after, config.content_top());
                prop_assert!(after >= config.content_top());
                prop_assert!(after <= config.content_bottom());
            } else {
                prop_assert_eq!(after, cursor);
            }
        }
    }

    #[test]
    fn stamp_page_numbers_skips_cover_and_offsets() {
        let config = PageConfig::abnt();
        let mut builder = PlanBuilder::new(config.clone(), FooterStyle::None);
        builder.new_page();
        builder.new_page();
        let mut plan = builder.finish();
        plan.stamp_page_numbers(1, Font::TimesRoman, 10.0);

        assert!(plan.pages[0].texts().next().is_none());
        assert_eq!(plan.pages[1].texts().collect::<Vec<_>>(), vec!["1"]);
        assert_eq!(plan.pages[2].texts().collect::<Vec<_>>(), vec!["2"]);

        // Bottom-right placement: the run's right edge meets the margin
        if let DrawOp::Text { x, size, font, content, .. } = &plan.pages[1].ops[0] {
            let right_edge = x + font.measure(content, *size);
            assert!((right_edge - (config.page_width - config.margin_right)).abs() < 1e-3);
        } else {
            panic!("expected a text op");
        }
    }
}
