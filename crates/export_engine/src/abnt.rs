//! ABNT export variant
//!
//! Strictly linear page sequence: cover, summary, body (tree walk),
//! references, then a numbering pass over every page but the cover.
//! Body pages carry no footers; numbers are stamped at the end.

use crate::style::abnt::*;
use crate::{Color, DocumentPlan, DrawOp, FooterStyle, ImageFetcher, PlanBuilder, Result};
use futures::future::BoxFuture;
use layout_engine::{wrap, wrap_indented, PageConfig};
use map_model::{CoverInfo, MapNode, MindMap};
use text_metrics::Font;

pub(crate) struct AbntExporter<'f> {
    fetcher: &'f ImageFetcher,
    builder: PlanBuilder,
}

impl<'f> AbntExporter<'f> {
    pub fn new(fetcher: &'f ImageFetcher) -> Self {
        Self {
            fetcher,
            builder: PlanBuilder::new(PageConfig::abnt(), FooterStyle::None),
        }
    }

    pub async fn build(mut self, map: &MindMap, cover: &CoverInfo) -> Result<DocumentPlan> {
        map.validate()?;

        self.cover_page(cover);

        let cursor = self.builder.new_page();
        self.summary_pages(map, cursor);

        let cursor = self.builder.new_page();
        self.render_node(map.root(), cursor, 0).await?;

        let cursor = self.builder.new_page();
        self.reference_pages(map, cursor);

        let mut plan = self.builder.finish();
        plan.stamp_page_numbers(1, BODY_FONT, PAGE_NUMBER_SIZE);
        Ok(plan)
    }

    /// Draw one horizontally centered line at the given baseline
    fn centered(&mut self, text: &str, font: Font, size: f32, baseline_y: f32) {
        if text.is_empty() {
            return;
        }
        let config = self.builder.config();
        let x = config.center_x() - font.measure(text, size) / 2.0;
        self.builder.push(DrawOp::Text {
            x,
            y: baseline_y,
            content: text.to_string(),
            font,
            size,
            color: Color::BLACK,
        });
    }

    /// Cover page: author up top, title centered, institution and year
    /// near the bottom, everything uppercase and centered. Never numbered.
    fn cover_page(&mut self, cover: &CoverInfo) {
        let config = self.builder.config().clone();

        let author = cover.author.to_uppercase();
        self.centered(
            &author,
            BODY_FONT,
            COVER_LINE_SIZE,
            config.content_top() + BODY_FONT.ascender(COVER_LINE_SIZE),
        );

        let title = cover.title.to_uppercase();
        let lines: Vec<String> = wrap(&title, config.content_width(), HEADING_FONT, COVER_TITLE_SIZE)
            .into_iter()
            .flatten()
            .collect();
        let block_height = lines.len() as f32 * COVER_TITLE_LINE_HEIGHT;
        let mut y = config.page_height / 2.0 - block_height / 2.0;
        for line in &lines {
            if !line.is_empty() {
                self.centered(
                    line,
                    HEADING_FONT,
                    COVER_TITLE_SIZE,
                    y + HEADING_FONT.ascender(COVER_TITLE_SIZE),
                );
            }
            y += COVER_TITLE_LINE_HEIGHT;
        }

        let institution = cover.institution.to_uppercase();
        let institution_baseline = config.content_bottom() - 2.0 * LINE_HEIGHT;
        self.centered(&institution, BODY_FONT, COVER_LINE_SIZE, institution_baseline);
        self.centered(
            &cover.year,
            BODY_FONT,
            COVER_LINE_SIZE,
            institution_baseline + LINE_HEIGHT,
        );
    }

    /// Summary listing: depth-0 and depth-1 node texts, each clipped to
    /// one line, with a right-aligned sequential index from 1.
    fn summary_pages(&mut self, map: &MindMap, cursor_y: f32) {
        let config = self.builder.config().clone();
        let mut cursor = cursor_y;

        self.centered(
            "SUMÁRIO",
            HEADING_FONT,
            SECTION_TITLE_SIZE,
            cursor + HEADING_FONT.ascender(SECTION_TITLE_SIZE),
        );
        cursor += SECTION_TITLE_ADVANCE;

        for (index, entry) in map.outline().iter().enumerate() {
            let (next, _) = self.builder.ensure_space(cursor, LINE_HEIGHT);
            cursor = next;

            let number = (index + 1).to_string();
            let number_x =
                config.page_width - config.margin_right - BODY_FONT.measure(&number, BODY_SIZE);
            let indent = if entry.depth == 1 { SUMMARY_CHILD_INDENT } else { 0.0 };
            let text_x = config.margin_left + indent;
            let max_text_width = number_x - SUMMARY_NUMBER_GAP - text_x;
            let clipped = BODY_FONT.prefix_fitting(entry.text, BODY_SIZE, max_text_width);

            let baseline = cursor + BODY_FONT.ascender(BODY_SIZE);
            self.builder.push(DrawOp::Text {
                x: text_x,
                y: baseline,
                content: clipped.to_string(),
                font: BODY_FONT,
                size: BODY_SIZE,
                color: Color::BLACK,
            });
            self.builder.push(DrawOp::Text {
                x: number_x,
                y: baseline,
                content: number,
                font: BODY_FONT,
                size: BODY_SIZE,
                color: Color::BLACK,
            });
            cursor += LINE_HEIGHT;
        }
    }

    /// Render one node and its subtree, returning the updated cursor.
    ///
    /// First lines carry the per-level indent; continuation lines align
    /// to the paragraph's left margin. No bullets; only the root renders
    /// in heading weight.
    fn render_node<'a>(
        &'a mut self,
        node: &'a MapNode,
        cursor_y: f32,
        level: usize,
    ) -> BoxFuture<'a, Result<f32>> {
        Box::pin(async move {
            let config = self.builder.config().clone();
            let font = if node.kind.is_heading() { HEADING_FONT } else { BODY_FONT };
            let first_indent = level as f32 * FIRST_LINE_INDENT;
            let full_width = config.content_width();
            let first_width = config.indented_width(first_indent);

            let paragraphs =
                wrap_indented(&node.text, first_width, full_width, font, BODY_SIZE);

            let mut cursor = cursor_y;
            for paragraph in &paragraphs {
                for (index, line) in paragraph.iter().enumerate() {
                    let (next, _) = self.builder.ensure_space(cursor, LINE_HEIGHT);
                    cursor = next;
                    if !line.is_empty() {
                        let x = config.margin_left + if index == 0 { first_indent } else { 0.0 };
                        self.builder.push(DrawOp::Text {
                            x,
                            y: cursor + font.ascender(BODY_SIZE),
                            content: line.clone(),
                            font,
                            size: BODY_SIZE,
                            color: Color::BLACK,
                        });
                    }
                    cursor += LINE_HEIGHT;
                }
                cursor += PARAGRAPH_GAP;
            }

            if let Some(url) = &node.image_url {
                let (next, _) = self.builder.ensure_space(cursor, IMAGE_BLOCK_RESERVE);
                cursor = next;
                if let Some(image) = self.fetcher.fetch(url).await {
                    let (width, height) = image.scaled_to_width(IMAGE_MAX_WIDTH.min(full_width));
                    self.builder.push(DrawOp::Image {
                        x: config.margin_left + (full_width - width) / 2.0,
                        y: cursor,
                        width,
                        height,
                        pixels: image,
                    });
                    cursor += height + IMAGE_GAP;
                }
            }

            if let Some(source) = &node.source_url {
                let (next, _) = self.builder.ensure_space(cursor, LINE_HEIGHT);
                cursor = next;
                self.builder.push(DrawOp::Text {
                    x: config.margin_left + first_indent,
                    y: cursor + CITATION_FONT.ascender(CITATION_SIZE),
                    content: format!("Fonte: {source}"),
                    font: CITATION_FONT,
                    size: CITATION_SIZE,
                    color: Color::BLACK,
                });
                cursor += LINE_HEIGHT;
            }

            if level == 0 {
                cursor += ROOT_GAP;
            }

            for child in &node.children {
                let (next, _) = self.builder.ensure_space(cursor, LINE_HEIGHT);
                cursor = next;
                cursor = self.render_node(child, cursor, level + 1).await?;
            }

            Ok(cursor)
        })
    }

    /// References: distinct sources across the tree, first occurrence
    /// order, as a numbered list in simple spacing.
    fn reference_pages(&mut self, map: &MindMap, cursor_y: f32) {
        let config = self.builder.config().clone();
        let mut cursor = cursor_y;

        self.centered(
            "REFERÊNCIAS",
            HEADING_FONT,
            SECTION_TITLE_SIZE,
            cursor + HEADING_FONT.ascender(SECTION_TITLE_SIZE),
        );
        cursor += SECTION_TITLE_ADVANCE;

        for (index, source) in map.sources().iter().enumerate() {
            let entry = format!("{}. {}", index + 1, source);
            let lines: Vec<String> = wrap(&entry, config.content_width(), BODY_FONT, REFERENCE_SIZE)
                .into_iter()
                .flatten()
                .collect();
            for line in &lines {
                let (next, _) = self.builder.ensure_space(cursor, REFERENCE_LINE_HEIGHT);
                cursor = next;
                if !line.is_empty() {
                    self.builder.push(DrawOp::Text {
                        x: config.margin_left,
                        y: cursor + BODY_FONT.ascender(REFERENCE_SIZE),
                        content: line.clone(),
                        font: BODY_FONT,
                        size: REFERENCE_SIZE,
                        color: Color::BLACK,
                    });
                }
                cursor += REFERENCE_LINE_HEIGHT;
            }
            cursor += REFERENCE_GAP;
        }
    }
}
