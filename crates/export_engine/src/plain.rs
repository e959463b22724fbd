//! Plain export variant: single title line, bullet-styled tree body,
//! "Página {n}" footers
//!
//! The walker is one logical task: image fetches are awaited in strict
//! visitation order so the plan builder's page/cursor state advances
//! deterministically. The recursive future is boxed; the cursor is
//! threaded through as a plain return value.

use crate::style::plain::*;
use crate::{Color, DocumentPlan, DrawOp, FooterStyle, ImageFetcher, PlanBuilder, Result};
use futures::future::BoxFuture;
use layout_engine::{wrap, PageConfig};
use map_model::{MapNode, MindMap};

pub(crate) struct PlainExporter<'f> {
    fetcher: &'f ImageFetcher,
    builder: PlanBuilder,
}

impl<'f> PlainExporter<'f> {
    pub fn new(fetcher: &'f ImageFetcher) -> Self {
        Self {
            fetcher,
            builder: PlanBuilder::new(PageConfig::plain(), FooterStyle::PageLabel),
        }
    }

    pub async fn build(mut self, map: &MindMap) -> Result<DocumentPlan> {
        map.validate()?;

        let config = self.builder.config().clone();
        let mut cursor = config.content_top();

        let title_x = config.center_x() - TITLE_FONT.measure(TITLE, TITLE_SIZE) / 2.0;
        self.builder.push(DrawOp::Text {
            x: title_x,
            y: cursor + TITLE_FONT.ascender(TITLE_SIZE),
            content: TITLE.to_string(),
            font: TITLE_FONT,
            size: TITLE_SIZE,
            color: Color::BLACK,
        });
        cursor += TITLE_ADVANCE;

        self.render_node(map.root(), cursor, 0).await?;
        Ok(self.builder.finish())
    }

    /// Render one node and its subtree, returning the updated cursor.
    fn render_node<'a>(
        &'a mut self,
        node: &'a MapNode,
        cursor_y: f32,
        level: usize,
    ) -> BoxFuture<'a, Result<f32>> {
        Box::pin(async move {
            let config = self.builder.config().clone();
            let (font, size, line_height) = if node.kind.is_heading() {
                (HEADING_FONT, HEADING_SIZE, HEADING_LINE_HEIGHT)
            } else {
                (BODY_FONT, BODY_SIZE, LINE_HEIGHT)
            };
            let color = color(node.kind);
            let indent = level as f32 * INDENT_UNIT;
            let x_left = config.margin_left + indent;
            let available = config.indented_width(indent);

            let lines: Vec<String> = wrap(&node.text, available, font, size)
                .into_iter()
                .flatten()
                .collect();

            let mut cursor = cursor_y;
            for (index, line) in lines.iter().enumerate() {
                let (next, _) = self.builder.ensure_space(cursor, line_height);
                cursor = next;
                let baseline = cursor + font.ascender(size);
                let mut text_x = x_left;
                if index == 0 {
                    let glyph = bullet(node.kind);
                    self.builder.push(DrawOp::Text {
                        x: x_left,
                        y: baseline,
                        content: glyph.to_string(),
                        font,
                        size,
                        color,
                    });
                    text_x += font.measure(glyph, size) + BULLET_GAP;
                }
                if !line.is_empty() {
                    self.builder.push(DrawOp::Text {
                        x: text_x,
                        y: baseline,
                        content: line.clone(),
                        font,
                        size,
                        color,
                    });
                }
                cursor += line_height;
            }

            if let Some(url) = &node.image_url {
                let (next, _) = self.builder.ensure_space(cursor, IMAGE_BLOCK_RESERVE);
                cursor = next;
                if let Some(image) = self.fetcher.fetch(url).await {
                    let (width, height) = image.scaled_to_width(IMAGE_MAX_WIDTH.min(available));
                    self.builder.push(DrawOp::Image {
                        x: x_left + (available - width) / 2.0,
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
                    x: x_left,
                    y: cursor + CITATION_FONT.ascender(CITATION_SIZE),
                    content: format!("Fonte: {source}"),
                    font: CITATION_FONT,
                    size: CITATION_SIZE,
                    color: Color::GRAY,
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_engine::overflows;
    use map_model::NodeKind;

    async fn plan_for(map: &MindMap) -> DocumentPlan {
        let fetcher = ImageFetcher::new();
        PlainExporter::new(&fetcher).build(map).await.unwrap()
    }

    fn bullet_op_x(plan: &DocumentPlan, glyph: &str) -> f32 {
        plan.pages
            .iter()
            .flat_map(|p| p.ops.iter())
            .find_map(|op| match op {
                DrawOp::Text { x, content, .. } if content == glyph => Some(*x),
                _ => None,
            })
            .unwrap_or_else(|| panic!("no {glyph} op in plan"))
    }

    #[tokio::test]
    async fn two_level_tree_fits_one_page_with_expected_bullets() {
        let map = MindMap::new(
            MapNode::new(NodeKind::Main, "Tema")
                .with_child(MapNode::new(NodeKind::Data, "Fato A")),
        );
        let plan = plan_for(&map).await;

        assert_eq!(plan.page_count(), 1);
        let texts = plan.text_content();
        assert!(texts.contains(&"Tema"));
        assert!(texts.contains(&"Fato A"));

        let root_x = bullet_op_x(&plan, "★");
        let child_x = bullet_op_x(&plan, "•");
        assert!((child_x - root_x - INDENT_UNIT).abs() < 1e-3);
    }

    #[tokio::test]
    async fn drawn_texts_follow_preorder() {
        let map = MindMap::new(
            MapNode::new(NodeKind::Main, "Raiz")
                .with_child(
                    MapNode::new(NodeKind::History, "Primeiro")
                        .with_child(MapNode::new(NodeKind::Data, "Neto")),
                )
                .with_child(MapNode::new(NodeKind::Important, "Segundo")),
        );
        let plan = plan_for(&map).await;

        let node_texts: Vec<&str> = map.iter().map(|(_, n)| n.text.as_str()).collect();
        let drawn: Vec<&str> = plan
            .text_content()
            .into_iter()
            .filter(|t| node_texts.contains(t))
            .collect();
        assert_eq!(drawn, node_texts);
    }

    #[tokio::test]
    async fn same_tree_plans_identically_twice() {
        let map = MindMap::new(
            MapNode::new(NodeKind::Main, "Tema")
                .with_child(MapNode::new(NodeKind::Data, "Fato").with_source("https://x.example")),
        );
        let first = plan_for(&map).await;
        let second = plan_for(&map).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn long_text_breaks_into_minimum_pages_with_footers() {
        let text = "palavra repetida muitas vezes ".repeat(180);
        let text = text.trim_end().to_string();
        let map = MindMap::new(MapNode::new(NodeKind::Data, text.clone()));
        let plan = plan_for(&map).await;

        // Independent expectation from the same wrap and guard inputs
        let config = PageConfig::plain();
        let line_count: usize = wrap(&text, config.content_width(), BODY_FONT, BODY_SIZE)
            .into_iter()
            .flatten()
            .count();
        let mut expected_pages = 1;
        let mut cursor = config.content_top() + TITLE_ADVANCE;
        for _ in 0..line_count {
            if overflows(cursor, LINE_HEIGHT, &config) {
                expected_pages += 1;
                cursor = config.content_top();
            }
            cursor += LINE_HEIGHT;
        }
        assert!(expected_pages > 1, "scenario must overflow");
        assert_eq!(plan.page_count(), expected_pages);

        // Every page closes with its footer
        for (i, page) in plan.pages.iter().enumerate() {
            let last = page.texts().last().unwrap();
            assert_eq!(last, format!("Página {}", i + 1));
        }
    }

    #[tokio::test]
    async fn unreachable_image_is_skipped_without_error() {
        let map = MindMap::new(
            MapNode::new(NodeKind::Main, "Tema").with_child(
                MapNode::new(NodeKind::Data, "Com figura")
                    .with_image("http://127.0.0.1:9/nada.png"),
            ),
        );
        let plan = plan_for(&map).await;

        assert_eq!(plan.pages.iter().map(|p| p.image_count()).sum::<usize>(), 0);
        assert!(plan.text_content().contains(&"Com figura"));
    }
}
