//! Turns a generated slide into editable canvas nodes.

use crate::editor::model::{Node, NodeFrame, ShapeKind, ShapeNode, TextAlign, TextNode};
use crate::editor::sanitize::{sanitize_node, CANVAS_SIZE};
use crate::generation::input::Theme;
use crate::generation::result::Slide;

const MARGIN: f64 = 96.0;
const TITLE_TOP: f64 = 160.0;
const TITLE_HEIGHT: f64 = 220.0;
const BULLETS_TOP: f64 = 420.0;
const BOTTOM_RESERVE: f64 = 120.0;
const TITLE_FONT: f64 = 64.0;
const BULLET_FONT: f64 = 34.0;
const MAX_BULLET_ROW: f64 = 120.0;

fn text_colour(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "#111827",
        Theme::Dark => "#f8fafc",
    }
}

fn frame(id: String, x: f64, y: f64, width: f64, height: f64, z_index: i32) -> NodeFrame {
    NodeFrame {
        id,
        x,
        y,
        width,
        height,
        rotation: 0.0,
        opacity: 1.0,
        z_index,
        locked: false,
    }
}

/// Lays out an accent bar, the title, and one text node per bullet.
///
/// Node ids are derived from `slide_id` so re-laying out the same slide yields
/// the same ids.
pub fn nodes_from_slide(slide_id: &str, slide: &Slide, theme: Theme, accent: &str) -> Vec<Node> {
    let content_width = CANVAS_SIZE - 2.0 * MARGIN;
    let mut nodes = Vec::with_capacity(slide.bullets.len() + 2);

    nodes.push(Node::Shape(ShapeNode {
        frame: frame(format!("{slide_id}-accent"), MARGIN, TITLE_TOP - 40.0, 120.0, 12.0, 0),
        shape: ShapeKind::Rect,
        fill: accent.to_string(),
        stroke: String::new(),
        stroke_width: 0.0,
    }));

    nodes.push(Node::Text(TextNode {
        frame: frame(
            format!("{slide_id}-title"),
            MARGIN,
            TITLE_TOP,
            content_width,
            TITLE_HEIGHT,
            1,
        ),
        text: slide.title.clone(),
        font_family: "Inter".to_string(),
        font_size: TITLE_FONT,
        font_weight: 800,
        fill: text_colour(theme).to_string(),
        align: TextAlign::Left,
    }));

    if !slide.bullets.is_empty() {
        let available = CANVAS_SIZE - BULLETS_TOP - BOTTOM_RESERVE;
        let row = (available / slide.bullets.len() as f64).min(MAX_BULLET_ROW);

        for (i, bullet) in slide.bullets.iter().enumerate() {
            nodes.push(Node::Text(TextNode {
                frame: frame(
                    format!("{slide_id}-bullet-{i}"),
                    MARGIN,
                    BULLETS_TOP + row * i as f64,
                    content_width,
                    row,
                    2,
                ),
                text: format!("• {bullet}"),
                font_family: "Inter".to_string(),
                font_size: BULLET_FONT,
                font_weight: 400,
                fill: text_colour(theme).to_string(),
                align: TextAlign::Left,
            }));
        }
    }

    nodes.into_iter().map(sanitize_node).collect()
}
