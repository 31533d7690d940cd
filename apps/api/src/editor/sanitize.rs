//! Node sanitization: keeps every node inside the fixed square canvas with
//! sane visual properties, whatever the client or the model sent.

use uuid::Uuid;

use crate::editor::model::{
    default_extent, default_font_family, default_font_size, default_opacity, EditorSlide, Node,
    NodeFrame,
};

/// Canvas edge length in pixels.
pub const CANVAS_SIZE: f64 = 1080.0;

const MIN_EXTENT: f64 = 1.0;
const MIN_FONT_SIZE: f64 = 8.0;
const MAX_FONT_SIZE: f64 = 200.0;
const MAX_STROKE_WIDTH: f64 = 50.0;
const MIN_FONT_WEIGHT: u16 = 100;
const MAX_FONT_WEIGHT: u16 = 900;

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

fn sanitize_frame(frame: &mut NodeFrame) {
    if frame.id.trim().is_empty() {
        frame.id = Uuid::new_v4().to_string();
    }
    // The far edge must stay on the canvas too: origin leaves room for the
    // minimum extent, and the extent is cut to the space left after the origin.
    frame.x = finite_or(frame.x, 0.0).clamp(0.0, CANVAS_SIZE - MIN_EXTENT);
    frame.y = finite_or(frame.y, 0.0).clamp(0.0, CANVAS_SIZE - MIN_EXTENT);
    frame.width =
        finite_or(frame.width, default_extent()).clamp(MIN_EXTENT, CANVAS_SIZE - frame.x);
    frame.height =
        finite_or(frame.height, default_extent()).clamp(MIN_EXTENT, CANVAS_SIZE - frame.y);
    frame.rotation = finite_or(frame.rotation, 0.0).rem_euclid(360.0);
    frame.opacity = finite_or(frame.opacity, default_opacity()).clamp(0.0, 1.0);
    frame.z_index = frame.z_index.max(0);
}

/// Clamps a node into canvas bounds and normalizes its type-specific fields.
pub fn sanitize_node(mut node: Node) -> Node {
    sanitize_frame(node.frame_mut());

    match &mut node {
        Node::Text(text) => {
            text.font_size =
                finite_or(text.font_size, default_font_size()).clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
            text.font_weight = text.font_weight.clamp(MIN_FONT_WEIGHT, MAX_FONT_WEIGHT);
            if text.font_family.trim().is_empty() {
                text.font_family = default_font_family();
            }
        }
        Node::Shape(shape) => {
            shape.stroke_width = finite_or(shape.stroke_width, 0.0).clamp(0.0, MAX_STROKE_WIDTH);
        }
        Node::Image(_) | Node::Emoji(_) => {}
    }

    node
}

/// Sanitizes every node and orders them bottom-to-top by z-index.
/// Nodes sharing a z-index keep their relative order.
pub fn sanitize_slide(mut slide: EditorSlide) -> EditorSlide {
    slide.nodes = slide.nodes.into_iter().map(sanitize_node).collect();
    slide.nodes.sort_by_key(|n| n.frame().z_index);
    slide
}
