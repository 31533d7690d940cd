//! Editor slide and node types, in the JSON shape the canvas front-end exchanges.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::generation::input::Theme;

/// Position, size and state shared by every node kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeFrame {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default = "default_extent")]
    pub width: f64,
    #[serde(default = "default_extent")]
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub z_index: i32,
    #[serde(default)]
    pub locked: bool,
}

pub(crate) fn default_extent() -> f64 {
    100.0
}

pub(crate) fn default_opacity() -> f64 {
    1.0
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    #[serde(flatten)]
    pub frame: NodeFrame,
    pub text: String,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_font_weight")]
    pub font_weight: u16,
    #[serde(default)]
    pub fill: String,
    #[serde(default)]
    pub align: TextAlign,
}

pub(crate) fn default_font_family() -> String {
    "Inter".to_string()
}

pub(crate) fn default_font_size() -> f64 {
    48.0
}

fn default_font_weight() -> u16 {
    400
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageNode {
    #[serde(flatten)]
    pub frame: NodeFrame,
    /// Data URI or http(s) URL.
    pub src: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiNode {
    #[serde(flatten)]
    pub frame: NodeFrame,
    pub emoji: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Rect,
    Circle,
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeNode {
    #[serde(flatten)]
    pub frame: NodeFrame,
    #[serde(default)]
    pub shape: ShapeKind,
    #[serde(default)]
    pub fill: String,
    #[serde(default)]
    pub stroke: String,
    #[serde(default)]
    pub stroke_width: f64,
}

/// A single object on the slide canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Text(TextNode),
    Image(ImageNode),
    Emoji(EmojiNode),
    Shape(ShapeNode),
}

impl Node {
    pub fn frame(&self) -> &NodeFrame {
        match self {
            Node::Text(n) => &n.frame,
            Node::Image(n) => &n.frame,
            Node::Emoji(n) => &n.frame,
            Node::Shape(n) => &n.frame,
        }
    }

    pub fn frame_mut(&mut self) -> &mut NodeFrame {
        match self {
            Node::Text(n) => &mut n.frame,
            Node::Image(n) => &mut n.frame,
            Node::Emoji(n) => &mut n.frame,
            Node::Shape(n) => &mut n.frame,
        }
    }
}

/// A slide as edited on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSlide {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub template_image: Option<String>,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_node_round_trips_through_canvas_json() {
        let raw = json!({
            "type": "text",
            "id": "n1",
            "x": 10, "y": 20, "width": 300, "height": 80,
            "rotation": 0, "opacity": 0.9, "zIndex": 2, "locked": false,
            "text": "Hola",
            "fontFamily": "Inter", "fontSize": 40, "fontWeight": 700,
            "fill": "#111827", "align": "center"
        });

        let node: Node = serde_json::from_value(raw.clone()).unwrap();

        match &node {
            Node::Text(t) => {
                assert_eq!(t.text, "Hola");
                assert_eq!(t.frame.z_index, 2);
                assert_eq!(t.align, TextAlign::Center);
            }
            other => panic!("expected text node, got {other:?}"),
        }
        let back = serde_json::to_value(&node).unwrap();
        assert_eq!(back["type"], "text");
        assert_eq!(back["zIndex"], 2);
        assert_eq!(back["fontSize"], 40.0);
    }

    #[test]
    fn test_missing_frame_fields_take_defaults() {
        let node: Node = serde_json::from_value(json!({"type": "emoji", "emoji": "🚀"})).unwrap();
        let frame = node.frame();
        assert_eq!(frame.width, 100.0);
        assert_eq!(frame.opacity, 1.0);
        assert!(!frame.locked);
    }

    #[test]
    fn test_unknown_node_type_is_rejected() {
        let result: Result<Node, _> = serde_json::from_value(json!({"type": "video", "src": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_shape_kind_parses() {
        let node: Node = serde_json::from_value(json!({
            "type": "shape", "shape": "circle", "fill": "#fff", "strokeWidth": 2
        }))
        .unwrap();
        match node {
            Node::Shape(s) => {
                assert_eq!(s.shape, ShapeKind::Circle);
                assert_eq!(s.stroke_width, 2.0);
            }
            other => panic!("expected shape node, got {other:?}"),
        }
    }
}
