use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Side of a node glyph a connector attaches to, serialized with the
/// capitalized names the web canvas expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArrowSide {
    Left,
    Right,
    Top,
    Bottom,
}

/// Placed node: grid-snapped canvas coordinates plus the render metadata the
/// editor shows. `status` is always empty at layout time; the editor fills it
/// in as the pipeline executes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub status: String,
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineEndpoint {
    pub arrow: ArrowSide,
    pub id: String,
}

/// Routed flow. `midpoint` is the bend ratio set only for flows that cross a
/// row-wrap boundary; it tells the renderer where along the segment to fold
/// the polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub id: String,
    pub source: LineEndpoint,
    pub target: LineEndpoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midpoint: Option<f64>,
}

/// Complete layout of one pipeline, rebuilt from scratch on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasLayout {
    pub locations: BTreeMap<String, Location>,
    pub lines: BTreeMap<String, Line>,
}
