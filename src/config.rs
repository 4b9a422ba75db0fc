use serde::{Deserialize, Serialize};

use crate::ir::NodeKind;

/// Sizing parameters for the canvas. Sizes are (width, height) pairs for the
/// three glyph families the editor draws; `start` anchors the first rank and
/// `canvas_width` bounds the horizontal extent before single-node chains wrap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanvasConfig {
    pub activity_size: (f64, f64),
    pub event_size: (f64, f64),
    pub gateway_size: (f64, f64),
    pub start: (f64, f64),
    pub canvas_width: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            activity_size: (150.0, 42.0),
            event_size: (40.0, 40.0),
            gateway_size: (36.0, 36.0),
            start: (20.0, 150.0),
            canvas_width: 1300.0,
        }
    }
}

impl CanvasConfig {
    /// Horizontal distance between consecutive ranks.
    pub fn shift_x(&self) -> f64 {
        self.activity_size
            .0
            .max(self.event_size.0)
            .max(self.gateway_size.0)
            * 1.2
    }

    /// Vertical distance between consecutive rows inside a rank.
    pub fn shift_y(&self) -> f64 {
        self.activity_size
            .1
            .max(self.event_size.1)
            .max(self.gateway_size.1)
            * 2.0
    }

    /// Vertical correction applied to a node so that event and gateway glyphs
    /// sit centered against the taller activity glyph's row.
    pub fn kind_shift_y(&self, kind: NodeKind) -> f64 {
        match kind {
            NodeKind::Activity | NodeKind::SubProcess | NodeKind::Dummy => 0.0,
            NodeKind::StartEvent | NodeKind::EndEvent => {
                (self.activity_size.1 - self.event_size.1) * 0.5
            }
            NodeKind::ExclusiveGateway | NodeKind::ParallelGateway | NodeKind::ConvergeGateway => {
                (self.activity_size.1 - self.gateway_size.1) * 0.5
            }
        }
    }
}
