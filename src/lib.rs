pub mod config;
pub mod ir;
pub mod layout;

pub use config::CanvasConfig;
pub use ir::{Flow, Node, NodeKind, Pipeline, RankOrders};
pub use layout::{
    ArrowSide, CanvasLayout, LayoutError, Line, LineEndpoint, Location, compute_layout,
};
