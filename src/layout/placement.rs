use std::collections::BTreeMap;

use crate::config::CanvasConfig;
use crate::ir::{Pipeline, RankOrders};

use super::types::Location;

/// Assigns canvas coordinates to every ranked node. Ranks advance left to
/// right; rows inside a rank stack top to bottom. Long single-node chains
/// wrap back to the start column once they pass the canvas width.
pub(super) fn place_nodes(
    pipeline: &Pipeline,
    orders: &RankOrders,
    config: &CanvasConfig,
) -> BTreeMap<String, Location> {
    let mut locations = BTreeMap::new();
    let (Some(&min_rank), Some(&max_rank)) = (orders.keys().next(), orders.keys().next_back())
    else {
        return locations;
    };

    let shift_x = config.shift_x();
    let shift_y = config.shift_y();
    let (mut rank_x, mut rank_y) = config.start;
    // Row-bottom candidates accumulated since the last wrap; the wrap target
    // row is placed below the deepest of them.
    let mut row_bottoms: Vec<f64> = Vec::new();

    for rank in min_rank..=max_rank {
        let row = orders.get(&rank).map(Vec::as_slice).unwrap_or(&[]);
        let order_x = rank_x;
        let mut order_y = rank_y;
        for node_id in row {
            if let Some(node) = pipeline.nodes.get(node_id) {
                locations.insert(
                    node.id.clone(),
                    Location {
                        id: node.id.clone(),
                        kind: node.kind.render_label().to_string(),
                        name: node.name.clone(),
                        status: String::new(),
                        x: order_x.round() as i64,
                        y: (order_y + config.kind_shift_y(node.kind)).round() as i64,
                    },
                );
            }
            // Ids missing from the pipeline are upstream placeholders; they
            // still consume a row so later ranks line up.
            order_y += shift_y;
        }
        row_bottoms.push(order_y - shift_y);
        rank_x += shift_x;

        // Wrap only past the canvas width, never mid-branch, and never right
        // before the terminal rank.
        if rank_x > config.canvas_width && row.len() == 1 && rank < max_rank - 1 {
            rank_x = config.start.0;
            rank_y += row_bottoms.iter().copied().fold(f64::MIN, f64::max);
            row_bottoms.clear();
        }
    }

    locations
}
