use std::collections::BTreeMap;

use crate::config::CanvasConfig;
use crate::ir::{Flow, NodeKind};

use super::error::LayoutError;
use super::types::{ArrowSide, Line, LineEndpoint, Location};

/// Computes endpoint metadata for every flow. Placement must have finished
/// first; every endpoint id must resolve to a Location.
pub(super) fn route_flows(
    flows: &BTreeMap<String, Flow>,
    locations: &BTreeMap<String, Location>,
    config: &CanvasConfig,
) -> Result<BTreeMap<String, Line>, LayoutError> {
    let start_x = config.start.0.round() as i64;
    let shift_y = config.shift_y();
    let mut lines = BTreeMap::new();

    for (flow_id, flow) in flows {
        let source = endpoint_location(locations, flow_id, &flow.source)?;
        let target = endpoint_location(locations, flow_id, &flow.target)?;

        let (source_arrow, target_arrow) = arrow_flow(source, target, config)?;
        let mut line = Line {
            id: flow_id.clone(),
            source: LineEndpoint {
                arrow: source_arrow,
                id: flow.source.clone(),
            },
            target: LineEndpoint {
                arrow: target_arrow,
                id: flow.target.clone(),
            },
            midpoint: None,
        };

        // A target sitting in the start column means the flow crosses a
        // row-wrap boundary; the bend ratio keeps the folded segment half a
        // row above the wrapped run.
        if target.x == start_x {
            let dy = (target.y - source.y) as f64;
            if dy == 0.0 {
                return Err(LayoutError::DegenerateWrap {
                    flow: flow_id.clone(),
                });
            }
            line.midpoint = Some(1.0 - shift_y * 0.5 / dy);
        }

        lines.insert(flow_id.clone(), line);
    }

    Ok(lines)
}

fn endpoint_location<'a>(
    locations: &'a BTreeMap<String, Location>,
    flow_id: &str,
    node_id: &str,
) -> Result<&'a Location, LayoutError> {
    locations.get(node_id).ok_or_else(|| LayoutError::MissingEndpoint {
        flow: flow_id.to_string(),
        node: node_id.to_string(),
    })
}

/// Picks the glyph sides a flow's connector leaves from and arrives at, based
/// on where the endpoints sit relative to each other. The comparison uses the
/// anchor position with the per-kind centering correction removed.
fn arrow_flow(
    source: &Location,
    target: &Location,
    config: &CanvasConfig,
) -> Result<(ArrowSide, ArrowSide), LayoutError> {
    let dx = (target.x - source.x) as f64;
    let dy = corrected_y(target, config)? - corrected_y(source, config)?;
    Ok(arrow_sides(dx, dy))
}

fn corrected_y(location: &Location, config: &CanvasConfig) -> Result<f64, LayoutError> {
    let kind = NodeKind::from_render_label(&location.kind).ok_or_else(|| {
        LayoutError::UnknownKindLabel {
            label: location.kind.clone(),
        }
    })?;
    Ok(location.y as f64 - config.kind_shift_y(kind))
}

fn arrow_sides(dx: f64, dy: f64) -> (ArrowSide, ArrowSide) {
    if dx > 0.0 {
        if dy < 0.0 {
            // Fan-out at the head of a branch.
            (ArrowSide::Bottom, ArrowSide::Left)
        } else if dy > 0.0 {
            // Branches converging on a merge point.
            (ArrowSide::Right, ArrowSide::Bottom)
        } else {
            // Plain sequential flow.
            (ArrowSide::Right, ArrowSide::Left)
        }
    } else if dx < 0.0 {
        if dy < 0.0 {
            // Continuation across a row wrap.
            (ArrowSide::Right, ArrowSide::Left)
        } else if dy > 0.0 {
            // Loop back to an earlier node.
            (ArrowSide::Left, ArrowSide::Bottom)
        } else {
            (ArrowSide::Left, ArrowSide::Right)
        }
    } else if dy < 0.0 {
        (ArrowSide::Bottom, ArrowSide::Top)
    } else if dy > 0.0 {
        (ArrowSide::Top, ArrowSide::Bottom)
    } else {
        // Self loop; real pipelines never produce one, kept as a fallback.
        (ArrowSide::Right, ArrowSide::Bottom)
    }
}
