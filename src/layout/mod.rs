mod error;
mod placement;
mod routing;
pub(crate) mod types;

pub use error::LayoutError;
pub use types::*;

use std::collections::BTreeMap;

use placement::place_nodes;
use routing::route_flows;

use crate::config::CanvasConfig;
use crate::ir::{Flow, Pipeline, RankOrders};

/// Lays out a ranked pipeline for the canvas: node placement first, then edge
/// routing over the placed coordinates.
///
/// `extra_flows` carries flows that are not part of the pipeline itself but
/// still need endpoint metadata, such as back-edges the upstream drawing pass
/// reversed or long edges it replaced. On id collision the extra entry wins.
pub fn compute_layout(
    pipeline: &Pipeline,
    orders: &RankOrders,
    config: &CanvasConfig,
    extra_flows: Option<&BTreeMap<String, Flow>>,
) -> Result<CanvasLayout, LayoutError> {
    let locations = place_nodes(pipeline, orders, config);

    let mut flows = pipeline.flows.clone();
    if let Some(extra) = extra_flows {
        for (id, flow) in extra {
            flows.insert(id.clone(), flow.clone());
        }
    }
    let lines = route_flows(&flows, &locations, config)?;

    Ok(CanvasLayout { locations, lines })
}
