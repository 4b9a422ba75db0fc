use std::collections::BTreeMap;

use pipecanvas::{ArrowSide, CanvasConfig, NodeKind, Pipeline, RankOrders, compute_layout};

fn linear_pipeline() -> (Pipeline, RankOrders, CanvasConfig) {
    let mut pipeline = Pipeline::new();
    pipeline.ensure_node("start", NodeKind::StartEvent, None);
    pipeline.ensure_node("act", NodeKind::Activity, Some("Run job".to_string()));
    pipeline.ensure_node("end", NodeKind::EndEvent, None);
    pipeline.ensure_flow("f1", "start", "act");
    pipeline.ensure_flow("f2", "act", "end");

    let mut orders = RankOrders::new();
    orders.insert(0, vec!["start".to_string()]);
    orders.insert(1, vec!["act".to_string()]);
    orders.insert(2, vec!["end".to_string()]);

    let config = CanvasConfig {
        activity_size: (150.0, 42.0),
        event_size: (40.0, 40.0),
        gateway_size: (36.0, 36.0),
        start: (100.0, 100.0),
        canvas_width: 1000.0,
    };
    (pipeline, orders, config)
}

#[test]
fn linear_pipeline_end_to_end() {
    let (pipeline, orders, config) = linear_pipeline();
    let layout = compute_layout(&pipeline, &orders, &config, None).expect("layout failed");

    // shift_x = 150 * 1.2 = 180; events get a (42-40)/2 = 1px centering shift.
    assert_eq!((layout.locations["start"].x, layout.locations["start"].y), (100, 101));
    assert_eq!((layout.locations["act"].x, layout.locations["act"].y), (280, 100));
    assert_eq!((layout.locations["end"].x, layout.locations["end"].y), (460, 101));
    assert_eq!(layout.locations["start"].kind, "startpoint");
    assert_eq!(layout.locations["act"].name, "Run job");
    assert_eq!(layout.locations["act"].status, "");

    for id in ["f1", "f2"] {
        let line = &layout.lines[id];
        assert_eq!(line.source.arrow, ArrowSide::Right, "{id} source arrow");
        assert_eq!(line.target.arrow, ArrowSide::Left, "{id} target arrow");
        assert_eq!(line.midpoint, None, "{id} should not bend");
    }
}

#[test]
fn layout_is_deterministic() {
    let (pipeline, orders, config) = linear_pipeline();
    let first = compute_layout(&pipeline, &orders, &config, None).expect("layout failed");
    let second = compute_layout(&pipeline, &orders, &config, None).expect("layout failed");
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serialize failed"),
        serde_json::to_string(&second).expect("serialize failed"),
    );
}

#[test]
fn wire_shape_matches_canvas_expectations() {
    let (pipeline, orders, config) = linear_pipeline();
    let layout = compute_layout(&pipeline, &orders, &config, None).expect("layout failed");
    let value = serde_json::to_value(&layout).expect("serialize failed");

    let start = &value["locations"]["start"];
    assert_eq!(start["type"], "startpoint");
    assert_eq!(start["x"], 100);
    assert_eq!(start["y"], 101);
    assert_eq!(start["status"], "");

    let line = &value["lines"]["f1"];
    assert_eq!(line["source"]["arrow"], "Right");
    assert_eq!(line["target"]["id"], "act");
    assert!(
        line.as_object().is_some_and(|obj| !obj.contains_key("midpoint")),
        "midpoint key must be absent for straight flows"
    );
}

#[test]
fn wrapped_chain_bends_the_crossing_flow() {
    let mut pipeline = Pipeline::new();
    let mut orders = RankOrders::new();
    for (rank, id) in ["a", "b", "c", "d"].into_iter().enumerate() {
        pipeline.ensure_node(id, NodeKind::Activity, None);
        orders.insert(rank as i64, vec![id.to_string()]);
    }
    pipeline.ensure_flow("f1", "a", "b");
    pipeline.ensure_flow("f2", "b", "c");
    pipeline.ensure_flow("f3", "c", "d");

    let config = CanvasConfig {
        start: (100.0, 100.0),
        canvas_width: 400.0,
        ..CanvasConfig::default()
    };
    let layout = compute_layout(&pipeline, &orders, &config, None).expect("layout failed");

    // The chain wraps after rank 1: c restarts the left column one row down.
    assert_eq!((layout.locations["b"].x, layout.locations["b"].y), (280, 100));
    assert_eq!((layout.locations["c"].x, layout.locations["c"].y), (100, 200));

    // Only the flow that crosses the wrap boundary carries a bend ratio.
    let midpoint = layout.lines["f2"].midpoint.expect("wrap flow missing midpoint");
    assert!((midpoint - 0.58).abs() < 1e-9, "midpoint was {midpoint}");
    assert_eq!(layout.lines["f1"].midpoint, None);
    assert_eq!(layout.lines["f3"].midpoint, None);
}

#[test]
fn gateway_fan_out_and_merge() {
    let mut pipeline = Pipeline::new();
    pipeline.ensure_node("gw", NodeKind::ParallelGateway, None);
    pipeline.ensure_node("t1", NodeKind::Activity, None);
    pipeline.ensure_node("t2", NodeKind::Activity, None);
    pipeline.ensure_node("cg", NodeKind::ConvergeGateway, None);
    pipeline.ensure_flow("f1", "gw", "t1");
    pipeline.ensure_flow("f2", "gw", "t2");
    pipeline.ensure_flow("f3", "t1", "cg");
    pipeline.ensure_flow("f4", "t2", "cg");

    let mut orders = RankOrders::new();
    orders.insert(0, vec!["gw".to_string()]);
    orders.insert(1, vec!["t1".to_string(), "t2".to_string()]);
    orders.insert(2, vec!["cg".to_string()]);

    let config = CanvasConfig {
        start: (100.0, 100.0),
        canvas_width: 10_000.0,
        ..CanvasConfig::default()
    };
    let layout = compute_layout(&pipeline, &orders, &config, None).expect("layout failed");

    // Same-row flows stay horizontal regardless of glyph centering shifts.
    assert_eq!(layout.lines["f1"].source.arrow, ArrowSide::Right);
    assert_eq!(layout.lines["f1"].target.arrow, ArrowSide::Left);
    assert_eq!(layout.lines["f3"].source.arrow, ArrowSide::Right);
    assert_eq!(layout.lines["f3"].target.arrow, ArrowSide::Left);

    // The lower branch row sits below both gateways: fan-out then merge.
    assert_eq!(layout.lines["f2"].source.arrow, ArrowSide::Right);
    assert_eq!(layout.lines["f2"].target.arrow, ArrowSide::Bottom);
    assert_eq!(layout.lines["f4"].source.arrow, ArrowSide::Bottom);
    assert_eq!(layout.lines["f4"].target.arrow, ArrowSide::Left);
}

#[test]
fn extra_flows_receive_endpoint_metadata() {
    let (pipeline, orders, config) = linear_pipeline();
    let mut extra = BTreeMap::new();
    extra.insert(
        "loop".to_string(),
        pipecanvas::Flow {
            id: "loop".to_string(),
            source: "end".to_string(),
            target: "act".to_string(),
        },
    );
    let layout =
        compute_layout(&pipeline, &orders, &config, Some(&extra)).expect("layout failed");
    assert!(layout.lines.contains_key("loop"));
    assert_eq!(layout.lines.len(), 3);
    // Reverse flow on the same row.
    assert_eq!(layout.lines["loop"].source.arrow, ArrowSide::Left);
    assert_eq!(layout.lines["loop"].target.arrow, ArrowSide::Right);
}
