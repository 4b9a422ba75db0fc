use std::collections::BTreeMap;

/// Node kinds understood by the layout engine. `Dummy` is the placeholder
/// kind the upstream ranking pass inserts for long edges; it occupies a rank
/// slot but is never rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NodeKind {
    Activity,
    SubProcess,
    StartEvent,
    EndEvent,
    ExclusiveGateway,
    ParallelGateway,
    ConvergeGateway,
    Dummy,
}

impl NodeKind {
    pub const ALL: [NodeKind; 8] = [
        Self::Activity,
        Self::SubProcess,
        Self::StartEvent,
        Self::EndEvent,
        Self::ExclusiveGateway,
        Self::ParallelGateway,
        Self::ConvergeGateway,
        Self::Dummy,
    ];

    /// Label used by the web canvas for this kind.
    pub fn render_label(self) -> &'static str {
        match self {
            Self::Activity => "tasknode",
            Self::SubProcess => "subflow",
            Self::StartEvent => "startpoint",
            Self::EndEvent => "endpoint",
            Self::ExclusiveGateway => "branchgateway",
            Self::ParallelGateway => "parallelgateway",
            Self::ConvergeGateway => "convergegateway",
            Self::Dummy => "dummynode",
        }
    }

    /// Inverse of [`render_label`](Self::render_label); total over the labels
    /// that function produces.
    pub fn from_render_label(label: &str) -> Option<Self> {
        match label {
            "tasknode" => Some(Self::Activity),
            "subflow" => Some(Self::SubProcess),
            "startpoint" => Some(Self::StartEvent),
            "endpoint" => Some(Self::EndEvent),
            "branchgateway" => Some(Self::ExclusiveGateway),
            "parallelgateway" => Some(Self::ParallelGateway),
            "convergegateway" => Some(Self::ConvergeGateway),
            "dummynode" => Some(Self::Dummy),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    pub name: String,
}

/// Directed flow between two nodes. Parallel flows between the same pair are
/// allowed; each carries its own id and is routed independently.
#[derive(Debug, Clone)]
pub struct Flow {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// Rank index -> node ids in that rank, left to right. Ranks are iterated
/// from the minimum key to the maximum key stepping by one; keys absent from
/// the map are empty rows that still consume horizontal space.
pub type RankOrders = BTreeMap<i64, Vec<String>>;

#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    pub nodes: BTreeMap<String, Node>,
    pub flows: BTreeMap<String, Flow>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ensure_node(&mut self, id: &str, kind: NodeKind, name: Option<String>) {
        let entry = self.nodes.entry(id.to_string()).or_insert(Node {
            id: id.to_string(),
            kind,
            name: id.to_string(),
        });
        entry.kind = kind;
        if let Some(name) = name {
            entry.name = name;
        }
    }

    pub fn ensure_flow(&mut self, id: &str, source: &str, target: &str) {
        self.flows.insert(
            id.to_string(),
            Flow {
                id: id.to_string(),
                source: source.to_string(),
                target: target.to_string(),
            },
        );
    }
}
