use thiserror::Error;

/// Layout is a pure computation over caller-supplied data, so every variant
/// here is an input or configuration bug rather than a transient condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("flow {flow} references node {node} with no computed location")]
    MissingEndpoint { flow: String, node: String },

    #[error("flow {flow} wraps rows with zero vertical delta")]
    DegenerateWrap { flow: String },

    #[error("location kind label {label:?} does not map to a node kind")]
    UnknownKindLabel { label: String },
}
