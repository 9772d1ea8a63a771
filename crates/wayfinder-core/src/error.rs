//! Error taxonomy for graph construction and search

use thiserror::Error;

/// Faults raised while building or querying a [`LabeledGraph`].
///
/// All three variants are caller errors: a failed operation leaves the graph
/// exactly as it was, and retrying the same call cannot succeed. An
/// unreachable goal is *not* an error: [`find_path`] reports it as
/// `Ok(None)`.
///
/// Vertices and labels are rendered through their `Display` impls so the
/// error type stays independent of the graph's type parameters.
///
/// [`LabeledGraph`]: crate::LabeledGraph
/// [`find_path`]: crate::find_path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex with the same identifier already exists.
    #[error("duplicate vertex: {0}")]
    DuplicateVertex(String),

    /// An edge with identical source, destination, and label already exists.
    #[error("duplicate edge: {src} -> {dst} [{label}]")]
    DuplicateEdge {
        src: String,
        dst: String,
        label: String,
    },

    /// The named vertex is not present in the graph.
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),
}
