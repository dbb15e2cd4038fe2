//! Error types for diagram construction.

use thiserror::Error;

/// Errors raised while declaring a diagram graph.
///
/// Construction is fail-fast: the first invalid declaration aborts the
/// diagram rather than silently dropping the offending element.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Duplicate node id '{id}' in diagram '{diagram}'")]
    DuplicateNode { diagram: String, id: String },

    #[error("Edge references undeclared node '{id}' in diagram '{diagram}'")]
    UnresolvedReference { diagram: String, id: String },

    #[error("Unknown cluster id '{id}' in diagram '{diagram}'")]
    UnknownCluster { diagram: String, id: String },

    #[error("Diagram '{diagram}' declares no nodes")]
    EmptyDiagram { diagram: String },
}
