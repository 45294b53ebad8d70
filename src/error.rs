use thiserror::Error;

/// Structural violations found while validating a flow document.
///
/// Each variant carries the offending node/edge ids so a hosting UI can render
/// every problem as a distinct, actionable message. These are always returned
/// as values, never panicked: a malformed graph is user input, not a bug.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("duplicate node id '{node_id}'")]
    DuplicateNodeId { node_id: String },

    #[error("edge '{edge_id}' references missing node '{node_id}'")]
    DanglingEdge { edge_id: String, node_id: String },

    #[error(
        "expected exactly one TRIGGER node, found {}: [{}]",
        .trigger_ids.len(),
        .trigger_ids.join(", ")
    )]
    MissingOrMultipleTrigger { trigger_ids: Vec<String> },

    #[error("cycle detected: {}", .path.join(" -> "))]
    CycleDetected { path: Vec<String> },

    #[error("node '{node_id}' references unknown integration '{integration_id}'")]
    UnknownIntegration {
        node_id: String,
        integration_id: String,
    },
}

/// The bare error taxonomy, useful for dispatching UI treatment per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    DuplicateNodeId,
    DanglingEdge,
    MissingOrMultipleTrigger,
    CycleDetected,
    UnknownIntegration,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::DuplicateNodeId { .. } => ValidationErrorKind::DuplicateNodeId,
            Self::DanglingEdge { .. } => ValidationErrorKind::DanglingEdge,
            Self::MissingOrMultipleTrigger { .. } => ValidationErrorKind::MissingOrMultipleTrigger,
            Self::CycleDetected { .. } => ValidationErrorKind::CycleDetected,
            Self::UnknownIntegration { .. } => ValidationErrorKind::UnknownIntegration,
        }
    }
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::DuplicateNodeId => "DuplicateNodeId",
            Self::DanglingEdge => "DanglingEdge",
            Self::MissingOrMultipleTrigger => "MissingOrMultipleTrigger",
            Self::CycleDetected => "CycleDetected",
            Self::UnknownIntegration => "UnknownIntegration",
        };
        write!(f, "{}", name)
    }
}

/// Errors that can occur when decoding the JSON-encoded string form of a tag set.
#[derive(Error, Debug, Clone)]
pub enum TagCodecError {
    #[error("Tag string is not a JSON array of strings: {0}")]
    InvalidEncoding(String),
}

/// Errors that can occur when converting a custom user format into a keiro `Flow`.
#[derive(Error, Debug, Clone)]
pub enum FlowConversionError {
    #[error("Invalid source document: {0}")]
    InvalidDocument(String),
}

/// Errors that can occur while persisting or loading a validated flow snapshot.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("Could not access artifact '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Snapshot serialization failed: {0}")]
    Encode(String),

    #[error("Snapshot deserialization failed: {0}")]
    Decode(String),
}

/// A stale save was rejected by the optimistic-concurrency check.
///
/// The caller is expected to re-fetch the stored flow, re-apply its edit on
/// top of the current version, and try again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "flow '{flow_id}' has moved on: save is based on version {base_version}, but version {stored_version} is current"
)]
pub struct RevisionConflict {
    pub flow_id: String,
    pub stored_version: u64,
    pub base_version: u64,
}
