use serde::{Deserialize, Serialize};

/// A directed connection between two nodes in the same flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Unique within the owning flow.
    pub id: String,
    /// Id of the upstream node.
    pub source: String,
    /// Id of the downstream node.
    pub target: String,
    /// Optional gate expression, evaluated by the execution engine against the
    /// upstream node's output. Opaque to validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            condition: None,
        }
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}
