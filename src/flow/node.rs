use crate::error::FlowConversionError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The kind of step a node represents. Serialized in UPPERCASE on the wire
/// (`"TRIGGER"`, `"AI"`, ...), matching the platform's builder export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeKind {
    Trigger,
    Action,
    Condition,
    Delay,
    Ai,
    Webhook,
}

impl NodeKind {
    /// Kinds whose configuration is bound to a third-party integration and
    /// therefore subject to the catalog lookup during validation.
    pub fn requires_integration_lookup(&self) -> bool {
        matches!(
            self,
            NodeKind::Action | NodeKind::Condition | NodeKind::Webhook | NodeKind::Ai
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Trigger => "TRIGGER",
            NodeKind::Action => "ACTION",
            NodeKind::Condition => "CONDITION",
            NodeKind::Delay => "DELAY",
            NodeKind::Ai => "AI",
            NodeKind::Webhook => "WEBHOOK",
        };
        write!(f, "{}", name)
    }
}

/// Canvas coordinate of a node. Presentation-only: it never affects execution
/// semantics or validation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Configuration for a TRIGGER node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TriggerConfig {
    /// Cron expression for schedule-driven flows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    /// Webhook path for webhook-driven flows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(flatten)]
    pub extra: AHashMap<String, Value>,
}

/// Configuration for an ACTION node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActionConfig {
    /// Operation name within the bound integration (e.g. "create_contact").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(flatten)]
    pub extra: AHashMap<String, Value>,
}

/// Configuration for a CONDITION node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConditionConfig {
    /// Expression evaluated against the upstream node's output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(flatten)]
    pub extra: AHashMap<String, Value>,
}

/// Configuration for a DELAY node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DelayConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(flatten)]
    pub extra: AHashMap<String, Value>,
}

/// Configuration for an AI node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(flatten)]
    pub extra: AHashMap<String, Value>,
}

/// Configuration for a WEBHOOK node (outbound call).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WebhookConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(flatten)]
    pub extra: AHashMap<String, Value>,
}

/// Node configuration as a tagged variant keyed by node kind.
///
/// Each variant carries its own strongly-typed configuration struct, with a
/// flattened `extra` map as the escape hatch for integration-specific fields
/// not yet modeled. The variant also pins down the node's kind: a node cannot
/// carry a DELAY configuration while claiming to be an ACTION.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeConfig {
    Trigger(TriggerConfig),
    Action(ActionConfig),
    Condition(ConditionConfig),
    Delay(DelayConfig),
    Ai(AiConfig),
    Webhook(WebhookConfig),
}

impl NodeConfig {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeConfig::Trigger(_) => NodeKind::Trigger,
            NodeConfig::Action(_) => NodeKind::Action,
            NodeConfig::Condition(_) => NodeKind::Condition,
            NodeConfig::Delay(_) => NodeKind::Delay,
            NodeConfig::Ai(_) => NodeKind::Ai,
            NodeConfig::Webhook(_) => NodeKind::Webhook,
        }
    }

    /// An empty configuration of the given kind.
    pub fn empty(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Trigger => NodeConfig::Trigger(TriggerConfig::default()),
            NodeKind::Action => NodeConfig::Action(ActionConfig::default()),
            NodeKind::Condition => NodeConfig::Condition(ConditionConfig::default()),
            NodeKind::Delay => NodeConfig::Delay(DelayConfig::default()),
            NodeKind::Ai => NodeConfig::Ai(AiConfig::default()),
            NodeKind::Webhook => NodeConfig::Webhook(WebhookConfig::default()),
        }
    }

    pub fn trigger() -> Self {
        Self::empty(NodeKind::Trigger)
    }

    pub fn action() -> Self {
        Self::empty(NodeKind::Action)
    }

    pub fn condition() -> Self {
        Self::empty(NodeKind::Condition)
    }

    pub fn delay() -> Self {
        Self::empty(NodeKind::Delay)
    }

    pub fn ai() -> Self {
        Self::empty(NodeKind::Ai)
    }

    pub fn webhook() -> Self {
        Self::empty(NodeKind::Webhook)
    }

    /// Reassemble a typed configuration from the wire's `type` + `config` pair.
    fn from_wire(kind: NodeKind, config: Value) -> Result<Self, FlowConversionError> {
        // An absent config on the wire means "no configuration yet".
        let config = match config {
            Value::Null => Value::Object(serde_json::Map::new()),
            other => other,
        };
        let parsed = match kind {
            NodeKind::Trigger => serde_json::from_value(config).map(NodeConfig::Trigger),
            NodeKind::Action => serde_json::from_value(config).map(NodeConfig::Action),
            NodeKind::Condition => serde_json::from_value(config).map(NodeConfig::Condition),
            NodeKind::Delay => serde_json::from_value(config).map(NodeConfig::Delay),
            NodeKind::Ai => serde_json::from_value(config).map(NodeConfig::Ai),
            NodeKind::Webhook => serde_json::from_value(config).map(NodeConfig::Webhook),
        };
        parsed.map_err(|e| {
            FlowConversionError::InvalidDocument(format!("{} node config: {}", kind, e))
        })
    }

    fn to_wire(&self) -> Value {
        let encoded = match self {
            NodeConfig::Trigger(c) => serde_json::to_value(c),
            NodeConfig::Action(c) => serde_json::to_value(c),
            NodeConfig::Condition(c) => serde_json::to_value(c),
            NodeConfig::Delay(c) => serde_json::to_value(c),
            NodeConfig::Ai(c) => serde_json::to_value(c),
            NodeConfig::Webhook(c) => serde_json::to_value(c),
        };
        // String-keyed structs cannot fail to serialize.
        encoded.unwrap_or(Value::Null)
    }
}

/// One step in a flow's graph.
///
/// The wire format splits kind and configuration into sibling `type` and
/// `config` keys; in memory they live together in [`NodeConfig`] so the type
/// system keeps them consistent. The split is reconstructed at the
/// serialization boundary via [`NodeWire`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NodeWire", into = "NodeWire")]
pub struct Node {
    /// Unique within the owning flow.
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub config: NodeConfig,
    pub position: Position,
    /// Weak reference into the host's integration catalog; lookup-only.
    pub integration_id: Option<String>,
    /// Disabled nodes are skipped by an execution engine but stay in the graph.
    pub is_enabled: bool,
}

impl Node {
    pub fn new(id: impl Into<String>, name: impl Into<String>, config: NodeConfig) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            config,
            position: Position::default(),
            integration_id: None,
            is_enabled: true,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.config.kind()
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_integration(mut self, integration_id: impl Into<String>) -> Self {
        self.integration_id = Some(integration_id.into());
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Position { x, y };
        self
    }

    pub fn disabled(mut self) -> Self {
        self.is_enabled = false;
        self
    }
}

/// The node as it appears on the wire: camelCase keys, kind under `type`,
/// untyped `config` object.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NodeWire {
    id: String,
    #[serde(rename = "type")]
    kind: NodeKind,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    config: Value,
    #[serde(default)]
    position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    integration_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_enabled: Option<bool>,
}

impl TryFrom<NodeWire> for Node {
    type Error = FlowConversionError;

    fn try_from(wire: NodeWire) -> Result<Self, Self::Error> {
        let config = NodeConfig::from_wire(wire.kind, wire.config)?;
        Ok(Node {
            id: wire.id,
            name: wire.name,
            description: wire.description,
            config,
            position: wire.position,
            integration_id: wire.integration_id,
            is_enabled: wire.is_enabled.unwrap_or(true),
        })
    }
}

impl From<Node> for NodeWire {
    fn from(node: Node) -> Self {
        NodeWire {
            id: node.id,
            kind: node.config.kind(),
            name: node.name,
            description: node.description,
            config: node.config.to_wire(),
            position: node.position,
            integration_id: node.integration_id,
            is_enabled: Some(node.is_enabled),
        }
    }
}
