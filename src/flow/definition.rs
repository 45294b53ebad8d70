use super::{Edge, Node, TagSet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How execution of a flow is initiated. Firing the trigger is an execution
/// engine concern; the document only records which kind is armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerType {
    Webhook,
    Schedule,
    Manual,
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TriggerType::Webhook => "webhook",
            TriggerType::Schedule => "schedule",
            TriggerType::Manual => "manual",
        };
        write!(f, "{}", name)
    }
}

/// The canonical representation of one automation: a directed graph of typed
/// nodes connected by edges, versioned, with aggregate run statistics.
///
/// Nodes and edges are owned by the flow and have no existence outside it;
/// dropping the flow drops its graph. `nodes` keeps insertion order, which is
/// builder-canvas order, not execution order.
///
/// The `version` counter is the optimistic-concurrency token: every structural
/// mutation goes through [`Flow::bump_version`], and a persistence layer is
/// expected to reject saves whose base version no longer matches (see
/// [`crate::revision`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flow {
    /// Opaque identifier, immutable once created.
    pub id: String,
    /// Non-empty display name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub trigger_type: TriggerType,
    /// Gates whether the trigger is live.
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    /// Monotonically increasing; starts at 1.
    #[serde(default = "initial_version")]
    pub version: u64,
    #[serde(default)]
    pub tags: TagSet,
    /// Run counters, mutated exclusively by the execution engine through
    /// [`Flow::record_run`], never by the editing side.
    #[serde(default)]
    pub total_runs: u64,
    #[serde(default)]
    pub successful_runs: u64,
    #[serde(default)]
    pub failed_runs: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_run: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn initial_version() -> u64 {
    1
}

impl Flow {
    /// Create an empty flow at version 1 with fresh timestamps.
    pub fn new(id: impl Into<String>, name: impl Into<String>, trigger_type: TriggerType) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            trigger_type,
            is_active: false,
            nodes: Vec::new(),
            edges: Vec::new(),
            version: initial_version(),
            tags: TagSet::new(),
            total_runs: 0,
            successful_runs: 0,
            failed_runs: 0,
            last_run: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edges.push(edge);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag);
        self
    }

    pub fn activated(mut self) -> Self {
        self.is_active = true;
        self
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    pub fn get_edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Nodes an execution engine would actually run.
    pub fn enabled_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_enabled)
    }

    pub fn edges_from(&self, node_id: &str) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.source == node_id)
    }

    pub fn edges_to(&self, node_id: &str) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.target == node_id)
    }

    /// Record one finished run. Engine-side only: the editing UI never touches
    /// the counters, so this is the single place the counter invariant
    /// (`successful + failed <= total`) is maintained.
    pub fn record_run(&mut self, succeeded: bool, at: DateTime<Utc>) {
        self.total_runs += 1;
        if succeeded {
            self.successful_runs += 1;
        } else {
            self.failed_runs += 1;
        }
        self.last_run = Some(at);
    }

    /// Whether the run counters satisfy `successful + failed <= total`.
    /// Documents read from an external store may predate the invariant.
    pub fn run_counters_consistent(&self) -> bool {
        self.successful_runs + self.failed_runs <= self.total_runs
    }
}
