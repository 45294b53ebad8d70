//! Common test utilities for building flow documents.
use keiro::prelude::*;

#[allow(dead_code)]
pub fn trigger_node(id: &str) -> Node {
    Node::new(id, format!("{} trigger", id), NodeConfig::trigger())
}

#[allow(dead_code)]
pub fn action_node(id: &str) -> Node {
    Node::new(id, format!("{} action", id), NodeConfig::action())
}

#[allow(dead_code)]
pub fn condition_node(id: &str) -> Node {
    Node::new(id, format!("{} condition", id), NodeConfig::condition())
}

#[allow(dead_code)]
pub fn edge(id: &str, source: &str, target: &str) -> Edge {
    Edge::new(id, source, target)
}

/// A minimal well-formed flow: t1 -> a1 -> a2.
#[allow(dead_code)]
pub fn linear_flow() -> Flow {
    Flow::new("flow_linear", "Linear flow", TriggerType::Webhook)
        .with_node(trigger_node("t1"))
        .with_node(action_node("a1"))
        .with_node(action_node("a2"))
        .with_edge(edge("e1", "t1", "a1"))
        .with_edge(edge("e2", "a1", "a2"))
}

#[allow(dead_code)]
pub fn empty_catalog() -> IntegrationCatalog {
    IntegrationCatalog::new()
}
