use super::{IntegrationCatalog, ValidatedFlow};
use crate::error::ValidationError;
use crate::flow::{Flow, NodeKind};
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;

/// Accumulating structural validator for flow documents.
///
/// All checks run regardless of earlier failures, so a builder UI can surface
/// every problem in one pass instead of fixing them one save attempt at a
/// time. The validator is pure: no I/O, no shared state, safe to call from any
/// number of threads.
pub struct FlowValidator {
    errors: Vec<ValidationError>,
}

impl FlowValidator {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Validate a candidate flow document.
    ///
    /// On success the flow comes back wrapped as a [`ValidatedFlow`], the
    /// contract an execution engine consumes without re-checking integrity.
    /// On failure, every violation found is returned.
    pub fn validate(
        mut self,
        flow: Flow,
        catalog: &IntegrationCatalog,
    ) -> Result<ValidatedFlow, Vec<ValidationError>> {
        self.check_duplicate_node_ids(&flow);
        self.check_edge_references(&flow);
        self.check_trigger_entry(&flow);
        self.check_cycles(&flow);
        self.check_integrations(&flow, catalog);

        if self.errors.is_empty() {
            Ok(ValidatedFlow::assume_checked(flow))
        } else {
            Err(self.errors)
        }
    }

    fn check_duplicate_node_ids(&mut self, flow: &Flow) {
        for node_id in flow.node_ids().duplicates() {
            self.errors.push(ValidationError::DuplicateNodeId {
                node_id: node_id.to_string(),
            });
        }
    }

    fn check_edge_references(&mut self, flow: &Flow) {
        let known: AHashSet<&str> = flow.node_ids().collect();
        for edge in &flow.edges {
            for endpoint in [edge.source.as_str(), edge.target.as_str()] {
                if !known.contains(endpoint) {
                    self.errors.push(ValidationError::DanglingEdge {
                        edge_id: edge.id.clone(),
                        node_id: endpoint.to_string(),
                    });
                }
            }
        }
    }

    fn check_trigger_entry(&mut self, flow: &Flow) {
        let trigger_ids = trigger_ids(flow);
        if trigger_ids.len() != 1 {
            self.errors
                .push(ValidationError::MissingOrMultipleTrigger { trigger_ids });
        }
    }

    /// Depth-first traversal from the trigger with a recursion-stack set; a
    /// node revisited while still on the stack signals a cycle. Only runs when
    /// the graph has an unambiguous entry point, and ignores edges whose
    /// endpoints were already reported dangling.
    fn check_cycles(&mut self, flow: &Flow) {
        let triggers = trigger_ids(flow);
        if triggers.len() != 1 {
            return;
        }
        let entry = triggers[0].as_str();

        let known: AHashSet<&str> = flow.node_ids().collect();
        let mut adjacency: AHashMap<&str, Vec<&str>> = AHashMap::new();
        for edge in &flow.edges {
            if known.contains(edge.source.as_str()) && known.contains(edge.target.as_str()) {
                adjacency
                    .entry(edge.source.as_str())
                    .or_default()
                    .push(edge.target.as_str());
            }
        }

        let mut visited = AHashSet::new();
        let mut on_stack = AHashSet::new();
        let mut stack = Vec::new();
        self.walk(entry, &adjacency, &mut visited, &mut on_stack, &mut stack);
    }

    fn walk<'a>(
        &mut self,
        node: &'a str,
        adjacency: &AHashMap<&'a str, Vec<&'a str>>,
        visited: &mut AHashSet<&'a str>,
        on_stack: &mut AHashSet<&'a str>,
        stack: &mut Vec<&'a str>,
    ) {
        visited.insert(node);
        on_stack.insert(node);
        stack.push(node);

        if let Some(successors) = adjacency.get(node) {
            for &next in successors {
                if on_stack.contains(next) {
                    // Close the loop: path from the revisited node to here.
                    let start = stack.iter().position(|&n| n == next).unwrap_or(0);
                    let mut path: Vec<String> =
                        stack[start..].iter().map(|n| n.to_string()).collect();
                    path.push(next.to_string());
                    self.errors.push(ValidationError::CycleDetected { path });
                } else if !visited.contains(next) {
                    self.walk(next, adjacency, visited, on_stack, stack);
                }
            }
        }

        stack.pop();
        on_stack.remove(node);
    }

    fn check_integrations(&mut self, flow: &Flow, catalog: &IntegrationCatalog) {
        for node in &flow.nodes {
            if !node.kind().requires_integration_lookup() {
                continue;
            }
            if let Some(integration_id) = &node.integration_id {
                if !catalog.contains(integration_id) {
                    self.errors.push(ValidationError::UnknownIntegration {
                        node_id: node.id.clone(),
                        integration_id: integration_id.clone(),
                    });
                }
            }
        }
    }
}

impl Default for FlowValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn trigger_ids(flow: &Flow) -> Vec<String> {
    flow.nodes
        .iter()
        .filter(|n| n.kind() == NodeKind::Trigger)
        .map(|n| n.id.clone())
        .collect()
}
