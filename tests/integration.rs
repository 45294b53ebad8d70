//! End-to-end tests: wire parsing, validation, snapshots, and concurrency.
mod common;
use common::*;
use keiro::error::FlowConversionError;
use keiro::prelude::*;
use keiro::revision::ensure_current;

/// A full builder export as the platform stores it: camelCase keys, kind under
/// `type`, and tags in the legacy JSON-encoded string form.
const LEAD_SYNC_DOC: &str = r#"{
    "id": "flow_42",
    "name": "Lead sync",
    "description": "Push new leads into the CRM",
    "triggerType": "webhook",
    "isActive": true,
    "nodes": [
        {
            "id": "t1",
            "type": "TRIGGER",
            "name": "Incoming lead",
            "config": { "path": "/hooks/leads" }
        },
        {
            "id": "a1",
            "type": "ACTION",
            "name": "Create contact",
            "config": {
                "operation": "create_contact",
                "fields": { "email": "{{lead.email}}" }
            },
            "integrationId": "crm",
            "position": { "x": 240.0, "y": 80.0 }
        },
        {
            "id": "n1",
            "type": "AI",
            "name": "Score the lead",
            "config": { "model": "small", "prompt": "Rate this lead 1-10" },
            "integrationId": "llm",
            "isEnabled": false
        }
    ],
    "edges": [
        { "id": "e1", "source": "t1", "target": "a1" },
        { "id": "e2", "source": "a1", "target": "n1", "condition": "status == 'created'" }
    ],
    "version": 3,
    "tags": "[\"crm\",\"sales\"]",
    "totalRuns": 10,
    "successfulRuns": 8,
    "failedRuns": 2,
    "createdAt": "2025-11-02T09:30:00Z",
    "updatedAt": "2025-11-20T14:05:00Z"
}"#;

#[test]
fn parse_full_document_with_encoded_tags() {
    let flow: Flow = serde_json::from_str(LEAD_SYNC_DOC).unwrap();

    assert_eq!(flow.id, "flow_42");
    assert_eq!(flow.trigger_type, TriggerType::Webhook);
    assert!(flow.is_active);
    assert_eq!(flow.version, 3);
    assert!(flow.run_counters_consistent());

    // The legacy string form decodes into the canonical set.
    assert!(flow.tags.contains("crm"));
    assert!(flow.tags.contains("sales"));
    assert_eq!(flow.tags.len(), 2);

    // Typed config survives the type/config wire split.
    let action = flow.get_node("a1").unwrap();
    assert_eq!(action.kind(), NodeKind::Action);
    match &action.config {
        NodeConfig::Action(config) => {
            assert_eq!(config.operation.as_deref(), Some("create_contact"));
            assert!(config.extra.contains_key("fields"));
        }
        other => panic!("expected an action config, got {:?}", other),
    }

    // The disabled AI node is parsed but marked skippable.
    let ai = flow.get_node("n1").unwrap();
    assert!(!ai.is_enabled);

    let catalog = IntegrationCatalog::from_iter(["crm", "llm"]);
    assert!(validate_structure(flow, &catalog).is_ok());
}

#[test]
fn parse_document_with_native_tags() {
    let doc = LEAD_SYNC_DOC.replace(r#""[\"crm\",\"sales\"]""#, r#"["crm","sales"]"#);
    let flow: Flow = serde_json::from_str(&doc).unwrap();
    assert!(flow.tags.contains("crm"));
    assert!(flow.tags.contains("sales"));
}

#[test]
fn tags_always_serialize_to_native_array() {
    let flow: Flow = serde_json::from_str(LEAD_SYNC_DOC).unwrap();
    let json = serde_json::to_value(&flow).unwrap();
    assert_eq!(json["tags"], serde_json::json!(["crm", "sales"]));
}

#[test]
fn wire_roundtrip_preserves_document() {
    let flow: Flow = serde_json::from_str(LEAD_SYNC_DOC).unwrap();
    let json = serde_json::to_string(&flow).unwrap();
    let reparsed: Flow = serde_json::from_str(&json).unwrap();
    assert_eq!(reparsed, flow);
}

#[test]
fn node_without_config_key_parses() {
    let json = r#"{ "id": "t1", "type": "TRIGGER", "name": "bare" }"#;
    let node: Node = serde_json::from_str(json).unwrap();
    assert_eq!(node.kind(), NodeKind::Trigger);
    assert!(node.is_enabled);
    assert_eq!(node.config, NodeConfig::trigger());
}

#[test]
fn unknown_node_type_is_rejected() {
    let json = r#"{ "id": "x", "type": "LOOP", "name": "nope" }"#;
    assert!(serde_json::from_str::<Node>(json).is_err());
}

#[test]
fn artifact_roundtrip() {
    let catalog = empty_catalog();
    let validated = validate_structure(linear_flow(), &catalog).unwrap();

    let bytes = validated.to_bytes().unwrap();
    let reloaded = ValidatedFlow::from_bytes(&bytes).unwrap();
    assert_eq!(reloaded.as_flow(), validated.as_flow());
}

#[test]
fn artifact_file_roundtrip() {
    let catalog = empty_catalog();
    let validated = validate_structure(linear_flow(), &catalog).unwrap();

    let path = std::env::temp_dir().join("keiro_artifact_file_roundtrip.json");
    let path = path.to_string_lossy().into_owned();

    validated.save(&path).unwrap();
    let reloaded = ValidatedFlow::from_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(reloaded.as_flow(), validated.as_flow());
}

#[test]
fn artifact_rejects_malformed_bytes() {
    assert!(ValidatedFlow::from_bytes(b"not a snapshot").is_err());
}

#[test]
fn stale_save_is_rejected() {
    // Session A and session B both fetch version 1.
    let stored = linear_flow();
    let base_seen_by_both = stored.version;

    // Session A saves first; the store now holds version 2.
    assert!(ensure_current(&stored, base_seen_by_both).is_ok());
    let stored = stored.bump_version();

    // Session B's save is still based on version 1 and must be rejected.
    let conflict = ensure_current(&stored, base_seen_by_both).unwrap_err();
    assert_eq!(conflict.stored_version, 2);
    assert_eq!(conflict.base_version, 1);
}

/// A host-specific export format, translated through `IntoFlow` the way the
/// platform's own importers do.
struct StepListExport {
    id: String,
    name: String,
    steps: Vec<(String, String)>,
}

impl IntoFlow for StepListExport {
    fn into_flow(self) -> std::result::Result<Flow, FlowConversionError> {
        if self.steps.is_empty() {
            return Err(FlowConversionError::InvalidDocument(
                "export contains no steps".to_string(),
            ));
        }
        let mut flow = Flow::new(self.id, self.name, TriggerType::Manual);
        let mut previous: Option<String> = None;
        for (index, (step_id, label)) in self.steps.into_iter().enumerate() {
            let config = if index == 0 {
                NodeConfig::trigger()
            } else {
                NodeConfig::action()
            };
            flow = flow.with_node(Node::new(step_id.clone(), label, config));
            if let Some(prev) = previous {
                flow = flow.with_edge(Edge::new(format!("e{}", index), prev, step_id.clone()));
            }
            previous = Some(step_id);
        }
        Ok(flow)
    }
}

#[test]
fn custom_format_converts_and_validates() {
    let export = StepListExport {
        id: "imported_1".to_string(),
        name: "Imported automation".to_string(),
        steps: vec![
            ("s1".to_string(), "Start".to_string()),
            ("s2".to_string(), "Do the thing".to_string()),
            ("s3".to_string(), "Wrap up".to_string()),
        ],
    };

    let flow = export.into_flow().unwrap();
    let validated = validate_structure(flow, &empty_catalog()).unwrap();
    assert_eq!(validated.nodes.len(), 3);
    assert_eq!(validated.edges.len(), 2);
}

#[test]
fn empty_custom_format_is_a_conversion_error() {
    let export = StepListExport {
        id: "imported_2".to_string(),
        name: "Empty".to_string(),
        steps: vec![],
    };
    assert!(export.into_flow().is_err());
}
