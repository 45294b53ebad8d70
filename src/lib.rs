//! # Keiro - Flow Document Model and Structural Validation Engine
//!
//! **Keiro** is the canonical document model for node-based automation flows:
//! a versioned, directed graph of typed nodes connected by edges, together
//! with the pure structural validator an execution engine needs before it can
//! safely consume such a document.
//!
//! ## Core Workflow
//!
//! The crate is designed to be format-agnostic. It operates on a canonical
//! internal model of a flow document. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your builder/export format into your own Rust
//!     structs, or deserialize the platform's camelCase JSON directly into
//!     [`Flow`](flow::Flow).
//! 2.  **Convert to Keiro's Model**: For custom formats, implement the
//!     [`IntoFlow`](flow::IntoFlow) trait as the translation layer into the
//!     canonical [`Flow`](flow::Flow).
//! 3.  **Validate**: Run [`validate_structure`](validate::validate_structure)
//!     with your integration catalog. Every structural problem is accumulated
//!     and returned at once; a well-formed document comes back as a
//!     [`ValidatedFlow`](validate::ValidatedFlow).
//! 4.  **Hand Off**: A `ValidatedFlow` is the execution engine's sole input
//!     contract; the engine never re-checks integrity. Snapshots can be
//!     frozen to disk via the [`artifact`] module, and concurrent edits are
//!     serialized through the `version` counter (see [`revision`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use keiro::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // A small automation: webhook trigger feeding one CRM action.
//!     let flow = Flow::new("flow_01", "Lead sync", TriggerType::Webhook)
//!         .with_description("Push new leads into the CRM")
//!         .with_tag("crm")
//!         .with_node(Node::new("t1", "Incoming lead", NodeConfig::trigger()))
//!         .with_node(
//!             Node::new("a1", "Create contact", NodeConfig::action())
//!                 .with_integration("crm"),
//!         )
//!         .with_edge(Edge::new("e1", "t1", "a1"));
//!
//!     // The caller supplies the set of integrations it knows about.
//!     let catalog = IntegrationCatalog::from_iter(["crm"]);
//!
//!     let validated = validate_structure(flow, &catalog)
//!         .map_err(|errors| format!("{} validation error(s)", errors.len()))?;
//!
//!     println!("'{}' is ready for the engine", validated.name);
//!     Ok(())
//! }
//! ```
//!
//! When validation fails, every violation comes back with its taxonomy kind
//! and the offending node/edge ids, so a builder UI can render each one as a
//! distinct, actionable message:
//!
//! ```rust
//! use keiro::prelude::*;
//!
//! let flow = Flow::new("flow_02", "Broken", TriggerType::Manual)
//!     .with_node(Node::new("a1", "Orphan action", NodeConfig::action()))
//!     .with_edge(Edge::new("e1", "a1", "ghost"));
//!
//! let errors = validate_structure(flow, &IntegrationCatalog::new()).unwrap_err();
//! assert_eq!(errors.len(), 2); // dangling edge + missing trigger
//! for error in &errors {
//!     println!("[{}] {}", error.kind(), error);
//! }
//! ```

pub mod artifact;
pub mod error;
pub mod flow;
pub mod prelude;
pub mod revision;
pub mod validate;
