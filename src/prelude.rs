//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the keiro crate. Import this
//! module to get access to the document model and validator without having to
//! import each type individually.
//!
//! # Example
//!
//! ```rust
//! use keiro::prelude::*;
//!
//! let flow = Flow::new("f_1", "Nightly export", TriggerType::Schedule)
//!     .with_node(Node::new("t1", "Every night", NodeConfig::trigger()))
//!     .with_node(Node::new("a1", "Export rows", NodeConfig::action()))
//!     .with_edge(Edge::new("e1", "t1", "a1"));
//!
//! let catalog = IntegrationCatalog::new();
//! assert!(validate_structure(flow, &catalog).is_ok());
//! ```

// Document model
pub use crate::flow::{
    ActionConfig, AiConfig, ConditionConfig, DelayConfig, Edge, Flow, IntoFlow, Node, NodeConfig,
    NodeKind, Position, TagSet, TriggerConfig, TriggerType, WebhookConfig,
};

// Validation
pub use crate::validate::{FlowValidator, IntegrationCatalog, ValidatedFlow, validate_structure};

// Error types
pub use crate::error::{
    ArtifactError, FlowConversionError, RevisionConflict, TagCodecError, ValidationError,
    ValidationErrorKind,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
