//! Structural validation of flow documents.
//!
//! The entry point is [`validate_structure`]: given a candidate [`Flow`] (as
//! submitted from a builder UI or an API call) and the caller's
//! [`IntegrationCatalog`], it decides whether the document is well-formed
//! enough to persist and to hand to an execution engine. Violations are
//! accumulated, not fail-fast, and returned as structured values.

mod catalog;
mod validator;

pub use catalog::IntegrationCatalog;
pub use validator::FlowValidator;

use crate::error::ValidationError;
use crate::flow::Flow;
use std::ops::Deref;

/// A flow document that has passed structural validation.
///
/// This is the sole input contract for an execution engine: holding one
/// guarantees node id uniqueness, edge referential integrity, a single TRIGGER
/// entry point, cycle-freedom from that entry, and resolvable integration
/// references, so the engine never re-checks integrity.
///
/// Only the validator (and the trusted snapshot loader in
/// [`crate::artifact`]) can construct one.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedFlow {
    flow: Flow,
}

impl ValidatedFlow {
    pub(crate) fn assume_checked(flow: Flow) -> Self {
        Self { flow }
    }

    pub fn as_flow(&self) -> &Flow {
        &self.flow
    }

    /// Unwrap the document, giving up the validated guarantee.
    pub fn into_inner(self) -> Flow {
        self.flow
    }
}

impl Deref for ValidatedFlow {
    type Target = Flow;

    fn deref(&self) -> &Flow {
        &self.flow
    }
}

impl AsRef<Flow> for ValidatedFlow {
    fn as_ref(&self) -> &Flow {
        &self.flow
    }
}

/// Validate a candidate flow document against the caller's integration catalog.
///
/// Pure function of its inputs; see [`FlowValidator`] for the check order.
pub fn validate_structure(
    flow: Flow,
    catalog: &IntegrationCatalog,
) -> Result<ValidatedFlow, Vec<ValidationError>> {
    FlowValidator::new().validate(flow, catalog)
}
