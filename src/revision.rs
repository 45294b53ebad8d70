//! Versioning and optimistic concurrency.
//!
//! Concurrent editing sessions are serialized without locks: each save carries
//! the version it was based on, and the persistence layer rejects a save whose
//! base no longer matches the stored document. The validator itself needs none
//! of this; it never mutates shared state.

use crate::error::RevisionConflict;
use crate::flow::Flow;
use chrono::Utc;

impl Flow {
    /// A copy of this flow one structural revision later: `version + 1` and a
    /// fresh `updated_at`. The input is never mutated, so an editing session
    /// can keep diffing against the base it fetched.
    pub fn bump_version(&self) -> Flow {
        let mut next = self.clone();
        next.version = self.version + 1;
        next.updated_at = Utc::now();
        next
    }
}

/// Check a save attempt against the currently stored document.
///
/// `base_version` is the version the edit was made on top of. A mismatch means
/// someone else saved in between; the write must be rejected, never silently
/// overwritten.
pub fn ensure_current(stored: &Flow, base_version: u64) -> Result<(), RevisionConflict> {
    if stored.version == base_version {
        Ok(())
    } else {
        Err(RevisionConflict {
            flow_id: stored.id.clone(),
            stored_version: stored.version,
            base_version,
        })
    }
}
