//! Persistence of validated flow snapshots.
//!
//! A [`ValidatedFlow`] can be frozen to disk and handed to an execution engine
//! out of band. Loading is a trusted operation: the snapshot is assumed to
//! come from a store that only ever receives validator output, so validation
//! is not re-run. Never load snapshots from untrusted sources.

use crate::error::ArtifactError;
use crate::flow::Flow;
use crate::validate::ValidatedFlow;
use std::fs;

impl ValidatedFlow {
    /// Saves the snapshot to a file as canonical JSON.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = self.to_bytes()?;
        fs::write(path, bytes).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Loads a snapshot from a file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let bytes = fs::read(path).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }

    /// Serializes the snapshot to canonical JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        serde_json::to_vec(self.as_flow()).map_err(|e| ArtifactError::Encode(e.to_string()))
    }

    /// Deserializes a snapshot from bytes produced by [`ValidatedFlow::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        serde_json::from_slice::<Flow>(bytes)
            .map(ValidatedFlow::assume_checked)
            .map_err(|e| ArtifactError::Decode(e.to_string()))
    }
}
