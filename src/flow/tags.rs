use crate::error::TagCodecError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;

/// A set of flow tags.
///
/// Canonically a sorted string set; `BTreeSet` keeps serialization
/// deterministic. Persisted rows carry tags either as a native JSON array or
/// as a JSON-encoded string (`'["crm","sales"]'`), a leftover of the
/// platform's earlier schema. Both forms are accepted on read; writes always
/// produce the native array. The string codec lives in [`TagSet::encode`] and
/// [`TagSet::decode`] so the dual representation never leaks past this
/// boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag. Returns false if it was already present.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        self.0.insert(tag.into())
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        self.0.remove(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }

    /// Encode to the JSON-encoded string form used at the persistence boundary.
    pub fn encode(&self) -> String {
        // A set of strings cannot fail to serialize.
        serde_json::to_string(&self.0).unwrap_or_else(|_| "[]".to_string())
    }

    /// Decode from the JSON-encoded string form. Order-insensitive.
    pub fn decode(encoded: &str) -> Result<Self, TagCodecError> {
        serde_json::from_str::<Vec<String>>(encoded)
            .map(|tags| Self(tags.into_iter().collect()))
            .map_err(|e| TagCodecError::InvalidEncoding(e.to_string()))
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl Serialize for TagSet {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.0.serialize(serializer)
    }
}

/// Read-side tolerance for the dual representation.
#[derive(Deserialize)]
#[serde(untagged)]
enum TagRepr {
    Native(Vec<String>),
    Encoded(String),
}

impl<'de> Deserialize<'de> for TagSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match TagRepr::deserialize(deserializer)? {
            TagRepr::Native(tags) => Ok(Self(tags.into_iter().collect())),
            TagRepr::Encoded(encoded) => Self::decode(&encoded).map_err(D::Error::custom),
        }
    }
}
