use ahash::AHashSet;

/// The set of integration ids known to the caller.
///
/// Passed into validation rather than looked up internally, so the validator
/// stays a pure function of its inputs. The host assembles this from whatever
/// connector catalog it maintains.
#[derive(Debug, Clone, Default)]
pub struct IntegrationCatalog {
    ids: AHashSet<String>,
}

impl IntegrationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an integration id. Returns false if it was already known.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for IntegrationCatalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
