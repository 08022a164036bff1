//! Static knowledge base with ordered keyword routing.

use super::entry::KnowledgeValue;
use super::error::KnowledgeError;

/// Immutable topic table plus the ordered triggers that select its entries.
///
/// Triggers are scanned linearly in declared order and matched as plain
/// substrings. The first declared trigger found anywhere in the text wins,
/// regardless of where it occurs or how long it is.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<(String, KnowledgeValue)>,
    /// (trigger, index into `entries`)
    routes: Vec<(String, usize)>,
}

impl KnowledgeBase {
    /// Build a knowledge base, resolving every route against the entry keys.
    ///
    /// Fails if a route names a missing key, a key is declared twice, or a
    /// trigger is empty.
    pub fn new<E, K, R, T, RK>(entries: E, routes: R) -> Result<Self, KnowledgeError>
    where
        E: IntoIterator<Item = (K, KnowledgeValue)>,
        K: Into<String>,
        R: IntoIterator<Item = (T, RK)>,
        T: Into<String>,
        RK: AsRef<str>,
    {
        let mut table: Vec<(String, KnowledgeValue)> = Vec::new();
        for (key, value) in entries {
            let key = key.into();
            if table.iter().any(|(existing, _)| *existing == key) {
                return Err(KnowledgeError::DuplicateEntry(key));
            }
            table.push((key, value));
        }

        let mut resolved = Vec::new();
        for (trigger, key) in routes {
            let trigger = trigger.into().to_lowercase();
            let key = key.as_ref();
            if trigger.is_empty() {
                return Err(KnowledgeError::EmptyTrigger(key.to_string()));
            }
            let index = table
                .iter()
                .position(|(existing, _)| existing == key)
                .ok_or_else(|| KnowledgeError::UnknownEntry {
                    trigger: trigger.clone(),
                    key: key.to_string(),
                })?;
            resolved.push((trigger, index));
        }

        Ok(Self {
            entries: table,
            routes: resolved,
        })
    }

    /// Rendered answer for the first declared trigger contained in `normalized`.
    pub fn lookup(&self, normalized: &str) -> Option<String> {
        self.matching_key(normalized)
            .and_then(|key| self.get(key))
            .map(KnowledgeValue::render)
    }

    /// Key of the entry the first matching trigger routes to.
    pub fn matching_key(&self, normalized: &str) -> Option<&str> {
        self.routes
            .iter()
            .find(|(trigger, _)| normalized.contains(trigger.as_str()))
            .map(|(_, index)| self.entries[*index].0.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&KnowledgeValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }
}
