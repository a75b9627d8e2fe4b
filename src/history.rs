//! Name history: the last accepted name of every tracked entity.
//!
//! Resolution only ever reads [`NameHistory::names`]. Deciding which entities are worth recording, and persisting
//! the map, is up to the caller.

use std::collections::BTreeMap;

/// Opaque, caller-assigned entity identifier. `0` means "no identifier" and is never recorded.
pub type EntityId = u32;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameHistory {
    entries: BTreeMap<EntityId, String>,
}

impl NameHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from bare names, assigning ids `1..`.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        (1..).zip(names).map(|(id, name)| (id, name.into())).collect()
    }

    /// Record `name` as the current name of `id`, replacing any earlier one.
    ///
    /// Returns the replaced name. Ids of `0` are ignored.
    pub fn record(&mut self, id: EntityId, name: impl Into<String>) -> Option<String> {
        if id == 0 {
            return None;
        }
        self.entries.insert(id, name.into())
    }

    pub fn forget(&mut self, id: EntityId) -> Option<String> {
        self.entries.remove(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&str> {
        self.entries.get(&id).map(String::as_str)
    }

    /// Iterate over every recorded name, in id order.
    pub fn names(&self) -> impl Iterator<Item = &str> + Clone {
        self.entries.values().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &str)> {
        self.entries.iter().map(|(&id, name)| (id, name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl FromIterator<(EntityId, String)> for NameHistory {
    fn from_iter<T: IntoIterator<Item = (EntityId, String)>>(iter: T) -> Self {
        let mut history = NameHistory::new();
        for (id, name) in iter {
            history.record(id, name);
        }
        history
    }
}

impl Extend<(EntityId, String)> for NameHistory {
    fn extend<T: IntoIterator<Item = (EntityId, String)>>(&mut self, iter: T) {
        for (id, name) in iter {
            self.record(id, name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_replaces_previous_name() {
        let mut history = NameHistory::new();
        assert_eq!(history.record(7, "Probe 1"), None);
        assert_eq!(history.record(7, "Probe 2"), Some("Probe 1".to_string()));
        assert_eq!(history.get(7), Some("Probe 2"));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_zero_id_is_ignored() {
        let mut history = NameHistory::new();
        assert_eq!(history.record(0, "Ghost"), None);
        assert!(history.is_empty());
    }

    #[test]
    fn test_forget() {
        let mut history = NameHistory::from_names(["A", "B"]);
        assert_eq!(history.forget(1), Some("A".to_string()));
        assert_eq!(history.forget(1), None);
        assert_eq!(history.names().collect::<Vec<_>>(), vec!["B"]);
    }

    #[test]
    fn test_from_names_assigns_sequential_ids() {
        let history = NameHistory::from_names(vec!["x".to_string(), "y".to_string()]);
        assert_eq!(history.iter().collect::<Vec<_>>(), vec![(1, "x"), (2, "y")]);
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let history: NameHistory = [(3, "Same".to_string()), (9, "Same".to_string())].into_iter().collect();
        assert_eq!(history.names().count(), 2);
    }

    #[test]
    fn test_extend_and_clear() {
        let mut history = NameHistory::new();
        history.extend([(1, "a".to_string()), (0, "skipped".to_string())]);
        assert_eq!(history.len(), 1);
        history.clear();
        assert!(history.is_empty());
    }
}
