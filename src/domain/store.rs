// SPDX-License-Identifier: MPL-2.0
//! In-memory record store.
//!
//! Each page owns one store per entity type. The store is the only place ids
//! are assigned: a counter that starts after the largest seeded id and only
//! moves forward, so an id is never handed out twice even after deletions.

use std::fmt;

/// Identifier of a record inside its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u32);

impl RecordId {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A record that can live in a [`RecordStore`].
pub trait Record {
    fn id(&self) -> RecordId;
}

/// Ordered list of records with unique ids.
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    records: Vec<T>,
    next_id: u32,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: Record> RecordStore<T> {
    /// Builds a store from seed records, keeping their order.
    ///
    /// Seeds with a duplicate id are dropped (first one wins).
    #[must_use]
    pub fn from_seed(seed: Vec<T>) -> Self {
        let mut records: Vec<T> = Vec::with_capacity(seed.len());
        for record in seed {
            if records.iter().any(|r| r.id() == record.id()) {
                tracing::warn!(id = %record.id(), "duplicate seed id dropped");
                continue;
            }
            records.push(record);
        }
        let next_id = records
            .iter()
            .map(|r| r.id().value())
            .max()
            .map_or(1, |max| max.saturating_add(1));
        Self { records, next_id }
    }

    /// The id the next created record will receive.
    #[must_use]
    pub fn peek_next_id(&self) -> RecordId {
        RecordId(self.next_id)
    }

    fn allocate_id(&mut self) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Creates a record at the end of the list.
    pub fn append_with(&mut self, build: impl FnOnce(RecordId) -> T) -> RecordId {
        let id = self.allocate_id();
        self.records.push(build(id));
        id
    }

    /// Creates a record at the start of the list.
    pub fn prepend_with(&mut self, build: impl FnOnce(RecordId) -> T) -> RecordId {
        let id = self.allocate_id();
        self.records.insert(0, build(id));
        id
    }

    /// Removes the record with `id`, keeping the order of the others.
    ///
    /// Returns `None` when no record matches.
    pub fn remove(&mut self, id: RecordId) -> Option<T> {
        let position = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(position))
    }

    /// Applies `change` to the record with `id` in place.
    ///
    /// The change must not alter the id. Returns `false` when no record
    /// matches.
    pub fn update(&mut self, id: RecordId, change: impl FnOnce(&mut T)) -> bool {
        let Some(record) = self.records.iter_mut().find(|r| r.id() == id) else {
            return false;
        };
        change(record);
        debug_assert_eq!(record.id(), id, "update changed a record id");
        true
    }

    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: RecordId,
        name: &'static str,
    }

    impl Record for Item {
        fn id(&self) -> RecordId {
            self.id
        }
    }

    fn item(id: u32, name: &'static str) -> Item {
        Item {
            id: RecordId::new(id),
            name,
        }
    }

    fn names(store: &RecordStore<Item>) -> Vec<&'static str> {
        store.iter().map(|i| i.name).collect()
    }

    #[test]
    fn next_id_starts_after_largest_seed_id() {
        let store = RecordStore::from_seed(vec![item(1, "a"), item(7, "b"), item(3, "c")]);
        assert_eq!(store.peek_next_id(), RecordId::new(8));
    }

    #[test]
    fn empty_seed_starts_at_one() {
        let store: RecordStore<Item> = RecordStore::from_seed(Vec::new());
        assert_eq!(store.peek_next_id(), RecordId::new(1));
        assert!(store.is_empty());
    }

    #[test]
    fn append_and_prepend_place_records_at_the_ends() {
        let mut store = RecordStore::from_seed(vec![item(1, "a")]);
        store.append_with(|id| Item { id, name: "last" });
        store.prepend_with(|id| Item { id, name: "first" });
        assert_eq!(names(&store), vec!["first", "a", "last"]);
    }

    #[test]
    fn remove_deletes_exactly_one_and_preserves_order() {
        let mut store =
            RecordStore::from_seed(vec![item(1, "a"), item(2, "b"), item(3, "c"), item(4, "d")]);

        let removed = store.remove(RecordId::new(2));

        assert_eq!(removed.map(|i| i.name), Some("b"));
        assert_eq!(names(&store), vec!["a", "c", "d"]);
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut store = RecordStore::from_seed(vec![item(1, "a")]);
        assert!(store.remove(RecordId::new(42)).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn ids_are_not_reused_after_deletion() {
        let mut store = RecordStore::from_seed(vec![item(1, "a"), item(2, "b"), item(3, "c")]);
        store.remove(RecordId::new(3));
        store.remove(RecordId::new(2));

        let id = store.append_with(|id| Item { id, name: "new" });

        assert_eq!(id, RecordId::new(4));
    }

    #[test]
    fn duplicate_seed_ids_keep_the_first_record() {
        let store = RecordStore::from_seed(vec![item(1, "a"), item(1, "dup")]);
        assert_eq!(names(&store), vec!["a"]);
    }

    #[test]
    fn update_changes_record_in_place() {
        let mut store = RecordStore::from_seed(vec![item(1, "a"), item(2, "b")]);
        assert!(store.update(RecordId::new(2), |i| i.name = "z"));
        assert!(!store.update(RecordId::new(9), |i| i.name = "never"));
        assert_eq!(names(&store), vec!["a", "z"]);
    }
}
