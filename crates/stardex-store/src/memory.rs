//! In-memory record store

use crate::StoreError;
use stardex_domain::{Category, Record, RecordId, RecordStore};
use tracing::debug;

/// A `RecordStore` that keeps every persisted record in memory.
///
/// Records are retained in persistence order together with their assigned
/// ids. An optional capacity limit turns the store into a failure source
/// for exercising the orchestrator's fatal-storage path.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<(RecordId, Record)>,
    capacity: Option<usize>,
}

impl MemoryStore {
    /// Create an unbounded in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects the record after `limit` entries.
    pub fn with_capacity(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity: Some(limit),
        }
    }

    /// Number of persisted records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing has been persisted yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All persisted records in persistence order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().map(|(_, record)| record)
    }

    /// Persisted records of one category, in persistence order.
    pub fn records_of(&self, category: Category) -> impl Iterator<Item = &Record> {
        self.records()
            .filter(move |record| record.category() == category)
    }

    /// Look a record up by its assigned id.
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records
            .iter()
            .find(|(record_id, _)| *record_id == id)
            .map(|(_, record)| record)
    }
}

impl RecordStore for MemoryStore {
    type Error = StoreError;

    fn persist(&mut self, record: Record) -> Result<RecordId, StoreError> {
        if let Some(limit) = self.capacity {
            if self.records.len() >= limit {
                return Err(StoreError::CapacityExceeded { limit });
            }
        }

        let id = RecordId::new();
        debug!(%id, category = %record.category(), name = record.name(), "persisted record");
        self.records.push((id, record));
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stardex_domain::Species;

    fn species(name: &str) -> Record {
        Record::Species(Species {
            name: name.to_string(),
            kind: None,
            quadrants: vec![],
            planets: vec![],
            population: None,
        })
    }

    #[test]
    fn test_persist_assigns_distinct_ids() {
        let mut store = MemoryStore::new();
        let a = store.persist(species("Vulcan")).unwrap();
        let b = store.persist(species("Andorian")).unwrap();

        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(a).unwrap().name(), "Vulcan");
    }

    #[test]
    fn test_records_of_filters_by_category() {
        let mut store = MemoryStore::new();
        store.persist(species("Vulcan")).unwrap();

        assert_eq!(store.records_of(Category::Species).count(), 1);
        assert_eq!(store.records_of(Category::Episode).count(), 0);
    }

    #[test]
    fn test_capacity_limit() {
        let mut store = MemoryStore::with_capacity(1);
        store.persist(species("Vulcan")).unwrap();

        let err = store.persist(species("Andorian")).unwrap_err();
        assert_eq!(err, StoreError::CapacityExceeded { limit: 1 });
        assert_eq!(store.len(), 1);
    }
}
