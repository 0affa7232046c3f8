use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use domain::{CrudRepository, Measurement, Record, StorageError, YearWindow};

/// Process-local store for one record kind, keyed by id.
///
/// Used when the server runs without a database and by tests.
pub struct InMemoryRepository<R> {
    rows: RwLock<BTreeMap<i32, R>>,
    next_id: AtomicI32,
}

impl<R> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

fn poisoned() -> StorageError {
    StorageError::Database("in-memory store lock poisoned".to_string())
}

impl<R: Record> InMemoryRepository<R> {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<i32, R>>, StorageError> {
        self.rows.read().map_err(|_| poisoned())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<i32, R>>, StorageError> {
        self.rows.write().map_err(|_| poisoned())
    }

    fn allocate_id(&self) -> i32 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.rows.read().map(|rows| rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R: Measurement> InMemoryRepository<R> {
    /// Rows inside `window` that also satisfy `filter`
    pub(crate) fn in_window(
        &self,
        window: &YearWindow,
        filter: impl Fn(&R) -> bool,
    ) -> Result<Vec<R>, StorageError> {
        Ok(self
            .read()?
            .values()
            .filter(|row| window.contains(&row.datetime()) && filter(row))
            .cloned()
            .collect())
    }
}

/// Group `rows` by `key` and collect `value` per bucket
pub(crate) fn buckets<R, K: Ord, V>(
    rows: &[R],
    key: impl Fn(&R) -> K,
    value: impl Fn(&R) -> V,
) -> BTreeMap<K, Vec<V>> {
    let mut grouped: BTreeMap<K, Vec<V>> = BTreeMap::new();
    for row in rows {
        grouped.entry(key(row)).or_default().push(value(row));
    }
    grouped
}

/// UTC month number of a measurement
pub(crate) fn month_of<R: Measurement>(row: &R) -> u32 {
    row.datetime().month()
}

pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[async_trait]
impl<R: Record> CrudRepository<R> for InMemoryRepository<R> {
    async fn get(&self, id: i32) -> Result<Option<R>, StorageError> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<R>, StorageError> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn create(&self, record: R::New) -> Result<R, StorageError> {
        let created = R::assemble(self.allocate_id(), record, Utc::now());
        self.write()?.insert(created.id(), created.clone());
        Ok(created)
    }

    async fn bulk_create(&self, records: Vec<R::New>) -> Result<bool, StorageError> {
        let now = Utc::now();
        let mut rows = self.write()?;
        for record in records {
            let created = R::assemble(self.allocate_id(), record, now);
            rows.insert(created.id(), created);
        }
        Ok(true)
    }

    async fn update(&self, mut record: R) -> Result<R, StorageError> {
        let mut rows = self.write()?;
        let Some(slot) = rows.get_mut(&record.id()) else {
            return Err(StorageError::Database(format!(
                "{} with id {} does not exist",
                R::KIND,
                record.id()
            )));
        };
        record.touch(Utc::now());
        *slot = record.clone();
        Ok(record)
    }

    async fn delete(&self, record: &R) -> Result<bool, StorageError> {
        Ok(self.write()?.remove(&record.id()).is_some())
    }
}
