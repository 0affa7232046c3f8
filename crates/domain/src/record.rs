use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::{AppError, StorageError};

/// A persisted row with an integer id and audit timestamps.
///
/// `New` is the create payload (no id, no timestamps) and `Patch` the
/// partial-update payload merged by `apply_patch`.
pub trait Record: Clone + Send + Sync + 'static {
    type New: Clone + Send + Sync + 'static;
    type Patch: Send + 'static;

    /// Singular name used in messages ("Fuel")
    const KIND: &'static str;
    /// Plural name used in messages ("Fuels")
    const PLURAL: &'static str;

    fn id(&self) -> i32;

    /// Build the persisted form of a create payload
    fn assemble(id: i32, new: Self::New, created_at: DateTime<Utc>) -> Self;

    /// Overlay the fields present in `patch`, leave the rest untouched
    fn apply_patch(self, patch: Self::Patch) -> Self;

    fn touch(&mut self, updated_at: DateTime<Utc>);

    fn validate_new(new: &Self::New) -> Result<(), AppError>;

    fn validate_patch(patch: &Self::Patch) -> Result<(), AppError>;
}

/// A record measured at an instant, partitioned by month for reporting
pub trait Measurement: Record {
    fn datetime(&self) -> DateTime<Utc>;
}

/// Basic persistence contract shared by every resource kind
#[async_trait]
pub trait CrudRepository<R: Record>: Send + Sync {
    /// Point lookup by primary key
    async fn get(&self, id: i32) -> Result<Option<R>, StorageError>;

    /// Full scan
    async fn get_all(&self) -> Result<Vec<R>, StorageError>;

    /// Insert a record, assigning id and creation timestamp
    async fn create(&self, record: R::New) -> Result<R, StorageError>;

    /// All-or-nothing insert of several records
    async fn bulk_create(&self, records: Vec<R::New>) -> Result<bool, StorageError>;

    /// Persist every field of an existing record
    async fn update(&self, record: R) -> Result<R, StorageError>;

    async fn delete(&self, record: &R) -> Result<bool, StorageError>;
}

pub(crate) fn ensure_quantity(quantity: f64) -> Result<(), AppError> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(AppError::bad_request("quantity must be a non-negative number"));
    }
    Ok(())
}
