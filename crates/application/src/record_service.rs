use std::marker::PhantomData;
use std::sync::Arc;

use domain::{AppError, CrudRepository, Record, StorageError};
use tracing::{error, info};

/// Translate a storage fault into a `DATASOURCE_ERROR` carrying `message`,
/// logging the underlying cause.
pub(crate) fn datasource_error(message: impl Into<String>) -> impl FnOnce(StorageError) -> AppError {
    let message = message.into();
    move |err| {
        error!(error = %err, "{message}");
        AppError::datasource(message)
    }
}

/// CRUD use cases shared by every resource kind.
///
/// `Repo` is usually the kind's repository trait object
/// (`dyn FuelRepository`), so the report methods of each kind live in
/// inherent impls on the concrete alias (`FuelService`).
pub struct RecordService<R, Repo: ?Sized> {
    repo: Arc<Repo>,
    _record: PhantomData<fn() -> R>,
}

impl<R, Repo: ?Sized> Clone for RecordService<R, Repo> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            _record: PhantomData,
        }
    }
}

impl<R, Repo> RecordService<R, Repo>
where
    R: Record,
    Repo: CrudRepository<R> + ?Sized,
{
    pub fn new(repo: Arc<Repo>) -> Self {
        Self {
            repo,
            _record: PhantomData,
        }
    }

    pub fn repository(&self) -> &Repo {
        &self.repo
    }

    pub async fn get_all(&self) -> Result<Vec<R>, AppError> {
        self.repo
            .get_all()
            .await
            .map_err(datasource_error(format!("DB Error while fetching all {}", R::PLURAL)))
    }

    /// `Ok(None)` when no record has this id
    pub async fn get(&self, id: i32) -> Result<Option<R>, AppError> {
        let record = self
            .repo
            .get(id)
            .await
            .map_err(datasource_error(format!("Error while fetching {}", R::KIND)))?;
        if record.is_none() {
            info!("{} not found with id: {}", R::KIND, id);
        }
        Ok(record)
    }

    pub async fn create(&self, new: R::New) -> Result<R, AppError> {
        R::validate_new(&new)?;
        self.repo
            .create(new)
            .await
            .map_err(datasource_error(format!("Error while creating {}", R::KIND)))
    }

    /// Insert every record or none of them
    pub async fn bulk_create(&self, records: Vec<R::New>) -> Result<(), AppError> {
        for new in &records {
            R::validate_new(new)?;
        }
        let count = records.len();
        let created = self
            .repo
            .bulk_create(records)
            .await
            .map_err(datasource_error(format!("Error while creating {}", R::PLURAL)))?;
        if !created {
            return Err(AppError::datasource(format!(
                "Error while creating {}",
                R::PLURAL
            )));
        }
        info!("Created {} {}", count, R::PLURAL);
        Ok(())
    }

    /// Merge `patch` into the stored record and persist it
    pub async fn update(&self, id: i32, patch: R::Patch) -> Result<R, AppError> {
        R::validate_patch(&patch)?;
        let current = self.require(id).await?;
        self.repo
            .update(current.apply_patch(patch))
            .await
            .map_err(datasource_error(format!("Error while updating {}", R::KIND)))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let current = self.require(id).await?;
        let deleted = self
            .repo
            .delete(&current)
            .await
            .map_err(datasource_error(format!("Error while deleting {}", R::KIND)))?;
        if !deleted {
            return Err(not_found::<R>());
        }
        Ok(())
    }

    /// Load a record that must exist
    pub(crate) async fn require(&self, id: i32) -> Result<R, AppError> {
        self.get(id).await?.ok_or_else(not_found::<R>)
    }
}

pub(crate) fn not_found<R: Record>() -> AppError {
    AppError::not_found(format!("{} not found", R::KIND))
}

/// `"<Kinds> created successfully"`
pub fn created_message<R: Record>() -> String {
    format!("{} created successfully", R::PLURAL)
}

/// `"<Kind> deleted successfully"`
pub fn deleted_message<R: Record>() -> String {
    format!("{} deleted successfully", R::KIND)
}
