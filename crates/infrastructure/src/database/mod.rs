pub mod entities;

mod aggregate;
mod energy_repository;
mod fuel_repository;
mod oil_repository;
mod roadtrip_repository;
mod student_repository;

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use domain::StorageError;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

use crate::config::DatabaseSettings;

pub use energy_repository::SeaOrmEnergyRepository;
pub use fuel_repository::SeaOrmFuelRepository;
pub use oil_repository::SeaOrmOilRepository;
pub use roadtrip_repository::SeaOrmRoadtripRepository;
pub use student_repository::SeaOrmStudentRepository;

/// Open the connection pool described by `settings`
pub async fn connect(settings: &DatabaseSettings) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(settings.url.clone());
    options
        .max_connections(settings.max_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    info!("Connecting to database...");
    let db = Database::connect(options).await?;
    info!("✅ Database connection established");
    Ok(db)
}

/// Await a persistence call, logging and normalizing any failure into `StorageError`.
///
/// Every repository method goes through this, so the service layer only ever
/// sees `StorageError::Database` carrying the driver's message.
pub(crate) async fn with_storage_errors<T, E, F>(operation: &str, fut: F) -> Result<T, StorageError>
where
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    fut.await.map_err(|e| {
        tracing::error!("Error while {}, error: {}", operation, e);
        StorageError::Database(e.to_string())
    })
}

/// CRUD half of a sea-orm repository. `$entity` names the entity module,
/// whose `ActiveModel` provides `from_new` / `from_record`.
macro_rules! sea_orm_crud {
    ($repo:ident, $record:ty, $entity:ident) => {
        #[async_trait::async_trait]
        impl domain::CrudRepository<$record> for $repo {
            async fn get(&self, id: i32) -> Result<Option<$record>, domain::StorageError> {
                use sea_orm::EntityTrait;

                let model = $crate::database::with_storage_errors(
                    concat!("getting ", stringify!($record)),
                    $entity::Entity::find_by_id(id).one(&self.db),
                )
                .await?;
                Ok(model.map(Into::into))
            }

            async fn get_all(&self) -> Result<Vec<$record>, domain::StorageError> {
                use sea_orm::{EntityTrait, QueryOrder};

                let models = $crate::database::with_storage_errors(
                    concat!("fetching all ", stringify!($record)),
                    $entity::Entity::find()
                        .order_by_asc($entity::Column::Id)
                        .all(&self.db),
                )
                .await?;
                Ok(models.into_iter().map(Into::into).collect())
            }

            async fn create(
                &self,
                record: <$record as domain::Record>::New,
            ) -> Result<$record, domain::StorageError> {
                use sea_orm::ActiveModelTrait;

                let active = $entity::ActiveModel::from_new(record, chrono::Utc::now());
                let model = $crate::database::with_storage_errors(
                    concat!("creating ", stringify!($record)),
                    active.insert(&self.db),
                )
                .await?;
                Ok(model.into())
            }

            async fn bulk_create(
                &self,
                records: Vec<<$record as domain::Record>::New>,
            ) -> Result<bool, domain::StorageError> {
                use sea_orm::{EntityTrait, TransactionTrait};

                if records.is_empty() {
                    return Ok(true);
                }
                let now = chrono::Utc::now();
                let models: Vec<$entity::ActiveModel> = records
                    .into_iter()
                    .map(|record| $entity::ActiveModel::from_new(record, now))
                    .collect();

                // Dropping an uncommitted transaction rolls it back
                $crate::database::with_storage_errors(
                    concat!("bulk creating ", stringify!($record)),
                    async {
                        let txn = self.db.begin().await?;
                        $entity::Entity::insert_many(models).exec(&txn).await?;
                        txn.commit().await?;
                        Ok::<_, sea_orm::DbErr>(())
                    },
                )
                .await?;
                Ok(true)
            }

            async fn update(&self, mut record: $record) -> Result<$record, domain::StorageError> {
                use domain::Record;
                use sea_orm::ActiveModelTrait;

                record.touch(chrono::Utc::now());
                let active = $entity::ActiveModel::from_record(&record);
                let model = $crate::database::with_storage_errors(
                    concat!("updating ", stringify!($record)),
                    active.update(&self.db),
                )
                .await?;
                Ok(model.into())
            }

            async fn delete(&self, record: &$record) -> Result<bool, domain::StorageError> {
                use domain::Record;
                use sea_orm::EntityTrait;

                let result = $crate::database::with_storage_errors(
                    concat!("deleting ", stringify!($record)),
                    $entity::Entity::delete_by_id(record.id()).exec(&self.db),
                )
                .await?;
                Ok(result.rows_affected > 0)
            }
        }
    };
}

pub(crate) use sea_orm_crud;
