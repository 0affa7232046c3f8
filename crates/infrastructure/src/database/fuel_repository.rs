use std::collections::BTreeMap;

use async_trait::async_trait;
use domain::report::{self, MonthExtremes};
use domain::{EmissionType, Fuel, FuelRepository, FuelType, StorageError, YearWindow};
use sea_orm::DatabaseConnection;

use super::aggregate::{self, CategoryValue, MONTH_BUCKET, MonthValue, Scalar};
use super::entities::fuel;
use super::sea_orm_crud;

pub struct SeaOrmFuelRepository {
    db: DatabaseConnection,
}

impl SeaOrmFuelRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Yearly quantity summed per value of `column`
    async fn sums_by(
        &self,
        column: &str,
        window: &YearWindow,
    ) -> Result<Vec<(String, f64)>, StorageError> {
        let sql = format!(
            "SELECT {column}::text AS category, SUM(quantity) AS value \
             FROM fuel WHERE datetime BETWEEN $1 AND $2 GROUP BY {column}"
        );
        let rows: Vec<CategoryValue> = aggregate::fetch_all(
            &self.db,
            "fetching consumed fuel by year",
            aggregate::statement(&sql, aggregate::window_values(window)),
        )
        .await?;
        Ok(rows.into_iter().map(|r| (r.category, r.value)).collect())
    }

    async fn scalar(
        &self,
        sql: &str,
        operation: &str,
        window: &YearWindow,
    ) -> Result<Option<f64>, StorageError> {
        let row: Option<Scalar> = aggregate::fetch_one(
            &self.db,
            operation,
            aggregate::statement(sql, aggregate::window_values(window)),
        )
        .await?;
        Ok(row.and_then(|r| r.value))
    }
}

sea_orm_crud!(SeaOrmFuelRepository, Fuel, fuel);

#[async_trait]
impl FuelRepository for SeaOrmFuelRepository {
    async fn consumed_percentage_by_year(
        &self,
        window: &YearWindow,
    ) -> Result<BTreeMap<FuelType, f64>, StorageError> {
        let sums = aggregate::parse_categories(self.sums_by("fuel_type", window).await?)?;
        Ok(report::percentage_breakdown(sums))
    }

    async fn emission_percentage_by_year(
        &self,
        window: &YearWindow,
    ) -> Result<BTreeMap<EmissionType, f64>, StorageError> {
        let sums = aggregate::parse_categories(self.sums_by("emission_type", window).await?)?;
        Ok(report::percentage_breakdown(sums))
    }

    async fn average_monthly_consumption(
        &self,
        window: &YearWindow,
    ) -> Result<Option<f64>, StorageError> {
        self.scalar(
            "SELECT AVG(quantity) AS value FROM fuel WHERE datetime BETWEEN $1 AND $2",
            "fetching average fuel consumption",
            window,
        )
        .await
    }

    async fn sum_by_year(&self, window: &YearWindow) -> Result<Option<f64>, StorageError> {
        self.scalar(
            "SELECT SUM(quantity) AS value FROM fuel WHERE datetime BETWEEN $1 AND $2",
            "fetching fuel sum by year",
            window,
        )
        .await
    }

    async fn min_and_max_month_by_year(
        &self,
        window: &YearWindow,
    ) -> Result<Option<MonthExtremes>, StorageError> {
        let sql = format!(
            "SELECT {MONTH_BUCKET} AS month, SUM(quantity) AS value \
             FROM fuel WHERE datetime BETWEEN $1 AND $2 \
             GROUP BY 1 ORDER BY 1"
        );
        let rows: Vec<MonthValue> = aggregate::fetch_all(
            &self.db,
            "fetching min and max fuel month",
            aggregate::statement(&sql, aggregate::window_values(window)),
        )
        .await?;
        Ok(report::month_extremes(&aggregate::month_pairs(rows)))
    }
}
