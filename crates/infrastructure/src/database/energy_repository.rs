use async_trait::async_trait;
use domain::period::round2;
use domain::report::MonthlyValues;
use domain::{Energy, EnergyLocation, EnergyRepository, Literal, StorageError, YearWindow};
use sea_orm::DatabaseConnection;

use super::aggregate::{self, MONTH_BUCKET, MonthValue, Scalar};
use super::entities::energy;
use super::sea_orm_crud;

pub struct SeaOrmEnergyRepository {
    db: DatabaseConnection,
}

impl SeaOrmEnergyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

sea_orm_crud!(SeaOrmEnergyRepository, Energy, energy);

#[async_trait]
impl EnergyRepository for SeaOrmEnergyRepository {
    async fn average_monthly_by_location_and_year(
        &self,
        window: &YearWindow,
        location: EnergyLocation,
    ) -> Result<MonthlyValues<f64>, StorageError> {
        let sql = format!(
            "SELECT {MONTH_BUCKET} AS month, AVG(quantity) AS value \
             FROM energy \
             WHERE datetime BETWEEN $1 AND $2 AND location = $3::energy_location \
             GROUP BY 1 ORDER BY 1"
        );
        let mut values = aggregate::window_values(window);
        values.push(location.as_str().into());

        let rows: Vec<MonthValue> = aggregate::fetch_all(
            &self.db,
            "fetching average energy by location and year",
            aggregate::statement(&sql, values),
        )
        .await?;

        Ok(MonthlyValues::zero_filled(
            aggregate::month_pairs(rows)
                .into_iter()
                .map(|(month, avg)| (month, round2(avg))),
        ))
    }

    async fn sum_by_year(&self, window: &YearWindow) -> Result<Option<f64>, StorageError> {
        let row: Option<Scalar> = aggregate::fetch_one(
            &self.db,
            "fetching energy sum by year",
            aggregate::statement(
                "SELECT SUM(quantity) AS value FROM energy WHERE datetime BETWEEN $1 AND $2",
                aggregate::window_values(window),
            ),
        )
        .await?;
        Ok(row.and_then(|r| r.value))
    }
}
