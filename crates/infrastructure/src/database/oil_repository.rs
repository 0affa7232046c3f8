use std::collections::BTreeMap;

use async_trait::async_trait;
use domain::period::month_name;
use domain::report::{self, MonthlyValues};
use domain::{Literal, Oil, OilRepository, OilType, StorageError, YearWindow};
use sea_orm::DatabaseConnection;

use super::aggregate::{self, CategoryValue, MONTH_BUCKET, MonthOnly, MonthValue};
use super::entities::oil;
use super::sea_orm_crud;

pub struct SeaOrmOilRepository {
    db: DatabaseConnection,
}

impl SeaOrmOilRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

sea_orm_crud!(SeaOrmOilRepository, Oil, oil);

#[async_trait]
impl OilRepository for SeaOrmOilRepository {
    async fn monthly_consumption_by_type_and_year(
        &self,
        window: &YearWindow,
        oil_type: OilType,
    ) -> Result<MonthlyValues<f64>, StorageError> {
        let sql = format!(
            "SELECT {MONTH_BUCKET} AS month, SUM(quantity) AS value \
             FROM oil \
             WHERE datetime BETWEEN $1 AND $2 AND oil_type = $3::oil_type \
             GROUP BY 1 ORDER BY 1"
        );
        let mut values = aggregate::window_values(window);
        values.push(oil_type.as_str().into());

        let rows: Vec<MonthValue> = aggregate::fetch_all(
            &self.db,
            "fetching monthly oil consumption",
            aggregate::statement(&sql, values),
        )
        .await?;
        Ok(MonthlyValues::zero_filled(aggregate::month_pairs(rows)))
    }

    async fn min_loss_month_by_type_and_year(
        &self,
        window: &YearWindow,
        oil_type: OilType,
    ) -> Result<Option<String>, StorageError> {
        let sql = format!(
            "SELECT {MONTH_BUCKET} AS month \
             FROM oil \
             WHERE datetime BETWEEN $1 AND $2 AND oil_type = $3::oil_type \
             ORDER BY quantity ASC, datetime ASC, id ASC LIMIT 1"
        );
        let mut values = aggregate::window_values(window);
        values.push(oil_type.as_str().into());

        let row: Option<MonthOnly> = aggregate::fetch_one(
            &self.db,
            "fetching min loss oil month",
            aggregate::statement(&sql, values),
        )
        .await?;
        Ok(row
            .and_then(|r| u32::try_from(r.month).ok())
            .and_then(month_name)
            .map(str::to_string))
    }

    async fn average_consumption_per_type(
        &self,
        window: &YearWindow,
    ) -> Result<BTreeMap<OilType, f64>, StorageError> {
        let rows: Vec<CategoryValue> = aggregate::fetch_all(
            &self.db,
            "fetching average oil consumption per type",
            aggregate::statement(
                "SELECT oil_type::text AS category, AVG(quantity) AS value \
                 FROM oil WHERE datetime BETWEEN $1 AND $2 GROUP BY oil_type",
                aggregate::window_values(window),
            ),
        )
        .await?;
        let averages =
            aggregate::parse_categories(rows.into_iter().map(|r| (r.category, r.value)).collect())?;
        Ok(report::rounded_averages(averages))
    }
}
