use std::collections::BTreeMap;

use async_trait::async_trait;
use domain::report;
use domain::{Roadtrip, RoadtripGroup, RoadtripRepository, StorageError, YearWindow};
use sea_orm::DatabaseConnection;

use super::aggregate::{self, CategoryCount};
use super::entities::roadtrip;
use super::sea_orm_crud;

pub struct SeaOrmRoadtripRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoadtripRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

sea_orm_crud!(SeaOrmRoadtripRepository, Roadtrip, roadtrip);

#[async_trait]
impl RoadtripRepository for SeaOrmRoadtripRepository {
    async fn monthly_average_by_group(
        &self,
        window: &YearWindow,
    ) -> Result<BTreeMap<RoadtripGroup, i64>, StorageError> {
        // "group" is a reserved word
        let rows: Vec<CategoryCount> = aggregate::fetch_all(
            &self.db,
            "fetching roadtrip comparative by group",
            aggregate::statement(
                r#"SELECT "group"::text AS category, SUM(quantity)::bigint AS value
                   FROM roadtrip WHERE datetime BETWEEN $1 AND $2 GROUP BY "group""#,
                aggregate::window_values(window),
            ),
        )
        .await?;
        let sums =
            aggregate::parse_categories(rows.into_iter().map(|r| (r.category, r.value)).collect())?;
        Ok(report::fixed_monthly_average(sums))
    }
}
