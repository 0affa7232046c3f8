use std::collections::BTreeMap;

use async_trait::async_trait;

use super::{Fuel, FuelType};
use crate::error::StorageError;
use crate::literal::EmissionType;
use crate::period::YearWindow;
use crate::record::CrudRepository;
use crate::report::MonthExtremes;

#[async_trait]
pub trait FuelRepository: CrudRepository<Fuel> {
    /// Share of the yearly total per fuel type
    async fn consumed_percentage_by_year(
        &self,
        window: &YearWindow,
    ) -> Result<BTreeMap<FuelType, f64>, StorageError>;

    /// Share of the yearly total per emission type
    async fn emission_percentage_by_year(
        &self,
        window: &YearWindow,
    ) -> Result<BTreeMap<EmissionType, f64>, StorageError>;

    /// Mean quantity over the year's rows
    async fn average_monthly_consumption(
        &self,
        window: &YearWindow,
    ) -> Result<Option<f64>, StorageError>;

    async fn sum_by_year(&self, window: &YearWindow) -> Result<Option<f64>, StorageError>;

    async fn min_and_max_month_by_year(
        &self,
        window: &YearWindow,
    ) -> Result<Option<MonthExtremes>, StorageError>;
}
