use async_trait::async_trait;

use super::{Energy, EnergyLocation};
use crate::error::StorageError;
use crate::period::YearWindow;
use crate::record::CrudRepository;
use crate::report::MonthlyValues;

#[async_trait]
pub trait EnergyRepository: CrudRepository<Energy> {
    /// Average quantity per month for one location, 2-dp, zero-filled
    async fn average_monthly_by_location_and_year(
        &self,
        window: &YearWindow,
        location: EnergyLocation,
    ) -> Result<MonthlyValues<f64>, StorageError>;

    /// Total quantity in the window, `None` when no rows match
    async fn sum_by_year(&self, window: &YearWindow) -> Result<Option<f64>, StorageError>;
}
