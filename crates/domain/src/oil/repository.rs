use std::collections::BTreeMap;

use async_trait::async_trait;

use super::{Oil, OilType};
use crate::error::StorageError;
use crate::period::YearWindow;
use crate::record::CrudRepository;
use crate::report::MonthlyValues;

#[async_trait]
pub trait OilRepository: CrudRepository<Oil> {
    /// Summed quantity per month for one oil type, zero-filled
    async fn monthly_consumption_by_type_and_year(
        &self,
        window: &YearWindow,
        oil_type: OilType,
    ) -> Result<MonthlyValues<f64>, StorageError>;

    /// Month name of the single smallest reading for one oil type
    async fn min_loss_month_by_type_and_year(
        &self,
        window: &YearWindow,
        oil_type: OilType,
    ) -> Result<Option<String>, StorageError>;

    /// 2-dp average quantity per oil type, zero-filled
    async fn average_consumption_per_type(
        &self,
        window: &YearWindow,
    ) -> Result<BTreeMap<OilType, f64>, StorageError>;
}
