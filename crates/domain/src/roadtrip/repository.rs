use std::collections::BTreeMap;

use async_trait::async_trait;

use super::{Roadtrip, RoadtripGroup};
use crate::error::StorageError;
use crate::period::YearWindow;
use crate::record::CrudRepository;

#[async_trait]
pub trait RoadtripRepository: CrudRepository<Roadtrip> {
    /// Yearly trip total per group divided by twelve
    async fn monthly_average_by_group(
        &self,
        window: &YearWindow,
    ) -> Result<BTreeMap<RoadtripGroup, i64>, StorageError>;
}
