use std::collections::BTreeMap;

use domain::{AppError, Roadtrip, RoadtripGroup, RoadtripRepository, YearWindow};

use crate::record_service::{RecordService, datasource_error};

pub type RoadtripService = RecordService<Roadtrip, dyn RoadtripRepository>;

impl RoadtripService {
    /// Yearly trips per group divided by twelve
    pub async fn monthly_average_by_group(
        &self,
        year: i32,
    ) -> Result<BTreeMap<RoadtripGroup, i64>, AppError> {
        let window = YearWindow::new(year)?;
        self.repository()
            .monthly_average_by_group(&window)
            .await
            .map_err(datasource_error(
                "Error while fetching average monthly Roadtrip comparative by year",
            ))
    }
}
