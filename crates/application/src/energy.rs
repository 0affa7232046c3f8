use domain::report::LocationAverage;
use domain::{AppError, Energy, EnergyLocation, EnergyRepository, YearWindow};

use crate::record_service::{RecordService, datasource_error};

pub type EnergyService = RecordService<Energy, dyn EnergyRepository>;

impl EnergyService {
    /// Monthly averages for `location`, or a flat `0.0` when the year has no rows there
    pub async fn average_monthly_by_location_and_year(
        &self,
        year: i32,
        location: EnergyLocation,
    ) -> Result<LocationAverage, AppError> {
        let window = YearWindow::new(year)?;
        let averages = self
            .repository()
            .average_monthly_by_location_and_year(&window, location)
            .await
            .map_err(datasource_error(
                "Error while fetching average monthly Energy by location and year",
            ))?;

        if averages.populated() == 0 {
            return Ok(LocationAverage::Flat(0.0));
        }
        Ok(LocationAverage::Monthly(averages))
    }
}
