use std::collections::BTreeMap;

use domain::period::round2;
use domain::report::MonthExtremes;
use domain::{AppError, EmissionType, Fuel, FuelRepository, FuelType, YearWindow};

use crate::record_service::{RecordService, datasource_error};

pub type FuelService = RecordService<Fuel, dyn FuelRepository>;

const CONSUMPTION_REPORT_ERROR: &str = "Error while fetching consumed fuel by year and fuel type";

impl FuelService {
    pub async fn consumed_percentage_by_year(
        &self,
        year: i32,
    ) -> Result<BTreeMap<FuelType, f64>, AppError> {
        let window = YearWindow::new(year)?;
        self.repository()
            .consumed_percentage_by_year(&window)
            .await
            .map_err(datasource_error(CONSUMPTION_REPORT_ERROR))
    }

    /// Average quantity over the year's rows, `0.0` without rows
    pub async fn average_monthly_consumption(&self, year: i32) -> Result<f64, AppError> {
        let window = YearWindow::new(year)?;
        let average = self
            .repository()
            .average_monthly_consumption(&window)
            .await
            .map_err(datasource_error(CONSUMPTION_REPORT_ERROR))?;
        Ok(round2(average.unwrap_or(0.0)))
    }

    pub async fn emission_percentage_by_year(
        &self,
        year: i32,
    ) -> Result<BTreeMap<EmissionType, f64>, AppError> {
        let window = YearWindow::new(year)?;
        self.repository()
            .emission_percentage_by_year(&window)
            .await
            .map_err(datasource_error(CONSUMPTION_REPORT_ERROR))
    }

    pub async fn min_and_max_month_by_year(
        &self,
        year: i32,
    ) -> Result<Option<MonthExtremes>, AppError> {
        let window = YearWindow::new(year)?;
        self.repository()
            .min_and_max_month_by_year(&window)
            .await
            .map_err(datasource_error(
                "Error while fetching min and max consumption month by year",
            ))
    }
}
