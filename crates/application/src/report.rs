use std::collections::BTreeMap;
use std::sync::Arc;

use domain::report::{self, EnergyFuelShare};
use domain::{AppError, EnergyRepository, FuelRepository, OilRepository, YearWindow};

use crate::record_service::datasource_error;

/// Reports that combine more than one resource kind
#[derive(Clone)]
pub struct ReportService {
    fuel: Arc<dyn FuelRepository>,
    energy: Arc<dyn EnergyRepository>,
    oil: Arc<dyn OilRepository>,
}

impl ReportService {
    pub fn new(
        fuel: Arc<dyn FuelRepository>,
        energy: Arc<dyn EnergyRepository>,
        oil: Arc<dyn OilRepository>,
    ) -> Self {
        Self { fuel, energy, oil }
    }

    /// Fuel and energy shares of their combined consumption in `year`
    pub async fn energy_fuel_share_by_year(&self, year: i32) -> Result<EnergyFuelShare, AppError> {
        let window = YearWindow::new(year)?;
        let fetch_error = || datasource_error("Error while fetching all Fuels");

        let fuel_sum = self.fuel.sum_by_year(&window).await.map_err(fetch_error())?;
        let energy_sum = self
            .energy
            .sum_by_year(&window)
            .await
            .map_err(fetch_error())?;

        EnergyFuelShare::from_sums(fuel_sum, energy_sum).ok_or_else(|| {
            tracing::warn!(year, "No fuel or energy consumption to compare");
            AppError::not_found("No data found for requested year")
        })
    }

    /// Oil averages per type plus the fuel average under `COMBUSTIBLE`
    pub async fn average_consumption_by_year(
        &self,
        year: i32,
    ) -> Result<BTreeMap<String, f64>, AppError> {
        let window = YearWindow::new(year)?;
        let fetch_error =
            || datasource_error("Error while fetching all average consumption for every oil type");

        let fuel_average = self
            .fuel
            .average_monthly_consumption(&window)
            .await
            .map_err(fetch_error())?;
        let oil_averages = self
            .oil
            .average_consumption_per_type(&window)
            .await
            .map_err(fetch_error())?;

        Ok(report::consumption_summary(oil_averages, fuel_average))
    }
}
