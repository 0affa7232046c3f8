use domain::report::MonthlyValues;
use domain::{AppError, Oil, OilRepository, OilType, YearWindow};

use crate::record_service::{RecordService, datasource_error};

pub type OilService = RecordService<Oil, dyn OilRepository>;

impl OilService {
    pub async fn monthly_consumption_by_type_and_year(
        &self,
        year: i32,
        oil_type: OilType,
    ) -> Result<MonthlyValues<f64>, AppError> {
        let window = YearWindow::new(year)?;
        self.repository()
            .monthly_consumption_by_type_and_year(&window, oil_type)
            .await
            .map_err(datasource_error(
                "Error while fetching monthly Oil consumption by type and year",
            ))
    }

    /// Month name of the smallest single loss, `None` without rows
    pub async fn min_loss_month_by_type_and_year(
        &self,
        year: i32,
        oil_type: OilType,
    ) -> Result<Option<String>, AppError> {
        let window = YearWindow::new(year)?;
        self.repository()
            .min_loss_month_by_type_and_year(&window, oil_type)
            .await
            .map_err(datasource_error(
                "Error while fetching min loss month by type and year",
            ))
    }
}
