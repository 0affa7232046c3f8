//! Reporting queries over the in-memory stores, shaped by the same domain
//! functions as the SQL implementations.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use async_trait::async_trait;
use domain::period::{month_name, round2};
use domain::report::{self, MonthExtremes, MonthlyValues};
use domain::{
    EmissionType, Energy, EnergyLocation, EnergyRepository, Fuel, FuelRepository, FuelType,
    Oil, OilRepository, OilType, Roadtrip, RoadtripGroup, RoadtripRepository, StorageError,
    YearWindow,
};

use super::in_memory::{InMemoryRepository, buckets, mean, month_of};

fn sums<K: Ord>(grouped: BTreeMap<K, Vec<f64>>) -> Vec<(K, f64)> {
    grouped
        .into_iter()
        .map(|(key, values)| (key, values.iter().sum::<f64>()))
        .collect()
}

#[async_trait]
impl EnergyRepository for InMemoryRepository<Energy> {
    async fn average_monthly_by_location_and_year(
        &self,
        window: &YearWindow,
        location: EnergyLocation,
    ) -> Result<MonthlyValues<f64>, StorageError> {
        let rows = self.in_window(window, |e| e.location == location)?;
        let averages = buckets(&rows, month_of, |e| e.quantity)
            .into_iter()
            .filter_map(|(month, values)| mean(&values).map(|avg| (month, round2(avg))));
        Ok(MonthlyValues::zero_filled(averages))
    }

    async fn sum_by_year(&self, window: &YearWindow) -> Result<Option<f64>, StorageError> {
        let rows = self.in_window(window, |_| true)?;
        if rows.is_empty() {
            return Ok(None);
        }
        Ok(Some(rows.iter().map(|e| e.quantity).sum()))
    }
}

#[async_trait]
impl FuelRepository for InMemoryRepository<Fuel> {
    async fn consumed_percentage_by_year(
        &self,
        window: &YearWindow,
    ) -> Result<BTreeMap<FuelType, f64>, StorageError> {
        let rows = self.in_window(window, |_| true)?;
        Ok(report::percentage_breakdown(sums(buckets(
            &rows,
            |f| f.fuel_type,
            |f| f.quantity,
        ))))
    }

    async fn emission_percentage_by_year(
        &self,
        window: &YearWindow,
    ) -> Result<BTreeMap<EmissionType, f64>, StorageError> {
        let rows = self.in_window(window, |_| true)?;
        Ok(report::percentage_breakdown(sums(buckets(
            &rows,
            |f| f.emission_type,
            |f| f.quantity,
        ))))
    }

    async fn average_monthly_consumption(
        &self,
        window: &YearWindow,
    ) -> Result<Option<f64>, StorageError> {
        let rows = self.in_window(window, |_| true)?;
        let quantities: Vec<f64> = rows.iter().map(|f| f.quantity).collect();
        Ok(mean(&quantities))
    }

    async fn sum_by_year(&self, window: &YearWindow) -> Result<Option<f64>, StorageError> {
        let rows = self.in_window(window, |_| true)?;
        if rows.is_empty() {
            return Ok(None);
        }
        Ok(Some(rows.iter().map(|f| f.quantity).sum()))
    }

    async fn min_and_max_month_by_year(
        &self,
        window: &YearWindow,
    ) -> Result<Option<MonthExtremes>, StorageError> {
        let rows = self.in_window(window, |_| true)?;
        let monthly = sums(buckets(&rows, month_of, |f| f.quantity));
        Ok(report::month_extremes(&monthly))
    }
}

#[async_trait]
impl OilRepository for InMemoryRepository<Oil> {
    async fn monthly_consumption_by_type_and_year(
        &self,
        window: &YearWindow,
        oil_type: OilType,
    ) -> Result<MonthlyValues<f64>, StorageError> {
        let rows = self.in_window(window, |o| o.oil_type == oil_type)?;
        Ok(MonthlyValues::zero_filled(sums(buckets(
            &rows,
            month_of,
            |o| o.quantity,
        ))))
    }

    async fn min_loss_month_by_type_and_year(
        &self,
        window: &YearWindow,
        oil_type: OilType,
    ) -> Result<Option<String>, StorageError> {
        let rows = self.in_window(window, |o| o.oil_type == oil_type)?;
        let lowest = rows.iter().min_by(|a, b| {
            a.quantity
                .partial_cmp(&b.quantity)
                .unwrap_or(Ordering::Equal)
                .then(a.datetime.cmp(&b.datetime))
                .then(a.id.cmp(&b.id))
        });
        Ok(lowest
            .and_then(|o| month_name(month_of(o)))
            .map(str::to_string))
    }

    async fn average_consumption_per_type(
        &self,
        window: &YearWindow,
    ) -> Result<BTreeMap<OilType, f64>, StorageError> {
        let rows = self.in_window(window, |_| true)?;
        let averages: Vec<(OilType, f64)> = buckets(&rows, |o| o.oil_type, |o| o.quantity)
            .into_iter()
            .filter_map(|(oil_type, values)| mean(&values).map(|avg| (oil_type, avg)))
            .collect();
        Ok(report::rounded_averages(averages))
    }
}

#[async_trait]
impl RoadtripRepository for InMemoryRepository<Roadtrip> {
    async fn monthly_average_by_group(
        &self,
        window: &YearWindow,
    ) -> Result<BTreeMap<RoadtripGroup, i64>, StorageError> {
        let rows = self.in_window(window, |_| true)?;
        let totals: Vec<(RoadtripGroup, i64)> = buckets(&rows, |r| r.group, |r| i64::from(r.quantity))
            .into_iter()
            .map(|(group, trips)| (group, trips.iter().sum::<i64>()))
            .collect();
        Ok(report::fixed_monthly_average(totals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use domain::CrudRepository;
    use domain::energy::NewEnergy;
    use domain::fuel::NewFuel;
    use domain::oil::NewOil;
    use domain::roadtrip::NewRoadtrip;
    use domain::{EnergyCategory, OilCategory};

    fn at(year: i32, month: u32, day: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 9, 30, 0).unwrap()
    }

    fn fuel(quantity: f64, month: u32, fuel_type: FuelType) -> NewFuel {
        NewFuel {
            quantity,
            description: None,
            datetime: at(2023, month, 10),
            fuel_type,
            emission_type: EmissionType::EmisionesDirectas,
        }
    }

    fn oil(quantity: f64, month: u32, oil_type: OilType) -> NewOil {
        NewOil {
            quantity,
            description: None,
            datetime: at(2023, month, 3),
            oil_type,
            oil_category: OilCategory::ConsumoDeOperacion,
            emission_type: EmissionType::EmisionesDirectas,
        }
    }

    #[tokio::test]
    async fn test_energy_average_by_location() {
        let repo = InMemoryRepository::<Energy>::new();
        let energy = |quantity, month, location| NewEnergy {
            quantity,
            description: None,
            datetime: at(2023, month, 1),
            location,
            energy_category: EnergyCategory::ConsumoAdministrativo,
            emission_type: EmissionType::EmisionesIndirectas,
        };
        repo.bulk_create(vec![
            energy(10.0, 1, EnergyLocation::Local),
            energy(20.0, 1, EnergyLocation::Local),
            energy(7.0, 2, EnergyLocation::Local),
            energy(100.0, 1, EnergyLocation::PlantaDeEnvasado),
        ])
        .await
        .unwrap();

        let window = YearWindow::new(2023).unwrap();
        let local = repo
            .average_monthly_by_location_and_year(&window, EnergyLocation::Local)
            .await
            .unwrap();
        assert_eq!(local.get(1), Some(15.0));
        assert_eq!(local.get(2), Some(7.0));
        assert_eq!(local.get(3), Some(0.0));
        assert_eq!(local.populated(), 2);

        let unknown = repo
            .average_monthly_by_location_and_year(&window, EnergyLocation::Desconocido)
            .await
            .unwrap();
        assert_eq!(unknown.populated(), 0);
    }

    #[tokio::test]
    async fn test_fuel_reports() {
        let repo = InMemoryRepository::<Fuel>::new();
        repo.bulk_create(vec![
            fuel(30.0, 1, FuelType::CombustibleAdministrativo),
            fuel(50.0, 3, FuelType::CombustibleDeLogistica),
            fuel(20.0, 3, FuelType::CombustibleDeLogistica),
        ])
        .await
        .unwrap();
        let window = YearWindow::new(2023).unwrap();

        let percentages = repo.consumed_percentage_by_year(&window).await.unwrap();
        assert_eq!(percentages[&FuelType::CombustibleAdministrativo], 0.3);
        assert_eq!(percentages[&FuelType::CombustibleDeLogistica], 0.7);
        assert_eq!(percentages[&FuelType::CombustibleIndirectoDeProveedor], 0.0);

        let extremes = repo.min_and_max_month_by_year(&window).await.unwrap().unwrap();
        assert_eq!(extremes.lowest, "January");
        assert_eq!(extremes.highest, "March");

        assert_eq!(repo.sum_by_year(&window).await.unwrap(), Some(100.0));
        let average = repo.average_monthly_consumption(&window).await.unwrap().unwrap();
        assert!((average - 33.333).abs() < 0.01);

        let empty = YearWindow::new(2020).unwrap();
        assert_eq!(repo.min_and_max_month_by_year(&empty).await.unwrap(), None);
        assert_eq!(repo.sum_by_year(&empty).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_oil_reports() {
        let repo = InMemoryRepository::<Oil>::new();
        repo.bulk_create(vec![
            oil(8.0, 2, OilType::Refrigerante),
            oil(2.0, 5, OilType::Refrigerante),
            oil(2.0, 9, OilType::Refrigerante),
            oil(4.0, 5, OilType::Aceite),
            oil(6.0, 5, OilType::Aceite),
        ])
        .await
        .unwrap();
        let window = YearWindow::new(2023).unwrap();

        let monthly = repo
            .monthly_consumption_by_type_and_year(&window, OilType::Aceite)
            .await
            .unwrap();
        assert_eq!(monthly.get(5), Some(10.0));
        assert_eq!(monthly.get(2), Some(0.0));

        let min_loss = repo
            .min_loss_month_by_type_and_year(&window, OilType::Refrigerante)
            .await
            .unwrap();
        assert_eq!(min_loss.as_deref(), Some("May"));

        let averages = repo.average_consumption_per_type(&window).await.unwrap();
        assert_eq!(averages[&OilType::Aceite], 5.0);
        assert_eq!(averages[&OilType::Refrigerante], 4.0);
    }

    #[tokio::test]
    async fn test_roadtrip_fixed_divisor() {
        let repo = InMemoryRepository::<Roadtrip>::new();
        let trip = |quantity, group| NewRoadtrip {
            quantity,
            description: None,
            datetime: at(2023, 4, 1),
            group,
            emission_type: EmissionType::OtrasEmisionesIndirectas,
        };
        repo.bulk_create(vec![
            trip(50, RoadtripGroup::EquipoDeVentas),
            trip(50, RoadtripGroup::EquipoDeVentas),
            trip(11, RoadtripGroup::EquipoAdministrativo),
        ])
        .await
        .unwrap();

        let averages = repo
            .monthly_average_by_group(&YearWindow::new(2023).unwrap())
            .await
            .unwrap();
        assert_eq!(averages[&RoadtripGroup::EquipoDeVentas], 8);
        assert_eq!(averages[&RoadtripGroup::EquipoAdministrativo], 0);
    }
}
