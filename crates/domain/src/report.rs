//! Shaping of aggregate query results.
//!
//! Repositories compute raw buckets (per month or per category) and hand
//! them to these functions, which apply the zero-fill policy, rounding and
//! the percentage / fixed-divisor formulas. No I/O happens here.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::literal::Literal;
use crate::oil::OilType;
use crate::period::{month_name, round2};

pub const MONTHS_PER_YEAR: u32 = 12;

/// Key under which the fuel average joins the oil averages
pub const FUEL_SUMMARY_KEY: &str = "COMBUSTIBLE";

/// Values for months 1-12, serialized as `{"1": .., "12": ..}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MonthlyValues<T> {
    values: BTreeMap<u32, T>,
    #[serde(skip)]
    populated: usize,
}

impl<T: Copy + Default> MonthlyValues<T> {
    /// Every month present, missing buckets set to zero
    pub fn zero_filled(rows: impl IntoIterator<Item = (u32, T)>) -> Self {
        let mut values: BTreeMap<u32, T> = (1..=MONTHS_PER_YEAR)
            .map(|month| (month, T::default()))
            .collect();
        let mut populated = 0;
        for (month, value) in rows {
            if let Some(slot) = values.get_mut(&month) {
                *slot = value;
                populated += 1;
            }
        }
        Self { values, populated }
    }

    pub fn get(&self, month: u32) -> Option<T> {
        self.values.get(&month).copied()
    }

    /// Number of months that came from actual rows
    pub fn populated(&self) -> usize {
        self.populated
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, T)> + '_ {
        self.values.iter().map(|(month, value)| (*month, *value))
    }
}

/// Average by location: a month map, or a flat zero when the year had no rows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LocationAverage {
    Monthly(MonthlyValues<f64>),
    Flat(f64),
}

/// Map holding every variant of `K`, missing categories set to zero
pub fn zero_filled_categories<K, V>(rows: impl IntoIterator<Item = (K, V)>) -> BTreeMap<K, V>
where
    K: Literal,
    V: Default,
{
    let mut map: BTreeMap<K, V> = K::ALL.iter().map(|k| (*k, V::default())).collect();
    map.extend(rows);
    map
}

/// Share of the yearly total per category, as a 2-decimal fraction
pub fn percentage_breakdown<K: Literal>(sums: Vec<(K, f64)>) -> BTreeMap<K, f64> {
    let total: f64 = sums.iter().map(|(_, sum)| sum).sum();
    if total <= 0.0 {
        return zero_filled_categories(std::iter::empty());
    }
    zero_filled_categories(
        sums.into_iter()
            .map(|(category, sum)| (category, round2(sum / total))),
    )
}

/// Yearly sum per category divided by twelve, regardless of populated months
pub fn fixed_monthly_average<K: Literal>(sums: Vec<(K, i64)>) -> BTreeMap<K, i64> {
    zero_filled_categories(
        sums.into_iter()
            .map(|(category, sum)| (category, sum / i64::from(MONTHS_PER_YEAR))),
    )
}

/// Per-category averages rounded to two decimals
pub fn rounded_averages<K: Literal>(averages: Vec<(K, f64)>) -> BTreeMap<K, f64> {
    zero_filled_categories(
        averages
            .into_iter()
            .map(|(category, avg)| (category, round2(avg))),
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthExtremes {
    pub lowest: String,
    pub highest: String,
}

/// Lowest and highest month by summed quantity; ties go to the earlier month
pub fn month_extremes(monthly_sums: &[(u32, f64)]) -> Option<MonthExtremes> {
    let mut sorted: Vec<(u32, f64)> = monthly_sums.to_vec();
    sorted.sort_by_key(|(month, _)| *month);

    let mut iter = sorted.into_iter();
    let first = iter.next()?;
    let (mut lowest, mut highest) = (first, first);
    for bucket in iter {
        if bucket.1 < lowest.1 {
            lowest = bucket;
        }
        if bucket.1 > highest.1 {
            highest = bucket;
        }
    }

    Some(MonthExtremes {
        lowest: month_name(lowest.0)?.to_string(),
        highest: month_name(highest.0)?.to_string(),
    })
}

/// Fuel and energy shares of their combined yearly consumption
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyFuelShare {
    pub fuel_percentage: f64,
    pub energy_percentage: f64,
}

impl EnergyFuelShare {
    /// `None` when both sums are zero or missing
    pub fn from_sums(fuel_sum: Option<f64>, energy_sum: Option<f64>) -> Option<Self> {
        let fuel = fuel_sum.unwrap_or(0.0);
        let energy = energy_sum.unwrap_or(0.0);
        let total = fuel + energy;
        if total == 0.0 {
            return None;
        }
        Some(Self {
            fuel_percentage: round2(fuel / total),
            energy_percentage: round2(energy / total),
        })
    }
}

/// Oil averages per type plus the fuel average under `COMBUSTIBLE`
pub fn consumption_summary(
    oil_averages: BTreeMap<OilType, f64>,
    fuel_average: Option<f64>,
) -> BTreeMap<String, f64> {
    let mut summary: BTreeMap<String, f64> = oil_averages
        .into_iter()
        .map(|(oil_type, avg)| (oil_type.as_str().to_string(), avg))
        .collect();
    summary.insert(
        FUEL_SUMMARY_KEY.to_string(),
        round2(fuel_average.unwrap_or(0.0)),
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuel::FuelType;
    use crate::literal::EmissionType;
    use crate::roadtrip::RoadtripGroup;
    use serde_json::json;

    #[test]
    fn test_monthly_zero_fill_without_rows() {
        let values = MonthlyValues::<f64>::zero_filled(Vec::new());
        assert_eq!(values.populated(), 0);

        let json = serde_json::to_value(&values).unwrap();
        let map = json.as_object().unwrap();
        assert_eq!(map.len(), 12);
        for month in 1..=12 {
            assert_eq!(map[&month.to_string()], json!(0.0));
        }
    }

    #[test]
    fn test_monthly_zero_fill_partial() {
        let values = MonthlyValues::zero_filled(vec![(3, 10.5), (11, 2.25)]);
        assert_eq!(values.populated(), 2);
        assert_eq!(values.get(3), Some(10.5));
        assert_eq!(values.get(11), Some(2.25));
        assert_eq!(values.get(1), Some(0.0));
        assert_eq!(values.iter().count(), 12);
    }

    #[test]
    fn test_monthly_ignores_out_of_range_months() {
        let values = MonthlyValues::zero_filled(vec![(0, 1.0), (13, 1.0)]);
        assert_eq!(values.populated(), 0);
        assert_eq!(values.iter().count(), 12);
    }

    #[test]
    fn test_location_average_serializes_untagged() {
        assert_eq!(
            serde_json::to_value(LocationAverage::Flat(0.0)).unwrap(),
            json!(0.0)
        );
        let monthly = LocationAverage::Monthly(MonthlyValues::zero_filled(vec![(1, 4.0)]));
        assert_eq!(serde_json::to_value(monthly).unwrap()["1"], json!(4.0));
    }

    #[test]
    fn test_percentage_breakdown_without_rows() {
        let breakdown = percentage_breakdown::<FuelType>(Vec::new());
        assert_eq!(
            serde_json::to_value(&breakdown).unwrap(),
            json!({
                "COMBUSTIBLE_ADMINISTRATIVO": 0.0,
                "COMBUSTIBLE_INDIRECTO_DE_PROVEEDOR": 0.0,
                "COMBUSTIBLE_DE_LOGISTICA": 0.0,
            })
        );
    }

    #[test]
    fn test_percentage_breakdown_sums_to_one() {
        let breakdown = percentage_breakdown(vec![
            (EmissionType::EmisionesDirectas, 100.0),
            (EmissionType::EmisionesIndirectas, 250.0),
            (EmissionType::OtrasEmisionesIndirectas, 150.0),
        ]);
        assert_eq!(breakdown[&EmissionType::EmisionesDirectas], 0.2);
        assert_eq!(breakdown[&EmissionType::EmisionesIndirectas], 0.5);
        assert_eq!(breakdown[&EmissionType::OtrasEmisionesIndirectas], 0.3);

        let total: f64 = breakdown.values().sum();
        assert!((total - 1.0).abs() < 0.02);
    }

    #[test]
    fn test_percentage_breakdown_fills_missing_category() {
        let breakdown = percentage_breakdown(vec![(FuelType::CombustibleDeLogistica, 40.0)]);
        assert_eq!(breakdown.len(), 3);
        assert_eq!(breakdown[&FuelType::CombustibleDeLogistica], 1.0);
        assert_eq!(breakdown[&FuelType::CombustibleAdministrativo], 0.0);
    }

    #[test]
    fn test_fixed_monthly_average_uses_integer_division() {
        let averages = fixed_monthly_average(vec![(RoadtripGroup::EquipoDeVentas, 100)]);
        assert_eq!(averages[&RoadtripGroup::EquipoDeVentas], 8);
        assert_eq!(averages[&RoadtripGroup::EquipoAdministrativo], 0);
        assert_eq!(
            serde_json::to_value(&averages).unwrap(),
            json!({"EQUIPO_DE_VENTAS": 8, "EQUIPO_ADMINISTRATIVO": 0})
        );
    }

    #[test]
    fn test_month_extremes() {
        let extremes = month_extremes(&[(3, 50.0), (1, 20.0), (7, 90.0), (5, 20.0)]).unwrap();
        assert_eq!(extremes.lowest, "January");
        assert_eq!(extremes.highest, "July");
        assert_eq!(month_extremes(&[]), None);
    }

    #[test]
    fn test_energy_fuel_share() {
        let share = EnergyFuelShare::from_sums(Some(30.0), Some(70.0)).unwrap();
        assert_eq!(share.fuel_percentage, 0.3);
        assert_eq!(share.energy_percentage, 0.7);

        let fuel_only = EnergyFuelShare::from_sums(Some(5.0), None).unwrap();
        assert_eq!(fuel_only.fuel_percentage, 1.0);
        assert_eq!(fuel_only.energy_percentage, 0.0);

        assert_eq!(EnergyFuelShare::from_sums(None, None), None);
        assert_eq!(EnergyFuelShare::from_sums(Some(0.0), Some(0.0)), None);
    }

    #[test]
    fn test_consumption_summary() {
        let oil = rounded_averages(vec![(OilType::Aceite, 12.345)]);
        let summary = consumption_summary(oil, Some(7.891));
        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({"ACEITE": 12.35, "REFRIGERANTE": 0.0, "COMBUSTIBLE": 7.89})
        );

        let empty = consumption_summary(rounded_averages(Vec::new()), None);
        assert_eq!(empty[FUEL_SUMMARY_KEY], 0.0);
        assert_eq!(empty.len(), 3);
    }
}
