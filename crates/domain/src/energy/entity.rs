use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::literal::{EmissionType, literal_enum};
use crate::patch::FieldPatch;
use crate::record::{Measurement, Record, ensure_quantity};

literal_enum! {
    /// Site where the energy was consumed
    #[derive(Default)]
    EnergyLocation {
        Local => "LOCAL",
        OficinasAdministrativas => "OFICINAS_ADMINISTRATIVAS",
        PlantaDeEnvasado => "PLANTA_DE_ENVASADO",
        #[default]
        Desconocido => "DESCONOCIDO",
    }
}

literal_enum! {
    EnergyCategory {
        ConsumoAdministrativo => "CONSUMO_ADMINISTRATIVO",
        ConsumoLogistico => "CONSUMO_LOGISTICO",
        ConsumoDeDistribucion => "CONSUMO_DE_DISTRIBUCION",
    }
}

/// Electric energy consumption reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Energy {
    pub id: i32,
    pub quantity: f64,
    pub description: Option<String>,
    pub datetime: DateTime<Utc>,
    pub location: EnergyLocation,
    pub energy_category: EnergyCategory,
    pub emission_type: EmissionType,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEnergy {
    pub quantity: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "crate::period::deserialize_instant")]
    pub datetime: DateTime<Utc>,
    #[serde(default)]
    pub location: EnergyLocation,
    pub energy_category: EnergyCategory,
    pub emission_type: EmissionType,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EnergyPatch {
    pub quantity: Option<f64>,
    #[serde(default)]
    pub description: FieldPatch<String>,
    #[serde(default, deserialize_with = "crate::period::deserialize_optional_instant")]
    pub datetime: Option<DateTime<Utc>>,
    pub location: Option<EnergyLocation>,
    pub energy_category: Option<EnergyCategory>,
    pub emission_type: Option<EmissionType>,
}

impl Record for Energy {
    type New = NewEnergy;
    type Patch = EnergyPatch;

    const KIND: &'static str = "Energy";
    const PLURAL: &'static str = "Energies";

    fn id(&self) -> i32 {
        self.id
    }

    fn assemble(id: i32, new: NewEnergy, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            quantity: new.quantity,
            description: new.description,
            datetime: new.datetime,
            location: new.location,
            energy_category: new.energy_category,
            emission_type: new.emission_type,
            created_at,
            updated_at: None,
        }
    }

    fn apply_patch(mut self, patch: EnergyPatch) -> Self {
        self.quantity = patch.quantity.unwrap_or(self.quantity);
        self.description = patch.description.apply(self.description);
        self.datetime = patch.datetime.unwrap_or(self.datetime);
        self.location = patch.location.unwrap_or(self.location);
        self.energy_category = patch.energy_category.unwrap_or(self.energy_category);
        self.emission_type = patch.emission_type.unwrap_or(self.emission_type);
        self
    }

    fn touch(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = Some(updated_at);
    }

    fn validate_new(new: &NewEnergy) -> Result<(), AppError> {
        ensure_quantity(new.quantity)
    }

    fn validate_patch(patch: &EnergyPatch) -> Result<(), AppError> {
        patch.quantity.map_or(Ok(()), ensure_quantity)
    }
}

impl Measurement for Energy {
    fn datetime(&self) -> DateTime<Utc> {
        self.datetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Energy {
        Energy::assemble(
            1,
            NewEnergy {
                quantity: 120.5,
                description: Some("Planta".to_string()),
                datetime: Utc.with_ymd_and_hms(2023, 3, 10, 8, 0, 0).unwrap(),
                location: EnergyLocation::PlantaDeEnvasado,
                energy_category: EnergyCategory::ConsumoLogistico,
                emission_type: EmissionType::EmisionesIndirectas,
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_location_defaults_to_unknown() {
        let new: NewEnergy = serde_json::from_str(
            r#"{
                "quantity": 10,
                "datetime": "2023-01-05T00:00:00Z",
                "energy_category": "CONSUMO_ADMINISTRATIVO",
                "emission_type": "EMISIONES_DIRECTAS"
            }"#,
        )
        .unwrap();
        assert_eq!(new.location, EnergyLocation::Desconocido);
        assert_eq!(new.description, None);
    }

    #[test]
    fn test_unknown_location_rejected() {
        let result = serde_json::from_str::<NewEnergy>(
            r#"{
                "quantity": 10,
                "datetime": "2023-01-05T00:00:00Z",
                "location": "BODEGA",
                "energy_category": "CONSUMO_ADMINISTRATIVO",
                "emission_type": "EMISIONES_DIRECTAS"
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_keeps_absent_fields() {
        let patch: EnergyPatch = serde_json::from_str(r#"{"quantity": 99.0}"#).unwrap();
        let updated = sample().apply_patch(patch);

        assert_eq!(updated.quantity, 99.0);
        assert_eq!(updated.description.as_deref(), Some("Planta"));
        assert_eq!(updated.location, EnergyLocation::PlantaDeEnvasado);
        assert_eq!(updated.energy_category, EnergyCategory::ConsumoLogistico);
    }

    #[test]
    fn test_patch_null_clears_description_only() {
        let patch: EnergyPatch =
            serde_json::from_str(r#"{"description": null, "location": null}"#).unwrap();
        let updated = sample().apply_patch(patch);

        assert_eq!(updated.description, None);
        assert_eq!(updated.location, EnergyLocation::PlantaDeEnvasado);
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let patch = EnergyPatch {
            quantity: Some(-1.0),
            ..Default::default()
        };
        assert!(Energy::validate_patch(&patch).is_err());
        assert!(Energy::validate_patch(&EnergyPatch::default()).is_ok());
    }
}
