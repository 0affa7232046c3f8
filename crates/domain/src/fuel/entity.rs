use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::literal::{EmissionType, literal_enum};
use crate::patch::FieldPatch;
use crate::record::{Measurement, Record, ensure_quantity};

literal_enum! {
    FuelType {
        CombustibleAdministrativo => "COMBUSTIBLE_ADMINISTRATIVO",
        CombustibleIndirectoDeProveedor => "COMBUSTIBLE_INDIRECTO_DE_PROVEEDOR",
        CombustibleDeLogistica => "COMBUSTIBLE_DE_LOGISTICA",
    }
}

/// Fuel consumption reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fuel {
    pub id: i32,
    pub quantity: f64,
    pub description: Option<String>,
    pub datetime: DateTime<Utc>,
    pub fuel_type: FuelType,
    pub emission_type: EmissionType,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFuel {
    pub quantity: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "crate::period::deserialize_instant")]
    pub datetime: DateTime<Utc>,
    pub fuel_type: FuelType,
    pub emission_type: EmissionType,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FuelPatch {
    pub quantity: Option<f64>,
    #[serde(default)]
    pub description: FieldPatch<String>,
    #[serde(default, deserialize_with = "crate::period::deserialize_optional_instant")]
    pub datetime: Option<DateTime<Utc>>,
    pub fuel_type: Option<FuelType>,
    pub emission_type: Option<EmissionType>,
}

impl Record for Fuel {
    type New = NewFuel;
    type Patch = FuelPatch;

    const KIND: &'static str = "Fuel";
    const PLURAL: &'static str = "Fuels";

    fn id(&self) -> i32 {
        self.id
    }

    fn assemble(id: i32, new: NewFuel, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            quantity: new.quantity,
            description: new.description,
            datetime: new.datetime,
            fuel_type: new.fuel_type,
            emission_type: new.emission_type,
            created_at,
            updated_at: None,
        }
    }

    fn apply_patch(mut self, patch: FuelPatch) -> Self {
        self.quantity = patch.quantity.unwrap_or(self.quantity);
        self.description = patch.description.apply(self.description);
        self.datetime = patch.datetime.unwrap_or(self.datetime);
        self.fuel_type = patch.fuel_type.unwrap_or(self.fuel_type);
        self.emission_type = patch.emission_type.unwrap_or(self.emission_type);
        self
    }

    fn touch(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = Some(updated_at);
    }

    fn validate_new(new: &NewFuel) -> Result<(), AppError> {
        ensure_quantity(new.quantity)
    }

    fn validate_patch(patch: &FuelPatch) -> Result<(), AppError> {
        patch.quantity.map_or(Ok(()), ensure_quantity)
    }
}

impl Measurement for Fuel {
    fn datetime(&self) -> DateTime<Utc> {
        self.datetime
    }
}
