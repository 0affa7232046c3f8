use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::literal::{EmissionType, literal_enum};
use crate::patch::FieldPatch;
use crate::record::{Measurement, Record};

literal_enum! {
    /// Team that made the trip
    RoadtripGroup {
        EquipoDeVentas => "EQUIPO_DE_VENTAS",
        EquipoAdministrativo => "EQUIPO_ADMINISTRATIVO",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadtrip {
    pub id: i32,
    pub quantity: i32,
    pub description: Option<String>,
    pub datetime: DateTime<Utc>,
    pub group: RoadtripGroup,
    pub emission_type: EmissionType,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRoadtrip {
    pub quantity: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "crate::period::deserialize_instant")]
    pub datetime: DateTime<Utc>,
    pub group: RoadtripGroup,
    pub emission_type: EmissionType,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RoadtripPatch {
    pub quantity: Option<i32>,
    #[serde(default)]
    pub description: FieldPatch<String>,
    #[serde(default, deserialize_with = "crate::period::deserialize_optional_instant")]
    pub datetime: Option<DateTime<Utc>>,
    pub group: Option<RoadtripGroup>,
    pub emission_type: Option<EmissionType>,
}

fn ensure_trips(quantity: i32) -> Result<(), AppError> {
    if quantity < 0 {
        return Err(AppError::bad_request("quantity must be a non-negative number"));
    }
    Ok(())
}

impl Record for Roadtrip {
    type New = NewRoadtrip;
    type Patch = RoadtripPatch;

    const KIND: &'static str = "Roadtrip";
    const PLURAL: &'static str = "Roadtrips";

    fn id(&self) -> i32 {
        self.id
    }

    fn assemble(id: i32, new: NewRoadtrip, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            quantity: new.quantity,
            description: new.description,
            datetime: new.datetime,
            group: new.group,
            emission_type: new.emission_type,
            created_at,
            updated_at: None,
        }
    }

    fn apply_patch(mut self, patch: RoadtripPatch) -> Self {
        self.quantity = patch.quantity.unwrap_or(self.quantity);
        self.description = patch.description.apply(self.description);
        self.datetime = patch.datetime.unwrap_or(self.datetime);
        self.group = patch.group.unwrap_or(self.group);
        self.emission_type = patch.emission_type.unwrap_or(self.emission_type);
        self
    }

    fn touch(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = Some(updated_at);
    }

    fn validate_new(new: &NewRoadtrip) -> Result<(), AppError> {
        ensure_trips(new.quantity)
    }

    fn validate_patch(patch: &RoadtripPatch) -> Result<(), AppError> {
        patch.quantity.map_or(Ok(()), ensure_trips)
    }
}

impl Measurement for Roadtrip {
    fn datetime(&self) -> DateTime<Utc> {
        self.datetime
    }
}
