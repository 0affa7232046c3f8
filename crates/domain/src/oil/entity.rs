use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::literal::{EmissionType, literal_enum};
use crate::patch::FieldPatch;
use crate::record::{Measurement, Record, ensure_quantity};

literal_enum! {
    OilType {
        Refrigerante => "REFRIGERANTE",
        Aceite => "ACEITE",
    }
}

literal_enum! {
    OilCategory {
        ConsumoAdministrativo => "CONSUMO_ADMINISTRATIVO",
        ConsumoLogistico => "CONSUMO_LOGISTICO",
        ConsumoDeOperacion => "CONSUMO_DE_OPERACION",
    }
}

/// Oil or refrigerant consumption reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Oil {
    pub id: i32,
    pub quantity: f64,
    pub description: Option<String>,
    pub datetime: DateTime<Utc>,
    pub oil_type: OilType,
    pub oil_category: OilCategory,
    pub emission_type: EmissionType,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOil {
    pub quantity: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "crate::period::deserialize_instant")]
    pub datetime: DateTime<Utc>,
    pub oil_type: OilType,
    pub oil_category: OilCategory,
    pub emission_type: EmissionType,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OilPatch {
    pub quantity: Option<f64>,
    #[serde(default)]
    pub description: FieldPatch<String>,
    #[serde(default, deserialize_with = "crate::period::deserialize_optional_instant")]
    pub datetime: Option<DateTime<Utc>>,
    pub oil_type: Option<OilType>,
    pub oil_category: Option<OilCategory>,
    pub emission_type: Option<EmissionType>,
}

impl Record for Oil {
    type New = NewOil;
    type Patch = OilPatch;

    const KIND: &'static str = "Oil";
    const PLURAL: &'static str = "Oils";

    fn id(&self) -> i32 {
        self.id
    }

    fn assemble(id: i32, new: NewOil, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            quantity: new.quantity,
            description: new.description,
            datetime: new.datetime,
            oil_type: new.oil_type,
            oil_category: new.oil_category,
            emission_type: new.emission_type,
            created_at,
            updated_at: None,
        }
    }

    fn apply_patch(mut self, patch: OilPatch) -> Self {
        self.quantity = patch.quantity.unwrap_or(self.quantity);
        self.description = patch.description.apply(self.description);
        self.datetime = patch.datetime.unwrap_or(self.datetime);
        self.oil_type = patch.oil_type.unwrap_or(self.oil_type);
        self.oil_category = patch.oil_category.unwrap_or(self.oil_category);
        self.emission_type = patch.emission_type.unwrap_or(self.emission_type);
        self
    }

    fn touch(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = Some(updated_at);
    }

    fn validate_new(new: &NewOil) -> Result<(), AppError> {
        ensure_quantity(new.quantity)
    }

    fn validate_patch(patch: &OilPatch) -> Result<(), AppError> {
        patch.quantity.map_or(Ok(()), ensure_quantity)
    }
}

impl Measurement for Oil {
    fn datetime(&self) -> DateTime<Utc> {
        self.datetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_oil_category_parses_literal() {
        assert_eq!(
            OilCategory::from_str("CONSUMO_DE_OPERACION").unwrap(),
            OilCategory::ConsumoDeOperacion
        );
        assert!(OilCategory::from_str("CONSUMO_DE_DISTRIBUCION").is_err());
    }

    #[test]
    fn test_patch_sets_description() {
        let oil = Oil::assemble(
            7,
            NewOil {
                quantity: 3.0,
                description: None,
                datetime: Utc::now(),
                oil_type: OilType::Aceite,
                oil_category: OilCategory::ConsumoLogistico,
                emission_type: EmissionType::EmisionesDirectas,
            },
            Utc::now(),
        );
        let patch: OilPatch =
            serde_json::from_str(r#"{"description": "cambio", "oil_type": "REFRIGERANTE"}"#)
                .unwrap();
        let updated = oil.apply_patch(patch);

        assert_eq!(updated.id, 7);
        assert_eq!(updated.description.as_deref(), Some("cambio"));
        assert_eq!(updated.oil_type, OilType::Refrigerante);
        assert_eq!(updated.quantity, 3.0);
    }
}
