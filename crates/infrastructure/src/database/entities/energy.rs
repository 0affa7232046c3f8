use chrono::{DateTime, Utc};
use domain::energy::{Energy, NewEnergy};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use super::enums::{DbEmissionType, DbEnergyCategory, DbEnergyLocation};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "energy")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub quantity: f64,
    pub description: Option<String>,
    pub datetime: DateTimeUtc,
    pub location: DbEnergyLocation,
    pub energy_category: DbEnergyCategory,
    pub emission_type: DbEmissionType,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Energy {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            quantity: model.quantity,
            description: model.description,
            datetime: model.datetime,
            location: model.location.into(),
            energy_category: model.energy_category.into(),
            emission_type: model.emission_type.into(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl ActiveModel {
    pub fn from_new(new: NewEnergy, created_at: DateTime<Utc>) -> Self {
        Self {
            id: NotSet,
            quantity: Set(new.quantity),
            description: Set(new.description),
            datetime: Set(new.datetime),
            location: Set(new.location.into()),
            energy_category: Set(new.energy_category.into()),
            emission_type: Set(new.emission_type.into()),
            created_at: Set(created_at),
            updated_at: Set(None),
        }
    }

    pub fn from_record(record: &Energy) -> Self {
        Self {
            id: Set(record.id),
            quantity: Set(record.quantity),
            description: Set(record.description.clone()),
            datetime: Set(record.datetime),
            location: Set(record.location.into()),
            energy_category: Set(record.energy_category.into()),
            emission_type: Set(record.emission_type.into()),
            created_at: Set(record.created_at),
            updated_at: Set(record.updated_at),
        }
    }
}
