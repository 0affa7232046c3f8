use chrono::{DateTime, Utc};
use domain::roadtrip::{NewRoadtrip, Roadtrip};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use super::enums::{DbEmissionType, DbRoadtripGroup};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "roadtrip")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub quantity: i32,
    pub description: Option<String>,
    pub datetime: DateTimeUtc,
    pub group: DbRoadtripGroup,
    pub emission_type: DbEmissionType,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Roadtrip {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            quantity: model.quantity,
            description: model.description,
            datetime: model.datetime,
            group: model.group.into(),
            emission_type: model.emission_type.into(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl ActiveModel {
    pub fn from_new(new: NewRoadtrip, created_at: DateTime<Utc>) -> Self {
        Self {
            id: NotSet,
            quantity: Set(new.quantity),
            description: Set(new.description),
            datetime: Set(new.datetime),
            group: Set(new.group.into()),
            emission_type: Set(new.emission_type.into()),
            created_at: Set(created_at),
            updated_at: Set(None),
        }
    }

    pub fn from_record(record: &Roadtrip) -> Self {
        Self {
            id: Set(record.id),
            quantity: Set(record.quantity),
            description: Set(record.description.clone()),
            datetime: Set(record.datetime),
            group: Set(record.group.into()),
            emission_type: Set(record.emission_type.into()),
            created_at: Set(record.created_at),
            updated_at: Set(record.updated_at),
        }
    }
}
