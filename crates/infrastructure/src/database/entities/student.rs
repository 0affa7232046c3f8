use chrono::{DateTime, Utc};
use domain::student::{NewStudent, Student};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use super::enums::{DbGender, DbStudentStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub gender: DbGender,
    pub date_of_birth: DateTimeUtc,
    pub address: Option<String>,
    pub cell_phone: Option<String>,
    pub email: Option<String>,
    pub status: DbStudentStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::admission::Entity")]
    Admissions,
    #[sea_orm(has_many = "super::guardian::Entity")]
    Guardians,
    #[sea_orm(has_many = "super::student_fee::Entity")]
    Fees,
}

impl Related<super::admission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Admissions.def()
    }
}

impl Related<super::guardian::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guardians.def()
    }
}

impl Related<super::student_fee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fees.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Student {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            gender: model.gender.into(),
            date_of_birth: model.date_of_birth,
            address: model.address,
            cell_phone: model.cell_phone,
            email: model.email,
            status: model.status.into(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl ActiveModel {
    pub fn from_new(new: NewStudent, created_at: DateTime<Utc>) -> Self {
        Self {
            id: NotSet,
            first_name: Set(new.first_name),
            last_name: Set(new.last_name),
            gender: Set(new.gender.into()),
            date_of_birth: Set(new.date_of_birth),
            address: Set(new.address),
            cell_phone: Set(new.cell_phone),
            email: Set(new.email),
            status: Set(new.status.into()),
            created_at: Set(created_at),
            updated_at: Set(None),
        }
    }

    pub fn from_record(record: &Student) -> Self {
        Self {
            id: Set(record.id),
            first_name: Set(record.first_name.clone()),
            last_name: Set(record.last_name.clone()),
            gender: Set(record.gender.into()),
            date_of_birth: Set(record.date_of_birth),
            address: Set(record.address.clone()),
            cell_phone: Set(record.cell_phone.clone()),
            email: Set(record.email.clone()),
            status: Set(record.status.into()),
            created_at: Set(record.created_at),
            updated_at: Set(record.updated_at),
        }
    }
}
