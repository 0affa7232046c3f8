use domain::student::Guardian;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_guardian")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub cell_phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub profession: Option<String>,
    pub student_id: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Guardian {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            cell_phone: model.cell_phone,
            email: model.email,
            address: model.address,
            profession: model.profession,
            student_id: model.student_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl ActiveModel {
    pub fn from_assembled(guardian: &Guardian) -> Self {
        Self {
            id: NotSet,
            first_name: Set(guardian.first_name.clone()),
            last_name: Set(guardian.last_name.clone()),
            cell_phone: Set(guardian.cell_phone.clone()),
            email: Set(guardian.email.clone()),
            address: Set(guardian.address.clone()),
            profession: Set(guardian.profession.clone()),
            student_id: Set(guardian.student_id),
            created_at: Set(guardian.created_at),
            updated_at: Set(guardian.updated_at),
        }
    }
}
