use domain::student::Admission;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_admission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: DateTimeUtc,
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

impl From<Model> for Admission {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            date: model.date,
            student_id: model.student_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl ActiveModel {
    /// Insert form of an already assembled admission; the id is left to the database
    pub fn from_assembled(admission: &Admission) -> Self {
        Self {
            id: NotSet,
            date: Set(admission.date),
            student_id: Set(admission.student_id),
            created_at: Set(admission.created_at),
            updated_at: Set(admission.updated_at),
        }
    }
}
