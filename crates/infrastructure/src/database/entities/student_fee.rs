use domain::student::StudentFee;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_fee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total_amount: Decimal,
    pub valid_until: DateTimeUtc,
    pub date_submitted: DateTimeUtc,
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

impl From<Model> for StudentFee {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            total_amount: model.total_amount,
            valid_until: model.valid_until,
            date_submitted: model.date_submitted,
            student_id: model.student_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl ActiveModel {
    pub fn from_assembled(fee: &StudentFee) -> Self {
        Self {
            id: NotSet,
            total_amount: Set(fee.total_amount),
            valid_until: Set(fee.valid_until),
            date_submitted: Set(fee.date_submitted),
            student_id: Set(fee.student_id),
            created_at: Set(fee.created_at),
            updated_at: Set(fee.updated_at),
        }
    }
}
