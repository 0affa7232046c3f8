use async_trait::async_trait;
use chrono::Utc;
use domain::student::{
    Admission, Guardian, NewAdmission, NewGuardian, NewStudentFee, StudentDetails, StudentFee,
};
use domain::{StorageError, Student, StudentRepository};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use super::entities::{admission, guardian, student, student_fee};
use super::{sea_orm_crud, with_storage_errors};

pub struct SeaOrmStudentRepository {
    db: DatabaseConnection,
}

impl SeaOrmStudentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// Child rows go away through ON DELETE CASCADE
sea_orm_crud!(SeaOrmStudentRepository, Student, student);

#[async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn details(&self, id: i32) -> Result<Option<StudentDetails>, StorageError> {
        let Some(model) = with_storage_errors(
            "getting Student",
            student::Entity::find_by_id(id).one(&self.db),
        )
        .await?
        else {
            return Ok(None);
        };

        let admissions = with_storage_errors(
            "fetching Student admissions",
            admission::Entity::find()
                .filter(admission::Column::StudentId.eq(id))
                .order_by_asc(admission::Column::Id)
                .all(&self.db),
        )
        .await?;
        let guardians = with_storage_errors(
            "fetching Student guardians",
            guardian::Entity::find()
                .filter(guardian::Column::StudentId.eq(id))
                .order_by_asc(guardian::Column::Id)
                .all(&self.db),
        )
        .await?;
        let fees = with_storage_errors(
            "fetching Student fees",
            student_fee::Entity::find()
                .filter(student_fee::Column::StudentId.eq(id))
                .order_by_asc(student_fee::Column::Id)
                .all(&self.db),
        )
        .await?;

        Ok(Some(StudentDetails {
            student: model.into(),
            admissions: admissions.into_iter().map(Into::into).collect(),
            guardians: guardians.into_iter().map(Into::into).collect(),
            fees: fees.into_iter().map(Into::into).collect(),
        }))
    }

    async fn add_admission(
        &self,
        student_id: i32,
        new: NewAdmission,
    ) -> Result<Admission, StorageError> {
        let assembled = Admission::assemble(0, student_id, new, Utc::now());
        let model = with_storage_errors(
            "creating Admission",
            admission::ActiveModel::from_assembled(&assembled).insert(&self.db),
        )
        .await?;
        Ok(model.into())
    }

    async fn add_guardian(
        &self,
        student_id: i32,
        new: NewGuardian,
    ) -> Result<Guardian, StorageError> {
        let assembled = Guardian::assemble(0, student_id, new, Utc::now());
        let model = with_storage_errors(
            "creating Guardian",
            guardian::ActiveModel::from_assembled(&assembled).insert(&self.db),
        )
        .await?;
        Ok(model.into())
    }

    async fn add_fee(
        &self,
        student_id: i32,
        new: NewStudentFee,
    ) -> Result<StudentFee, StorageError> {
        let assembled = StudentFee::assemble(0, student_id, new, Utc::now());
        let model = with_storage_errors(
            "creating StudentFee",
            student_fee::ActiveModel::from_assembled(&assembled).insert(&self.db),
        )
        .await?;
        Ok(model.into())
    }
}
