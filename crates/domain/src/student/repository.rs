use async_trait::async_trait;

use super::{
    Admission, Guardian, NewAdmission, NewGuardian, NewStudentFee, Student, StudentDetails,
    StudentFee,
};
use crate::error::StorageError;
use crate::record::CrudRepository;

#[async_trait]
pub trait StudentRepository: CrudRepository<Student> {
    /// Student with its admissions, guardians and fees, `None` if unknown
    async fn details(&self, id: i32) -> Result<Option<StudentDetails>, StorageError>;

    async fn add_admission(
        &self,
        student_id: i32,
        admission: NewAdmission,
    ) -> Result<Admission, StorageError>;

    async fn add_guardian(
        &self,
        student_id: i32,
        guardian: NewGuardian,
    ) -> Result<Guardian, StorageError>;

    async fn add_fee(&self, student_id: i32, fee: NewStudentFee)
    -> Result<StudentFee, StorageError>;
}
