use domain::student::{
    Admission, Guardian, NewAdmission, NewGuardian, NewStudentFee, StudentDetails, StudentFee,
};
use domain::{AppError, Student, StudentRepository};

use crate::record_service::{RecordService, datasource_error};

pub type StudentService = RecordService<Student, dyn StudentRepository>;

impl StudentService {
    /// Student with its admissions, guardians and fees, `Ok(None)` if unknown
    pub async fn details(&self, id: i32) -> Result<Option<StudentDetails>, AppError> {
        self.repository()
            .details(id)
            .await
            .map_err(datasource_error("Error while fetching Student details"))
    }

    pub async fn add_admission(
        &self,
        student_id: i32,
        admission: NewAdmission,
    ) -> Result<Admission, AppError> {
        self.require(student_id).await?;
        self.repository()
            .add_admission(student_id, admission)
            .await
            .map_err(datasource_error("Error while creating Admission"))
    }

    pub async fn add_guardian(
        &self,
        student_id: i32,
        guardian: NewGuardian,
    ) -> Result<Guardian, AppError> {
        guardian.validate()?;
        self.require(student_id).await?;
        self.repository()
            .add_guardian(student_id, guardian)
            .await
            .map_err(datasource_error("Error while creating Guardian"))
    }

    pub async fn add_fee(&self, student_id: i32, fee: NewStudentFee) -> Result<StudentFee, AppError> {
        fee.validate()?;
        self.require(student_id).await?;
        self.repository()
            .add_fee(student_id, fee)
            .await
            .map_err(datasource_error("Error while creating StudentFee"))
    }
}
