//! Student admissions records: the student plus its admissions,
//! guardians and fees, each keyed by student id.

mod entity;
mod enrollment;
mod repository;

pub use entity::{Gender, NewStudent, Student, StudentPatch, StudentStatus};
pub use enrollment::{
    Admission, Guardian, NewAdmission, NewGuardian, NewStudentFee, StudentDetails, StudentFee,
};
pub use repository::StudentRepository;

use crate::error::AppError;

pub(crate) fn ensure_max_len(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::bad_request(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

pub(crate) fn ensure_email(value: &str) -> Result<(), AppError> {
    let valid = value
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !valid {
        return Err(AppError::bad_request(format!("'{value}' is not a valid email")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_len_counts_chars() {
        assert!(ensure_max_len("cell_phone", "12345678", 8).is_ok());
        assert!(ensure_max_len("cell_phone", "123456789", 8).is_err());
        assert!(ensure_max_len("first_name", "Ñandú", 5).is_ok());
    }

    #[test]
    fn test_email_shape() {
        assert!(ensure_email("ana@colegio.edu").is_ok());
        assert!(ensure_email("ana.colegio.edu").is_err());
        assert!(ensure_email("@colegio.edu").is_err());
        assert!(ensure_email("ana@localhost").is_err());
    }
}
