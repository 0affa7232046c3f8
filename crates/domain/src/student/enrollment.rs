use chrono::{DateTime, Months, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entity::{NAME_MAX_LEN, validate_contact};
use super::{Student, ensure_max_len};
use crate::error::AppError;

/// Largest amount that fits a NUMERIC(10, 2) column
fn fee_amount_limit() -> Decimal {
    Decimal::new(9_999_999_999, 2)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admission {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub student_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewAdmission {
    /// Defaults to the creation instant
    #[serde(default, deserialize_with = "crate::period::deserialize_optional_instant")]
    pub date: Option<DateTime<Utc>>,
}

impl Admission {
    pub fn assemble(id: i32, student_id: i32, new: NewAdmission, now: DateTime<Utc>) -> Self {
        Self {
            id,
            date: new.date.unwrap_or(now),
            student_id,
            created_at: now,
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guardian {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub cell_phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub profession: Option<String>,
    pub student_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGuardian {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub cell_phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub profession: Option<String>,
}

impl NewGuardian {
    pub fn validate(&self) -> Result<(), AppError> {
        ensure_max_len("first_name", &self.first_name, NAME_MAX_LEN)?;
        ensure_max_len("last_name", &self.last_name, NAME_MAX_LEN)?;
        if let Some(profession) = &self.profession {
            ensure_max_len("profession", profession, NAME_MAX_LEN)?;
        }
        validate_contact(
            self.address.as_ref(),
            self.cell_phone.as_ref(),
            self.email.as_ref(),
        )
    }
}

impl Guardian {
    pub fn assemble(id: i32, student_id: i32, new: NewGuardian, now: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            cell_phone: new.cell_phone,
            email: new.email,
            address: new.address,
            profession: new.profession,
            student_id,
            created_at: now,
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentFee {
    pub id: i32,
    pub total_amount: Decimal,
    pub valid_until: DateTime<Utc>,
    pub date_submitted: DateTime<Utc>,
    pub student_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStudentFee {
    pub total_amount: Decimal,
    /// Defaults to one month after submission
    #[serde(default, deserialize_with = "crate::period::deserialize_optional_instant")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::period::deserialize_optional_instant")]
    pub date_submitted: Option<DateTime<Utc>>,
}

impl NewStudentFee {
    /// Amount as stored: two decimals, negative zero folded to zero
    pub fn stored_amount(&self) -> Decimal {
        let rounded = self.total_amount.round_dp(2);
        if rounded.is_zero() {
            Decimal::ZERO
        } else {
            rounded
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let amount = self.stored_amount();
        if amount.is_sign_negative() {
            return Err(AppError::bad_request("total_amount must not be negative"));
        }
        if amount > fee_amount_limit() {
            return Err(AppError::bad_request(
                "total_amount exceeds 10 digits with 2 decimals",
            ));
        }
        Ok(())
    }
}

impl StudentFee {
    pub fn assemble(id: i32, student_id: i32, new: NewStudentFee, now: DateTime<Utc>) -> Self {
        let date_submitted = new.date_submitted.unwrap_or(now);
        let valid_until = new.valid_until.unwrap_or_else(|| {
            date_submitted
                .checked_add_months(Months::new(1))
                .unwrap_or(date_submitted)
        });
        Self {
            id,
            total_amount: new.stored_amount(),
            valid_until,
            date_submitted,
            student_id,
            created_at: now,
            updated_at: None,
        }
    }
}

/// A student together with every row that references it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentDetails {
    #[serde(flatten)]
    pub student: Student,
    pub admissions: Vec<Admission>,
    pub guardians: Vec<Guardian>,
    pub fees: Vec<StudentFee>,
}
