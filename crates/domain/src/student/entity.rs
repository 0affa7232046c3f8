use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ensure_email, ensure_max_len};
use crate::error::AppError;
use crate::literal::literal_enum;
use crate::patch::FieldPatch;
use crate::record::Record;

pub const NAME_MAX_LEN: usize = 50;
pub const ADDRESS_MAX_LEN: usize = 100;
pub const CELL_PHONE_MAX_LEN: usize = 8;

literal_enum! {
    Gender {
        Male => "MALE",
        Female => "FEMALE",
        Other => "OTHER",
    }
}

literal_enum! {
    #[derive(Default)]
    StudentStatus {
        #[default]
        Active => "ACTIVE",
        Inactive => "INACTIVE",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub date_of_birth: DateTime<Utc>,
    pub address: Option<String>,
    pub cell_phone: Option<String>,
    pub email: Option<String>,
    pub status: StudentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    #[serde(deserialize_with = "crate::period::deserialize_instant")]
    pub date_of_birth: DateTime<Utc>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub cell_phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: StudentStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StudentPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "crate::period::deserialize_optional_instant")]
    pub date_of_birth: Option<DateTime<Utc>>,
    #[serde(default)]
    pub address: FieldPatch<String>,
    #[serde(default)]
    pub cell_phone: FieldPatch<String>,
    #[serde(default)]
    pub email: FieldPatch<String>,
    pub status: Option<StudentStatus>,
}

/// Shared by students and guardians
pub(crate) fn validate_contact(
    address: Option<&String>,
    cell_phone: Option<&String>,
    email: Option<&String>,
) -> Result<(), AppError> {
    if let Some(address) = address {
        ensure_max_len("address", address, ADDRESS_MAX_LEN)?;
    }
    if let Some(cell_phone) = cell_phone {
        ensure_max_len("cell_phone", cell_phone, CELL_PHONE_MAX_LEN)?;
    }
    if let Some(email) = email {
        ensure_email(email)?;
    }
    Ok(())
}

impl Record for Student {
    type New = NewStudent;
    type Patch = StudentPatch;

    const KIND: &'static str = "Student";
    const PLURAL: &'static str = "Students";

    fn id(&self) -> i32 {
        self.id
    }

    fn assemble(id: i32, new: NewStudent, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            gender: new.gender,
            date_of_birth: new.date_of_birth,
            address: new.address,
            cell_phone: new.cell_phone,
            email: new.email,
            status: new.status,
            created_at,
            updated_at: None,
        }
    }

    fn apply_patch(mut self, patch: StudentPatch) -> Self {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        self.gender = patch.gender.unwrap_or(self.gender);
        self.date_of_birth = patch.date_of_birth.unwrap_or(self.date_of_birth);
        self.address = patch.address.apply(self.address);
        self.cell_phone = patch.cell_phone.apply(self.cell_phone);
        self.email = patch.email.apply(self.email);
        self.status = patch.status.unwrap_or(self.status);
        self
    }

    fn touch(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = Some(updated_at);
    }

    fn validate_new(new: &NewStudent) -> Result<(), AppError> {
        ensure_max_len("first_name", &new.first_name, NAME_MAX_LEN)?;
        ensure_max_len("last_name", &new.last_name, NAME_MAX_LEN)?;
        validate_contact(
            new.address.as_ref(),
            new.cell_phone.as_ref(),
            new.email.as_ref(),
        )
    }

    fn validate_patch(patch: &StudentPatch) -> Result<(), AppError> {
        if let Some(first_name) = &patch.first_name {
            ensure_max_len("first_name", first_name, NAME_MAX_LEN)?;
        }
        if let Some(last_name) = &patch.last_name {
            ensure_max_len("last_name", last_name, NAME_MAX_LEN)?;
        }
        validate_contact(
            patch.address.value(),
            patch.cell_phone.value(),
            patch.email.value(),
        )
    }
}
