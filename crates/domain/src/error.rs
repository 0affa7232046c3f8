use serde::Serialize;
use thiserror::Error;

/// Any fault raised by the persistence layer, normalized to its message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Unknown stored value for {kind}: {value}")]
    UnknownLiteral { kind: &'static str, value: String },
}

/// Error kinds that cross into the HTTP boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppErrorKind {
    BadRequest,
    NotFound,
    DatasourceError,
    InternalServerError,
}

impl AppErrorKind {
    /// HTTP-equivalent status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::DatasourceError | Self::InternalServerError => 500,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::DatasourceError => "DATASOURCE_ERROR",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }
}

/// Application-level error returned by services
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{}: {message}", .kind.as_str())]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn datasource(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::DatasourceError, message)
    }
}

/// Raised when a string does not name a variant of a closed enumeration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{value}' is not a valid {kind}")]
pub struct InvalidLiteral {
    pub kind: &'static str,
    pub value: String,
}

impl From<InvalidLiteral> for StorageError {
    fn from(err: InvalidLiteral) -> Self {
        StorageError::UnknownLiteral {
            kind: err.kind,
            value: err.value,
        }
    }
}
