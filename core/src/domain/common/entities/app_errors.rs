use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Invalid(String),

    #[error("{0}")]
    ConfirmationRequired(String),

    #[error("User has already checked in today")]
    AlreadyCheckedIn,

    #[error("User has already checked out today")]
    AlreadyCheckedOut,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    pub fn not_found(label: &str) -> Self {
        CoreError::NotFound(format!("{label} not found"))
    }
}

impl From<sea_orm::DbErr> for CoreError {
    fn from(err: sea_orm::DbErr) -> Self {
        CoreError::Database(err.to_string())
    }
}
