use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("SQLx error: {0}")]
    Sqlx(sqlx::Error),

    #[error("Custom error: {0}")]
    Custom(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepositoryError::NotFound,
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                // unique_violation
                Some("23505") => RepositoryError::AlreadyExists(db_err.message().to_string()),
                // check_violation / not_null_violation
                Some("23514") | Some("23502") => {
                    RepositoryError::Constraint(db_err.message().to_string())
                }
                _ => RepositoryError::Sqlx(err),
            },
            _ => RepositoryError::Sqlx(err),
        }
    }
}
