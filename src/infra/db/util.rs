use sqlx::error::ErrorKind;

use crate::application::repos::RepoError;

// Postgres `query_canceled`, raised when statement_timeout fires.
const QUERY_CANCELED: &str = "57014";

pub fn map_sqlx_error(err: sqlx::Error) -> RepoError {
    match err {
        sqlx::Error::RowNotFound => RepoError::NotFound,
        sqlx::Error::PoolTimedOut => RepoError::Timeout,
        sqlx::Error::Database(db) => {
            if db.code().as_deref() == Some(QUERY_CANCELED) {
                return RepoError::Timeout;
            }

            match db.kind() {
                ErrorKind::UniqueViolation => RepoError::Duplicate {
                    constraint: db.constraint().unwrap_or("unknown").to_string(),
                },
                ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                    RepoError::InvalidInput {
                        message: db.message().to_string(),
                    }
                }
                ErrorKind::ForeignKeyViolation => RepoError::Integrity {
                    message: db.message().to_string(),
                },
                _ => RepoError::from_persistence(db),
            }
        }
        other => RepoError::from_persistence(other),
    }
}
