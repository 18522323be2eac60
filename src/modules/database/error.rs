use rusqlite::{ffi, ErrorCode};

/// Errors raised by the store, surfaced to the menu loop without being recovered
#[derive(Debug)]
pub enum StoreError {
    Connection(String),
    Constraint(String),
    InvalidData(String),
    Query(rusqlite::Error),
}

/// Check whether a raw driver error is a UNIQUE constraint violation
pub fn is_unique_violation(error: &rusqlite::Error) -> bool {
    matches!(
        error,
        rusqlite::Error::SqliteFailure(err, _) if err.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

impl From<rusqlite::Error> for StoreError {
    fn from(error: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(err, msg) = &error {
            let detail = msg.clone().unwrap_or_else(|| err.to_string());
            match err.code {
                ErrorCode::ConstraintViolation => return StoreError::Constraint(detail),
                ErrorCode::CannotOpen
                | ErrorCode::NotADatabase
                | ErrorCode::PermissionDenied
                | ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked => return StoreError::Connection(detail),
                _ => {}
            }
        }

        match error {
            rusqlite::Error::FromSqlConversionFailure(index, _, e) => {
                StoreError::InvalidData(format!("column {}: {}", index, e))
            }
            rusqlite::Error::InvalidColumnType(index, name, kind) => StoreError::InvalidData(
                format!("column {} ({}) has unexpected type {}", index, name, kind),
            ),
            other => StoreError::Query(other),
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Connection(msg) => write!(f, "Database connection failed: {}", msg),
            StoreError::Constraint(msg) => write!(f, "Database constraint violated: {}", msg),
            StoreError::InvalidData(msg) => write!(f, "Invalid data in database: {}", msg),
            StoreError::Query(e) => write!(f, "Database error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Query(e) => Some(e),
            _ => None,
        }
    }
}
