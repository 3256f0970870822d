//! Error types and HTTP response conversion

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Structured Database Errors
// ============================================================================

/// Database operation being performed when the error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseOperation {
    /// Establishing a database connection
    Connect,
    /// Executing a read query
    Query,
    /// Inserting records
    Insert,
    /// Updating records
    Update,
    /// Deleting records
    Delete,
    /// Acquiring a connection from the pool
    PoolAcquire,
}

impl fmt::Display for DatabaseOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect => write!(f, "connect"),
            Self::Query => write!(f, "query"),
            Self::Insert => write!(f, "insert"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
            Self::PoolAcquire => write!(f, "pool_acquire"),
        }
    }
}

/// Category of database error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseErrorKind {
    /// Failed to establish connection
    ConnectionFailed,
    /// Record not found
    NotFound,
    /// Constraint violation (unique, foreign key, check)
    ConstraintViolation,
    /// Query execution failed
    QueryFailed,
    /// Type conversion error
    TypeConversion,
    /// Configuration error
    Configuration,
    /// Connection pool exhausted
    PoolExhausted,
    /// Other/unknown error
    Other,
}

impl fmt::Display for DatabaseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::NotFound => write!(f, "not_found"),
            Self::ConstraintViolation => write!(f, "constraint_violation"),
            Self::QueryFailed => write!(f, "query_failed"),
            Self::TypeConversion => write!(f, "type_conversion"),
            Self::Configuration => write!(f, "configuration"),
            Self::PoolExhausted => write!(f, "pool_exhausted"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Structured database error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseError {
    /// The operation being performed when the error occurred
    pub operation: DatabaseOperation,
    /// The category of error
    pub kind: DatabaseErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl DatabaseError {
    /// Create a new database error
    pub fn new(
        operation: DatabaseOperation,
        kind: DatabaseErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
        }
    }

    /// Create a "not found" error
    pub fn not_found(operation: DatabaseOperation, message: impl Into<String>) -> Self {
        Self::new(operation, DatabaseErrorKind::NotFound, message)
    }

    /// Create a connection failed error
    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::new(
            DatabaseOperation::Connect,
            DatabaseErrorKind::ConnectionFailed,
            message,
        )
    }

    /// Create a pool exhausted error
    pub fn pool_exhausted(message: impl Into<String>) -> Self {
        Self::new(
            DatabaseOperation::PoolAcquire,
            DatabaseErrorKind::PoolExhausted,
            message,
        )
    }

    /// Re-tag a statement-level error with the operation that produced it
    ///
    /// Connection and pool errors keep their own operation.
    pub fn during(mut self, operation: DatabaseOperation) -> Self {
        if !matches!(
            self.operation,
            DatabaseOperation::Connect | DatabaseOperation::PoolAcquire
        ) {
            self.operation = operation;
        }
        self
    }
}

impl fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Database {} error during {}: {}",
            self.kind, self.operation, self.message
        )
    }
}

impl std::error::Error for DatabaseError {}

/// Result type alias using the service error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the service
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// Structured database error with operation context
    #[error("{0}")]
    Database(DatabaseError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Optional error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// HTTP status code
    pub status: u16,
}

impl ErrorResponse {
    /// Create error response with a code
    pub fn with_code(
        status: StatusCode,
        code: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            error: error.into(),
            code: Some(code.into()),
            status: status.as_u16(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            Error::Config(e) => {
                tracing::error!("Configuration error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_code(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "CONFIG_ERROR",
                        "Service misconfigured",
                    ),
                )
            }

            Error::Database(ref e) => {
                tracing::error!(
                    operation = %e.operation,
                    kind = %e.kind,
                    "Database error: {}", e.message
                );

                let status = match e.kind {
                    DatabaseErrorKind::NotFound => StatusCode::NOT_FOUND,
                    DatabaseErrorKind::ConstraintViolation => StatusCode::CONFLICT,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };

                let code = format!("DATABASE_{}", e.kind.to_string().to_uppercase());

                // Never leak driver messages to clients
                let user_message = match e.kind {
                    DatabaseErrorKind::NotFound => "Resource not found",
                    DatabaseErrorKind::ConstraintViolation => {
                        "Operation conflicts with existing data"
                    }
                    _ => "Database operation failed",
                };

                (status, ErrorResponse::with_code(status, code, user_message))
            }

            Error::Io(e) => {
                tracing::error!("I/O error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_code(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "IO_ERROR",
                        "I/O operation failed",
                    ),
                )
            }

            Error::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::with_code(StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ),

            Error::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_code(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ),

            Error::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_code(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "Internal server error",
                    ),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::Error as E;
        match err {
            E::RowNotFound => Self::not_found(DatabaseOperation::Query, "Row not found"),
            E::PoolTimedOut => Self::pool_exhausted("Connection pool timed out"),
            E::PoolClosed => Self::connection_failed("Connection pool is closed"),
            E::WorkerCrashed => Self::connection_failed("Database worker crashed"),
            E::Configuration(e) => Self::new(
                DatabaseOperation::Connect,
                DatabaseErrorKind::Configuration,
                e.to_string(),
            ),
            E::Io(e) => Self::connection_failed(e.to_string()),
            E::Tls(e) => Self::connection_failed(format!("TLS error: {}", e)),
            E::Protocol(msg) => Self::new(
                DatabaseOperation::Query,
                DatabaseErrorKind::QueryFailed,
                msg,
            ),
            E::ColumnNotFound(col) => Self::new(
                DatabaseOperation::Query,
                DatabaseErrorKind::QueryFailed,
                format!("Column not found: {}", col),
            ),
            E::ColumnDecode { index, source } => Self::new(
                DatabaseOperation::Query,
                DatabaseErrorKind::TypeConversion,
                format!("Failed to decode column {}: {}", index, source),
            ),
            E::Decode(e) => Self::new(
                DatabaseOperation::Query,
                DatabaseErrorKind::TypeConversion,
                e.to_string(),
            ),
            E::Database(db_err) => {
                let kind = if db_err.is_unique_violation()
                    || db_err.is_foreign_key_violation()
                    || db_err.is_check_violation()
                {
                    DatabaseErrorKind::ConstraintViolation
                } else {
                    DatabaseErrorKind::QueryFailed
                };
                Self::new(DatabaseOperation::Query, kind, db_err.to_string())
            }
            _ => Self::new(
                DatabaseOperation::Query,
                DatabaseErrorKind::Other,
                err.to_string(),
            ),
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        Error::Database(DatabaseError::from(err))
    }
}

impl From<DatabaseError> for Error {
    fn from(err: DatabaseError) -> Self {
        Error::Database(err)
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: Error) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_error_response_with_code() {
        let err = ErrorResponse::with_code(StatusCode::BAD_REQUEST, "BAD_REQUEST", "missing email");
        assert_eq!(err.status, 400);
        assert_eq!(err.error, "missing email");
        assert_eq!(err.code, Some("BAD_REQUEST".to_string()));
        assert_eq!(err.to_string(), "missing email");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_of(Error::NotFound("User 1".into())), StatusCode::NOT_FOUND);
        assert_eq!(status_of(Error::BadRequest("bad".into())), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(Error::Internal("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(DatabaseError::not_found(DatabaseOperation::Query, "gone").into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(
                DatabaseError::new(
                    DatabaseOperation::Insert,
                    DatabaseErrorKind::ConstraintViolation,
                    "duplicate key"
                )
                .into()
            ),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(DatabaseError::connection_failed("refused").into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_row_not_found_maps_to_not_found_kind() {
        let err = DatabaseError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.kind, DatabaseErrorKind::NotFound);
        assert_eq!(err.operation, DatabaseOperation::Query);
    }

    #[test]
    fn test_pool_errors_keep_operation() {
        let err = DatabaseError::from(sqlx::Error::PoolTimedOut).during(DatabaseOperation::Insert);
        assert_eq!(err.operation, DatabaseOperation::PoolAcquire);
        assert_eq!(err.kind, DatabaseErrorKind::PoolExhausted);

        let err = DatabaseError::from(sqlx::Error::RowNotFound).during(DatabaseOperation::Update);
        assert_eq!(err.operation, DatabaseOperation::Update);
    }

    #[test]
    fn test_display_formatting() {
        let err = DatabaseError::new(
            DatabaseOperation::Delete,
            DatabaseErrorKind::QueryFailed,
            "relation \"users\" does not exist",
        );
        assert_eq!(
            err.to_string(),
            "Database query_failed error during delete: relation \"users\" does not exist"
        );
    }
}
