use thiserror::Error;

use crate::db::ClientError;

/// Custom error type for connection and orchestration operations.
///
/// The `Display` text of the connect variants is exactly the line the
/// factory logs before handing the error back to the caller.
#[derive(Error, Debug)]
pub enum DbError {
    /// The MySQL server rejected the supplied credentials.
    #[error("Database access denied.")]
    AccessDenied(#[source] ClientError),
    /// The configured database does not exist on the MySQL server.
    #[error("Specified database \"{name}\" does not exist.")]
    UnknownDatabase {
        name: String,
        #[source]
        source: ClientError,
    },
    /// Any other MySQL connect failure.
    #[error("{0}")]
    MySql(#[source] ClientError),
    #[error("Error connecting to MariaDB: {0}")]
    MariaDb(#[source] ClientError),
    /// The configured database type has no client.
    #[error("Unsupported database type: {0}")]
    UnsupportedType(String),
    /// Configuration error (e.g., malformed config file).
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Error that occurs on an open connection (e.g., DDL failure).
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl DbError {
    /// The client failure behind a connect error, if this is one.
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            DbError::AccessDenied(err) | DbError::MySql(err) | DbError::MariaDb(err) => Some(err),
            DbError::UnknownDatabase { source, .. } => Some(source),
            _ => None,
        }
    }
}
