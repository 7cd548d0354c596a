use async_trait::async_trait;
use sqlx::{
    mysql::{MySqlConnectOptions, MySqlDatabaseError},
    ConnectOptions, MySqlConnection,
};
use thiserror::Error;

use crate::{errors::DbError, models::connections::ConnectionParams};

pub mod mariadb;
pub mod mysql;

/// MySQL server error number for rejected credentials.
pub const ER_ACCESS_DENIED_ERROR: u16 = 1045;
/// MySQL server error number for a database that does not exist.
pub const ER_BAD_DB_ERROR: u16 = 1049;

/// Failure reported by a client library's connect call.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ClientError {
    code: Option<u16>,
    message: String,
    #[source]
    source: Option<sqlx::Error>,
}

impl ClientError {
    pub fn new(code: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Server error number, when the failure came from the server.
    pub fn code(&self) -> Option<u16> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn sqlx_error(&self) -> Option<&sqlx::Error> {
        self.source.as_ref()
    }
}

impl From<sqlx::Error> for ClientError {
    fn from(err: sqlx::Error) -> Self {
        let code = match &err {
            sqlx::Error::Database(db_err) => db_err
                .try_downcast_ref::<MySqlDatabaseError>()
                .map(|e| e.number()),
            _ => None,
        };

        Self {
            code,
            message: err.to_string(),
            source: Some(err),
        }
    }
}

/// A client family able to open a session from connection parameters.
#[async_trait]
pub trait Connector: Send + Sync {
    type Connection: Send;

    async fn connect(&self, params: &ConnectionParams) -> Result<Self::Connection, ClientError>;
}

/// Statement execution on an open session.
#[async_trait]
pub trait DbClient: Send {
    async fn execute(&mut self, query: &str) -> Result<(), DbError>;
    async fn commit(&mut self) -> Result<(), DbError>;
    async fn close(self: Box<Self>) -> Result<(), DbError>;
}

#[async_trait]
impl DbClient for MySqlConnection {
    async fn execute(&mut self, query: &str) -> Result<(), DbError> {
        sqlx::Executor::execute(&mut *self, query)
            .await
            .map_err(DbError::Sqlx)?;
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), DbError> {
        sqlx::Executor::execute(&mut *self, "COMMIT")
            .await
            .map_err(DbError::Sqlx)?;
        Ok(())
    }

    async fn close(self: Box<Self>) -> Result<(), DbError> {
        sqlx::Connection::close(*self).await.map_err(DbError::Sqlx)
    }
}

pub(crate) fn connect_options(params: &ConnectionParams) -> MySqlConnectOptions {
    let mut options = MySqlConnectOptions::new()
        .host(&params.host)
        .port(params.port)
        .database(&params.database);

    if let Some(user) = &params.user {
        options = options.username(user);
    }
    if let Some(password) = &params.password {
        options = options.password(password);
    }
    if let Some(cert) = &params.ssl_cert {
        options = options.ssl_client_cert(cert);
    }

    options
}

/// Opens one unpooled session over the MySQL wire protocol.
pub(crate) async fn open(params: &ConnectionParams) -> Result<MySqlConnection, ClientError> {
    let mut conn = connect_options(params).connect().await?;

    if !params.autocommit {
        sqlx::Executor::execute(&mut conn, "SET autocommit = 0").await?;
    }

    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_client_error_without_source() {
        let err = ClientError::new(Some(ER_ACCESS_DENIED_ERROR), "denied");
        assert_eq!(err.code(), Some(1045));
        assert_eq!(err.to_string(), "denied");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_client_error_from_non_database_error() {
        let err = ClientError::from(sqlx::Error::Protocol("bad handshake".to_string()));
        assert_eq!(err.code(), None);
        assert!(err.message().contains("bad handshake"));
        assert!(err.sqlx_error().is_some());
        assert!(err.source().is_some());
    }

    #[test]
    fn test_connect_options() {
        let params = ConnectionParams {
            host: "db.internal".to_string(),
            port: 3307,
            user: Some("clp".to_string()),
            password: None,
            database: "clp-db".to_string(),
            autocommit: false,
            ssl_cert: None,
        };

        let options = connect_options(&params);
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 3307);
        assert_eq!(options.get_username(), "clp");
        assert_eq!(options.get_database(), Some("clp-db"));
    }
}
