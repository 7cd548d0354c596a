use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DbError;

/// Database families a connection can be created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbType {
    MySql,
    MariaDb,
}

impl DbType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DbType::MySql => "mysql",
            DbType::MariaDb => "mariadb",
        }
    }
}

impl fmt::Display for DbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DbType {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mysql" => Ok(DbType::MySql),
            "mariadb" => Ok(DbType::MariaDb),
            other => Err(DbError::UnsupportedType(other.to_string())),
        }
    }
}

/// The `database` section of the package config.
///
/// `type` is kept as the raw string from the file; it is only interpreted
/// when a connection is requested.
#[derive(Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DatabaseConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub ssl_cert: Option<String>,
    pub auto_commit: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            kind: DbType::MariaDb.to_string(),
            host: "localhost".to_string(),
            port: 3306,
            name: "clp-db".to_string(),
            username: None,
            password: None,
            ssl_cert: None,
            auto_commit: false,
        }
    }
}

impl DatabaseConfig {
    pub fn db_type(&self) -> Result<DbType, DbError> {
        self.kind.parse()
    }

    /// Parameters handed to a client's connect call.
    pub fn connection_params(&self) -> ConnectionParams {
        ConnectionParams {
            host: self.host.clone(),
            port: self.port,
            user: self.username.clone(),
            password: self.password.clone(),
            database: self.name.clone(),
            autocommit: self.auto_commit,
            ssl_cert: self.ssl_cert.clone(),
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("type", &self.kind)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("ssl_cert", &self.ssl_cert)
            .field("auto_commit", &self.auto_commit)
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: String,
    pub autocommit: bool,
    pub ssl_cert: Option<String>,
}

impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("database", &self.database)
            .field("autocommit", &self.autocommit)
            .field("ssl_cert", &self.ssl_cert)
            .finish()
    }
}
