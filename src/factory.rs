use std::sync::Arc;

use crate::{
    db::{
        mariadb::MariaDbClient, mysql::MySqlClient, ClientError, Connector, ER_ACCESS_DENIED_ERROR,
        ER_BAD_DB_ERROR,
    },
    errors::DbError,
    logger::{LogCrateLogger, Logger},
    models::connections::{DatabaseConfig, DbType},
};

/// Builds one database connection per call from a shared config.
///
/// Connect failures are logged once through the injected [`Logger`] and
/// then returned; nothing is retried.
pub struct ConnectionFactory<M = MySqlClient, D = MariaDbClient, L = LogCrateLogger> {
    config: Arc<DatabaseConfig>,
    mysql: M,
    mariadb: D,
    logger: L,
}

impl ConnectionFactory {
    pub fn new(config: Arc<DatabaseConfig>) -> Self {
        Self::with_clients(config, MySqlClient, MariaDbClient, LogCrateLogger)
    }
}

impl<M, D, L> ConnectionFactory<M, D, L> {
    pub fn with_clients(config: Arc<DatabaseConfig>, mysql: M, mariadb: D, logger: L) -> Self {
        Self {
            config,
            mysql,
            mariadb,
            logger,
        }
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }
}

impl<M, D, L> ConnectionFactory<M, D, L>
where
    M: Connector,
    D: Connector<Connection = M::Connection>,
    L: Logger,
{
    pub async fn create_mysql_connection(&self) -> Result<M::Connection, DbError> {
        self.connect_with(&self.mysql, mysql_failure).await
    }

    pub async fn create_mariadb_connection(&self) -> Result<D::Connection, DbError> {
        self.connect_with(&self.mariadb, mariadb_failure).await
    }

    /// Dispatches on the configured database type. An unknown type fails
    /// before any client is touched and is not logged.
    pub async fn create_connection(&self) -> Result<M::Connection, DbError> {
        match self.config.db_type()? {
            DbType::MySql => self.create_mysql_connection().await,
            DbType::MariaDb => self.create_mariadb_connection().await,
        }
    }

    async fn connect_with<C: Connector>(
        &self,
        client: &C,
        classify: fn(ClientError, &DatabaseConfig) -> DbError,
    ) -> Result<C::Connection, DbError> {
        let params = self.config.connection_params();
        client.connect(&params).await.map_err(|err| {
            let err = classify(err, &self.config);
            self.logger.error(&err.to_string());
            err
        })
    }
}

fn mysql_failure(err: ClientError, config: &DatabaseConfig) -> DbError {
    match err.code() {
        Some(ER_ACCESS_DENIED_ERROR) => DbError::AccessDenied(err),
        Some(ER_BAD_DB_ERROR) => DbError::UnknownDatabase {
            name: config.name.clone(),
            source: err,
        },
        _ => DbError::MySql(err),
    }
}

fn mariadb_failure(err: ClientError, _config: &DatabaseConfig) -> DbError {
    DbError::MariaDb(err)
}
