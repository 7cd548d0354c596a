use async_trait::async_trait;
use log::debug;
use sqlx::MySqlConnection;

use crate::models::connections::ConnectionParams;

use super::{ClientError, Connector};

/// MySQL-family client.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlClient;

#[async_trait]
impl Connector for MySqlClient {
    type Connection = MySqlConnection;

    async fn connect(&self, params: &ConnectionParams) -> Result<MySqlConnection, ClientError> {
        debug!(
            "Connecting to MySQL at {}:{} (database: {})",
            params.host, params.port, params.database
        );
        super::open(params).await
    }
}
