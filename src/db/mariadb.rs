use async_trait::async_trait;
use log::debug;
use sqlx::MySqlConnection;

use crate::models::connections::ConnectionParams;

use super::{ClientError, Connector};

/// MariaDB-family client. MariaDB speaks the MySQL wire protocol, so the
/// session is the same driver type as for [`MySqlClient`](super::mysql::MySqlClient).
#[derive(Debug, Default, Clone, Copy)]
pub struct MariaDbClient;

#[async_trait]
impl Connector for MariaDbClient {
    type Connection = MySqlConnection;

    async fn connect(&self, params: &ConnectionParams) -> Result<MySqlConnection, ClientError> {
        debug!(
            "Connecting to MariaDB at {}:{} (database: {})",
            params.host, params.port, params.database
        );
        super::open(params).await
    }
}
