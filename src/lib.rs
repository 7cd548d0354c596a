pub mod config;
pub mod db;
pub mod errors;
pub mod factory;
pub mod logger;
pub mod models;
pub mod orchestration;
pub mod sql;

pub use config::AppConfig;
pub use errors::DbError;
pub use factory::ConnectionFactory;
pub use models::connections::{DatabaseConfig, DbType};
