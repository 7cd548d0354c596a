use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{errors::DbError, models::connections::DatabaseConfig};

/// Package config file. Only the `database` section is read here; other
/// sections are ignored.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Loads a `.json` file as JSON and anything else as YAML.
    pub fn from_file(path: &Path) -> Result<Self, DbError> {
        let contents = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, DbError> {
        // An empty YAML document deserializes to unit, not a map.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents).map_err(|e| DbError::Config(e.to_string()))
    }

    pub fn from_json_str(contents: &str) -> Result<Self, DbError> {
        serde_json::from_str(contents).map_err(|e| DbError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::connections::DbType;

    #[test]
    fn test_yaml_database_section() {
        let config = AppConfig::from_yaml_str(
            r#"
input_logs_directory: /var/log
database:
  type: mysql
  host: db.internal
  port: 3307
  name: orders
  username: clp
  password: secret
  auto_commit: true
"#,
        )
        .unwrap();

        let db = &config.database;
        assert_eq!(db.db_type().unwrap(), DbType::MySql);
        assert_eq!(db.host, "db.internal");
        assert_eq!(db.port, 3307);
        assert_eq!(db.name, "orders");
        assert_eq!(db.password.as_deref(), Some("secret"));
        assert!(db.auto_commit);
        assert_eq!(db.ssl_cert, None);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = AppConfig::from_yaml_str("database:\n  host: 10.0.0.5\n").unwrap();
        assert_eq!(config.database.host, "10.0.0.5");
        assert_eq!(config.database.kind, "mariadb");
        assert_eq!(config.database.port, 3306);

        assert_eq!(AppConfig::from_yaml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_unknown_type_is_kept_until_connect() {
        let config = AppConfig::from_json_str(r#"{"database": {"type": "postgres"}}"#).unwrap();
        assert_eq!(config.database.kind, "postgres");
        assert!(matches!(
            config.database.db_type(),
            Err(DbError::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_malformed_config() {
        let err = AppConfig::from_yaml_str("database:\n  port: not-a-port\n").unwrap_err();
        assert!(matches!(err, DbError::Config(_)));

        let err = AppConfig::from_json_str("{").unwrap_err();
        assert!(matches!(err, DbError::Config(_)));
    }
}
