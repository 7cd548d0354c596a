use serde::{Deserialize, Serialize};

use crate::sql::{field_names_and_types_sql, field_names_sql};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub table_name: String,
    pub columns: Vec<ColumnSchema>,
    pub primary_key: Vec<String>,
    pub indexes: Vec<IndexSchema>,
    pub foreign_keys: Vec<ForeignKeySchema>,
    pub row_format: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    pub name: String,
    pub data_type: String,
    pub is_nullable: bool,
    /// Raw SQL expression, e.g. `'0'`, `NULL` or `CURRENT_TIMESTAMP`.
    pub default: Option<String>,
    pub auto_increment: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct IndexSchema {
    pub name: String,
    pub columns: Vec<String>,
    pub is_unique: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ForeignKeySchema {
    pub name: String,
    pub columns: Vec<String>,
    pub foreign_table: String,
    pub foreign_columns: Vec<String>,
    pub on_update: String,
    pub on_delete: String,
}

impl ColumnSchema {
    /// A `NOT NULL` column without default.
    pub fn new(name: &str, data_type: &str) -> Self {
        Self {
            name: name.to_string(),
            data_type: data_type.to_string(),
            is_nullable: false,
            default: None,
            auto_increment: false,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    pub fn with_default(mut self, expr: &str) -> Self {
        self.default = Some(expr.to_string());
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    fn definition(&self) -> String {
        let mut definition = format!(
            "{} {}",
            self.data_type,
            if self.is_nullable { "NULL" } else { "NOT NULL" }
        );
        if let Some(default) = &self.default {
            definition.push_str(&format!(" DEFAULT {}", default));
        }
        if self.auto_increment {
            definition.push_str(" AUTO_INCREMENT");
        }
        definition
    }
}

impl TableSchema {
    pub fn new(table_name: &str, columns: Vec<ColumnSchema>) -> Self {
        Self {
            table_name: table_name.to_string(),
            columns,
            primary_key: Vec::new(),
            indexes: Vec::new(),
            foreign_keys: Vec::new(),
            row_format: None,
        }
    }

    /// `CREATE TABLE IF NOT EXISTS` statement for this table.
    pub fn create_table_sql(&self) -> String {
        let columns: Vec<(String, String)> = self
            .columns
            .iter()
            .map(|column| (quote_identifier(&column.name), column.definition()))
            .collect();

        let mut parts = Vec::new();
        if !columns.is_empty() {
            parts.push(field_names_and_types_sql(&columns));
        }
        if !self.primary_key.is_empty() {
            parts.push(format!(
                "PRIMARY KEY ({}) USING BTREE",
                quoted_list(&self.primary_key)
            ));
        }
        for index in &self.indexes {
            parts.push(format!(
                "{} {} ({}) USING BTREE",
                if index.is_unique { "UNIQUE INDEX" } else { "INDEX" },
                quote_identifier(&index.name),
                quoted_list(&index.columns)
            ));
        }
        for fk in &self.foreign_keys {
            parts.push(format!(
                "CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({}) ON UPDATE {} ON DELETE {}",
                quote_identifier(&fk.name),
                quoted_list(&fk.columns),
                quote_identifier(&fk.foreign_table),
                quoted_list(&fk.foreign_columns),
                fk.on_update,
                fk.on_delete
            ));
        }

        let mut query = format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            quote_identifier(&self.table_name),
            parts.join(",")
        );
        if let Some(row_format) = &self.row_format {
            query.push_str(&format!(" ROW_FORMAT={}", row_format));
        }
        query
    }
}

/// Backtick-quotes a MySQL identifier, doubling embedded backticks.
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

fn quoted_list(names: &[String]) -> String {
    field_names_sql(names.iter().map(|name| quote_identifier(name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_definition() {
        let column = ColumnSchema::new("job_id", "INT").auto_increment();
        assert_eq!(column.definition(), "INT NOT NULL AUTO_INCREMENT");

        let column = ColumnSchema::new("job_start_time", "DATETIME")
            .nullable()
            .with_default("NULL");
        assert_eq!(column.definition(), "DATETIME NULL DEFAULT NULL");
    }

    #[test]
    fn test_create_table_sql() {
        let mut table = TableSchema::new(
            "users",
            vec![
                ColumnSchema::new("id", "INT").auto_increment(),
                ColumnSchema::new("name", "VARCHAR(100)").with_default("''"),
            ],
        );
        table.primary_key = vec!["id".to_string()];
        table.indexes.push(IndexSchema {
            name: "NAME".to_string(),
            columns: vec!["name".to_string()],
            is_unique: true,
        });
        table.row_format = Some("DYNAMIC".to_string());

        assert_eq!(
            table.create_table_sql(),
            "CREATE TABLE IF NOT EXISTS `users` (\
             `id` INT NOT NULL AUTO_INCREMENT,\
             `name` VARCHAR(100) NOT NULL DEFAULT '',\
             PRIMARY KEY (`id`) USING BTREE,\
             UNIQUE INDEX `NAME` (`name`) USING BTREE) ROW_FORMAT=DYNAMIC"
        );
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("users"), "`users`");
        assert_eq!(quote_identifier("we`ird"), "`we``ird`");
    }
}
