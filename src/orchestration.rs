//! Metadata tables used to schedule compression jobs and their tasks.

use log::{info, warn};

use crate::{
    db::DbClient,
    errors::DbError,
    models::schema::{ColumnSchema, ForeignKeySchema, IndexSchema, TableSchema},
};

pub const COMPRESSION_JOBS_TABLE: &str = "compression_jobs";
pub const COMPRESSION_TASKS_TABLE: &str = "compression_tasks";

pub fn compression_jobs_table() -> TableSchema {
    let mut table = TableSchema::new(
        COMPRESSION_JOBS_TABLE,
        vec![
            ColumnSchema::new("job_id", "INT").auto_increment(),
            ColumnSchema::new("job_status", "VARCHAR(16)").with_default("'SCHEDULING'"),
            ColumnSchema::new("job_status_msg", "VARCHAR(255)").with_default("''"),
            ColumnSchema::new("job_creation_time", "DATETIME").with_default("CURRENT_TIMESTAMP"),
            ColumnSchema::new("job_start_time", "DATETIME")
                .nullable()
                .with_default("NULL"),
            ColumnSchema::new("job_duration", "INT")
                .nullable()
                .with_default("NULL"),
            ColumnSchema::new("job_original_size", "BIGINT").with_default("'0'"),
            ColumnSchema::new("job_uncompressed_size", "BIGINT").with_default("'0'"),
            ColumnSchema::new("job_compressed_size", "BIGINT").with_default("'0'"),
            ColumnSchema::new("num_tasks", "INT").with_default("'0'"),
            ColumnSchema::new("num_tasks_completed", "INT").with_default("'0'"),
            ColumnSchema::new("clp_binary_version", "INT")
                .nullable()
                .with_default("NULL"),
            ColumnSchema::new("clp_config", "VARBINARY(60000)"),
        ],
    );
    table.primary_key = vec!["job_id".to_string()];
    table.indexes.push(IndexSchema {
        name: "JOB_STATUS".to_string(),
        columns: vec!["job_status".to_string()],
        is_unique: false,
    });
    table.row_format = Some("DYNAMIC".to_string());
    table
}

pub fn compression_tasks_table() -> TableSchema {
    let mut table = TableSchema::new(
        COMPRESSION_TASKS_TABLE,
        vec![
            ColumnSchema::new("task_id", "BIGINT").auto_increment(),
            ColumnSchema::new("task_status", "VARCHAR(16)").with_default("'SUBMITTED'"),
            ColumnSchema::new("task_scheduled_time", "DATETIME")
                .nullable()
                .with_default("NULL"),
            ColumnSchema::new("task_start_time", "DATETIME")
                .nullable()
                .with_default("NULL"),
            ColumnSchema::new("task_duration", "SMALLINT")
                .nullable()
                .with_default("NULL"),
            ColumnSchema::new("job_id", "INT"),
            ColumnSchema::new("clp_paths_to_compress", "VARBINARY(60000)"),
            ColumnSchema::new("partition_original_size", "BIGINT"),
            ColumnSchema::new("partition_uncompressed_size", "BIGINT")
                .nullable()
                .with_default("NULL"),
            ColumnSchema::new("partition_compressed_size", "BIGINT")
                .nullable()
                .with_default("NULL"),
        ],
    );
    table.primary_key = vec!["task_id".to_string()];
    for (name, column) in [
        ("job_id", "job_id"),
        ("TASK_STATUS", "task_status"),
        ("TASK_START_TIME", "task_start_time"),
    ] {
        table.indexes.push(IndexSchema {
            name: name.to_string(),
            columns: vec![column.to_string()],
            is_unique: false,
        });
    }
    table.foreign_keys.push(ForeignKeySchema {
        name: COMPRESSION_TASKS_TABLE.to_string(),
        columns: vec!["job_id".to_string()],
        foreign_table: COMPRESSION_JOBS_TABLE.to_string(),
        foreign_columns: vec!["job_id".to_string()],
        on_update: "NO ACTION".to_string(),
        on_delete: "NO ACTION".to_string(),
    });
    table.row_format = Some("DYNAMIC".to_string());
    table
}

/// Creates the orchestration tables if they are missing, then commits.
///
/// Jobs must exist before tasks because of the foreign key.
pub async fn initialize(client: &mut (dyn DbClient + '_)) -> Result<(), DbError> {
    for table in [compression_jobs_table(), compression_tasks_table()] {
        client.execute(&table.create_table_sql()).await?;
        info!("Ensured table `{}` exists", table.table_name);
    }
    client.commit().await
}

/// Runs [`initialize`] and closes the session on both the success and the
/// failure path. A setup error takes precedence over a close error.
pub async fn initialize_and_close(mut client: Box<dyn DbClient + '_>) -> Result<(), DbError> {
    let result = initialize(client.as_mut()).await;
    let closed = client.close().await;

    match (result, closed) {
        (Err(err), Err(close_err)) => {
            warn!("Failed to close connection: {}", close_err);
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), closed) => {
            info!(
                "Successfully created {} and {} orchestration tables",
                COMPRESSION_JOBS_TABLE, COMPRESSION_TASKS_TABLE
            );
            closed
        }
    }
}
