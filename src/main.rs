use std::{path::PathBuf, process::ExitCode, sync::Arc};

use clap::Parser;
use log::{error, LevelFilter};
use sql_adapter::{orchestration, AppConfig, ConnectionFactory, DbError};

#[derive(Parser)]
#[command(name = "init-orchestration-db")]
#[command(version, about = "Setup metadata tables for job orchestration.")]
struct Cli {
    /// Package config file
    #[arg(long, env = "CLP_CONFIG")]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

async fn run(cli: &Cli) -> Result<(), DbError> {
    let config = AppConfig::from_file(&cli.config)?;
    let factory = ConnectionFactory::new(Arc::new(config.database));

    let conn = factory.create_connection().await?;
    orchestration::initialize_and_close(Box::new(conn)).await
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
