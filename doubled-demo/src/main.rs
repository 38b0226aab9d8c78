mod config;
mod driver;
mod error;

use std::path::PathBuf;

use tracing::{error, info};

use config::DemoConfig;
use error::DemoError;

fn main() -> Result<(), DemoError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting doubled-demo");

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = DemoConfig::load(path.as_deref()).inspect_err(|e| error!("{e}"))?;
    info!(
        lhs = config.lhs,
        rhs = config.rhs,
        levels = config.levels,
        "Running"
    );

    let reports = driver::run(&config)?;
    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
