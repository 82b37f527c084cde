use clap::Parser;
use miette::{IntoDiagnostic, Result};
use receipt_processor::config::ServerConfig;
use receipt_processor::{server, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    telemetry::init();

    server::run(config).await.into_diagnostic()
}
