use clap::Parser;
use matriculas_api::http;
use matriculas_api::utils::{logger, validation::Validate};
use matriculas_api::CliConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose);

    tracing::info!("Starting matriculas-api");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    http::run_server(&config).await
}
