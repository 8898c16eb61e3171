use clap::Parser;
use exchange_tracker::domain::ports::ConfigProvider;
use exchange_tracker::utils::{logger, validation::Validate};
use exchange_tracker::{CliConfig, CsvAppender, RateFetcher, Tracker};
use std::io;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting exchange-tracker");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Hata: {}", e);
        std::process::exit(1);
    }

    let fetcher = RateFetcher::from_config(&config)?;
    let tracker = Tracker::new(fetcher, CsvAppender::new(config.output_file()));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    tracker.run(&mut input, &mut output).await?;

    Ok(())
}
