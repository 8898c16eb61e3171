use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

pub const DEFAULT_API_ENDPOINT: &str = "https://open.er-api.com/v6/latest";
pub const DEFAULT_OUTPUT_FILE: &str = "kur_kayitlari.csv";
pub const DEFAULT_BASE: &str = "USD";
pub const DEFAULT_SYMBOL: &str = "TRY";
pub const USER_AGENT: &str = "ExchangeTracker/1.0";

#[derive(Debug, Clone, Parser)]
#[command(name = "exchange-tracker")]
#[command(about = "Fetches currency exchange rates and logs them to a CSV file")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    #[arg(long, default_value = "5")]
    pub timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_path("output_file", &self.output_file)?;
        validation::validate_positive_number("timeout_secs", self.timeout_secs, 1)?;
        Ok(())
    }
}
