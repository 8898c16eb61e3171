pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::{csv_log::CsvAppender, fetcher::RateFetcher, tracker::Tracker};
pub use crate::domain::model::{RateQuery, RateResult};
pub use crate::domain::ports::RateSource;
pub use crate::utils::error::{Result, TrackerError};
