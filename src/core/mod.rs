pub mod csv_log;
pub mod fetcher;
pub mod tracker;

pub use crate::domain::model::{RateEnvelope, RateQuery, RateResult, RateRow};
pub use crate::domain::ports::{ConfigProvider, RateSource};
pub use crate::utils::error::Result;
