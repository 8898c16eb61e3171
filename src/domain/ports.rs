use crate::domain::model::{RateQuery, RateResult};
use crate::utils::error::Result;
use async_trait::async_trait;

/// A source of exchange rates for a base currency.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch_rate(&self, query: &RateQuery) -> Result<RateResult>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn output_file(&self) -> &str;
    fn timeout_secs(&self) -> u64;
}
