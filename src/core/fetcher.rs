use crate::config::USER_AGENT;
use crate::core::{ConfigProvider, RateQuery, RateResult, RateSource, Result};
use crate::domain::model::RateEnvelope;
use crate::utils::error::TrackerError;
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashSet;
use std::time::Duration;

/// Client for the open.er-api.com latest-rates endpoint. One GET per call,
/// no retries, no caching.
pub struct RateFetcher {
    client: Client,
    api_url: String,
}

impl RateFetcher {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    pub fn from_config(config: &impl ConfigProvider) -> Result<Self> {
        Self::new(
            config.api_endpoint(),
            Duration::from_secs(config.timeout_secs()),
        )
    }

    fn rate_url(&self, base: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), base)
    }
}

#[async_trait]
impl RateSource for RateFetcher {
    async fn fetch_rate(&self, query: &RateQuery) -> Result<RateResult> {
        let url = self.rate_url(&query.base);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Rate API response status: {}", status);

        if !status.is_success() {
            return Err(TrackerError::HttpError { status });
        }

        let body = response.text().await?;
        let envelope: RateEnvelope = serde_json::from_str(&body)?;

        if !envelope.is_success() {
            return Err(TrackerError::ApiError(format!(
                "API hata: {}",
                envelope.failure_kind()
            )));
        }

        let requested: HashSet<&str> = query.symbols.iter().map(String::as_str).collect();
        let rates: Vec<(String, f64)> = envelope
            .rates
            .iter()
            .filter(|(code, _)| requested.contains(code.as_str()))
            .filter_map(|(code, value)| value.as_f64().map(|rate| (code.clone(), rate)))
            .collect();

        if rates.is_empty() {
            return Err(TrackerError::ApiError(
                "İstenen semboller bulunamadı / API dönmedi.".to_string(),
            ));
        }

        tracing::debug!("Picked {} of {} rates", rates.len(), envelope.rates.len());

        Ok(RateResult {
            date: envelope.time_last_update_utc,
            base: envelope.base_code.unwrap_or_else(|| query.base.clone()),
            rates,
        })
    }
}
