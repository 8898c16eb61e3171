use crate::config::{DEFAULT_BASE, DEFAULT_SYMBOL};
use serde::{Deserialize, Serialize};

/// A single fetch request: base currency against a set of target symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateQuery {
    pub base: String,
    pub symbols: Vec<String>,
}

impl RateQuery {
    /// Builds a query from the two raw prompt lines. Tokens are trimmed and
    /// uppercased, empty tokens dropped; blank input falls back to the
    /// defaults (USD base, TRY target).
    pub fn from_input(base_line: &str, symbols_line: &str) -> Self {
        let base = base_line.trim().to_uppercase();
        let base = if base.is_empty() {
            DEFAULT_BASE.to_string()
        } else {
            base
        };

        let symbols: Vec<String> = symbols_line
            .split(',')
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .collect();
        let symbols = if symbols.is_empty() {
            vec![DEFAULT_SYMBOL.to_string()]
        } else {
            symbols
        };

        Self { base, symbols }
    }
}

/// Outer JSON structure returned by the rate API. All payload fields are
/// optional; validation happens against the decoded form.
#[derive(Debug, Clone, Deserialize)]
pub struct RateEnvelope {
    pub result: Option<String>,
    #[serde(default)]
    pub rates: serde_json::Map<String, serde_json::Value>,
    pub time_last_update_utc: Option<String>,
    pub base_code: Option<String>,
    #[serde(rename = "error-type")]
    pub error_type: Option<String>,
}

impl RateEnvelope {
    pub fn is_success(&self) -> bool {
        self.result.as_deref() == Some("success")
    }

    /// The API's reported failure kind: `error-type`, falling back to the
    /// raw `result` value.
    pub fn failure_kind(&self) -> String {
        self.error_type
            .clone()
            .or_else(|| self.result.clone())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Rates for the requested symbols. Transient value, not persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct RateResult {
    /// Server-supplied last-update timestamp, passed through verbatim.
    pub date: Option<String>,
    pub base: String,
    /// Requested symbols present in the response, in response order.
    pub rates: Vec<(String, f64)>,
}

/// One line of the CSV log.
#[derive(Debug, Clone, Serialize)]
pub struct RateRow {
    pub timestamp: String,
    pub base: String,
    pub symbol: String,
    pub rate: f64,
    pub asof_date: String,
}
