use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single transaction as returned by `GET /transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: i64,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub type_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub fee: Option<f64>,
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub receiver: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub raw_body: String,
}

/// Entry of `GET /transaction-types`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionType {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

/// Aggregate totals over the full transaction set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TotalStats {
    #[serde(default)]
    pub total_transactions: u64,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub avg_amount: f64,
    #[serde(default)]
    pub total_fees: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeCount {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyVolume {
    pub month: String,
    pub total_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total_amount: f64,
}

/// Response from `GET /summary`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub total_stats: TotalStats,
    #[serde(default)]
    pub transactions_by_type: Vec<TypeCount>,
    #[serde(default)]
    pub monthly_volume: Vec<MonthlyVolume>,
    #[serde(default)]
    pub payments_deposits: Vec<CategoryTotal>,
}

/// Response from `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Server-side filter criteria for `GET /transactions`
///
/// A field that is `None` or empty is not sent at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub kind: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub search: Option<String>,
}

impl TransactionFilter {
    /// Query parameters to send, skipping empty fields
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("type", &self.kind),
            ("start_date", &self.start_date),
            ("end_date", &self.end_date),
            ("search", &self.search),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .map(|v| (key, v))
        })
        .collect()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

/// Failure of a single API round trip
///
/// Users only ever see "failed to load"; the variants exist for logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}
