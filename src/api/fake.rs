//! In-memory stand-in for the transactions API used by unit tests

use std::sync::Mutex;

use async_trait::async_trait;

use super::client::DashboardApi;
use super::models::{
    CategoryTotal, FetchError, HealthStatus, MonthlyVolume, Summary, TotalStats,
    TransactionFilter, TransactionRecord, TransactionType, TypeCount,
};

/// `None` in any slot makes the matching call fail with a network error
pub struct FakeApi {
    pub transactions: Mutex<Option<Vec<TransactionRecord>>>,
    pub summary: Mutex<Option<Summary>>,
    pub types: Mutex<Option<Vec<TransactionType>>>,
    pub seen_filters: Mutex<Vec<TransactionFilter>>,
}

impl FakeApi {
    pub fn new(
        transactions: Option<Vec<TransactionRecord>>,
        summary: Option<Summary>,
        types: Option<Vec<TransactionType>>,
    ) -> Self {
        Self {
            transactions: Mutex::new(transactions),
            summary: Mutex::new(summary),
            types: Mutex::new(types),
            seen_filters: Mutex::new(Vec::new()),
        }
    }

    /// Two records, a populated summary and three types
    pub fn populated() -> Self {
        Self::new(
            Some(vec![
                sample_record(1, "Incoming Money"),
                sample_record(2, "Payments to Code Holders"),
            ]),
            Some(sample_summary()),
            Some(sample_types()),
        )
    }

    pub fn set_transactions(&self, transactions: Option<Vec<TransactionRecord>>) {
        *self.transactions.lock().unwrap() = transactions;
    }

    pub fn last_filter(&self) -> Option<TransactionFilter> {
        self.seen_filters.lock().unwrap().last().cloned()
    }
}

fn network_error() -> FetchError {
    FetchError::Network("connection refused".to_string())
}

#[async_trait]
impl DashboardApi for FakeApi {
    async fn list_transaction_types(&self) -> Result<Vec<TransactionType>, FetchError> {
        self.types.lock().unwrap().clone().ok_or_else(network_error)
    }

    async fn list_transactions(
        &self,
        filter: &TransactionFilter,
    ) -> Result<Vec<TransactionRecord>, FetchError> {
        self.seen_filters.lock().unwrap().push(filter.clone());
        self.transactions.lock().unwrap().clone().ok_or_else(network_error)
    }

    async fn summary(&self) -> Result<Summary, FetchError> {
        self.summary.lock().unwrap().clone().ok_or_else(network_error)
    }

    async fn health(&self) -> Result<HealthStatus, FetchError> {
        Ok(HealthStatus {
            status: "ok".to_string(),
            message: Some("API is running".to_string()),
        })
    }
}

pub fn sample_record(id: i64, type_name: &str) -> TransactionRecord {
    TransactionRecord {
        id,
        transaction_id: Some(format!("TX{:05}", id)),
        type_name: type_name.to_string(),
        date: "2024-05-14T09:30:00".to_string(),
        amount: 1000.0 * id as f64,
        fee: Some(100.0),
        balance: Some(25000.0),
        sender: Some("Jane Smith".to_string()),
        receiver: Some("Samuel Carter".to_string()),
        status: Some("completed".to_string()),
        raw_body: format!("You have received {} RWF", 1000 * id),
    }
}

pub fn sample_summary() -> Summary {
    Summary {
        total_stats: TotalStats {
            total_transactions: 2,
            total_amount: 3000.0,
            avg_amount: 1500.0,
            total_fees: 200.0,
        },
        transactions_by_type: vec![
            TypeCount { name: "Incoming Money".to_string(), count: 1 },
            TypeCount { name: "Payments to Code Holders".to_string(), count: 1 },
        ],
        monthly_volume: vec![MonthlyVolume { month: "2024-05".to_string(), total_amount: 3000.0 }],
        payments_deposits: vec![
            CategoryTotal { category: "Deposits".to_string(), total_amount: 1000.0 },
            CategoryTotal { category: "Payments".to_string(), total_amount: 2000.0 },
        ],
    }
}

pub fn sample_types() -> Vec<TransactionType> {
    ["Incoming Money", "Payments to Code Holders", "Bank Deposits"]
        .iter()
        .enumerate()
        .map(|(i, name)| TransactionType {
            id: Some(i as i64 + 1),
            name: name.to_string(),
        })
        .collect()
}
