pub mod client;
pub mod models;
#[cfg(test)]
pub mod fake;

pub use client::{DashboardApi, MomoApiClient};
pub use models::{
    CategoryTotal, FetchError, MonthlyVolume, Summary, TransactionFilter, TransactionRecord,
    TypeCount,
};
