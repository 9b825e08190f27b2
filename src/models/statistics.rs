//! Summary statistics panel

const UNSET: &str = "-";

/// Four formatted figures shown above the table
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsView {
    pub total_transactions: String,
    pub total_amount: String,
    pub average_amount: String,
    pub total_fees: String,
}

impl Default for StatisticsView {
    fn default() -> Self {
        Self {
            total_transactions: UNSET.to_string(),
            total_amount: UNSET.to_string(),
            average_amount: UNSET.to_string(),
            total_fees: UNSET.to_string(),
        }
    }
}
