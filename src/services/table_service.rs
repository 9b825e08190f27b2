use crate::api::TransactionRecord;
use crate::models::{TableLine, TableRow, TableSource, TableView, NO_RESULTS_TEXT};
use crate::utils::{format_currency, format_table_date, or_placeholder};

/// Build the row for a single transaction
pub fn build_row(transaction: &TransactionRecord) -> TableRow {
    TableRow {
        id: transaction.id,
        date: format_table_date(&transaction.date),
        type_name: transaction.type_name.clone(),
        amount: format_currency(transaction.amount),
        sender: or_placeholder(transaction.sender.as_deref()),
        receiver: or_placeholder(transaction.receiver.as_deref()),
    }
}

/// Replace the table contents with one row per transaction, in the given order
///
/// An empty slice renders the single "no results" placeholder.
pub fn render_transactions_table(
    table: &mut TableView,
    transactions: &[TransactionRecord],
    source: TableSource,
) {
    table.source = source;
    table.lines = if transactions.is_empty() {
        vec![TableLine::Placeholder(NO_RESULTS_TEXT.to_string())]
    } else {
        transactions
            .iter()
            .map(|t| TableLine::Record(build_row(t)))
            .collect()
    };
}
