use crate::api::TransactionRecord;
use crate::models::{DetailLine, ModalView};
use crate::utils::{format_currency, format_detail_date, or_placeholder};

fn line(label: &'static str, value: String) -> DetailLine {
    DetailLine { label, value }
}

/// Fill the detail view from one in-memory transaction and show it
///
/// Fee and balance lines only appear when the value is present and non-zero.
pub fn show_transaction_details(modal: &mut ModalView, transaction: &TransactionRecord) {
    let mut lines = vec![
        line("Transaction ID", or_placeholder(transaction.transaction_id.as_deref())),
        line("Type", transaction.type_name.clone()),
        line("Date", format_detail_date(&transaction.date)),
        line("Amount", format_currency(transaction.amount)),
    ];
    if let Some(fee) = transaction.fee.filter(|f| *f != 0.0) {
        lines.push(line("Fee", format_currency(fee)));
    }
    if let Some(balance) = transaction.balance.filter(|b| *b != 0.0) {
        lines.push(line("Balance", format_currency(balance)));
    }
    lines.push(line("Sender", or_placeholder(transaction.sender.as_deref())));
    lines.push(line("Receiver", or_placeholder(transaction.receiver.as_deref())));
    lines.push(line("Status", or_placeholder(transaction.status.as_deref())));

    modal.lines = lines;
    modal.raw_message = transaction.raw_body.clone();
    modal.visible = true;
}

pub fn hide_transaction_details(modal: &mut ModalView) {
    modal.visible = false;
}
