pub mod format;
pub mod table;

pub use format::{format_currency, format_detail_date, format_table_date, or_placeholder};
pub use table::Table;
