//! Transaction table view models

pub const NO_RESULTS_TEXT: &str = "No transactions found.";

/// One rendered transaction row
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Identifier the "view" action resolves against the current transactions
    pub id: i64,
    pub date: String,
    pub type_name: String,
    pub amount: String,
    pub sender: String,
    pub receiver: String,
}

impl TableRow {
    /// The command that opens this row's detail view
    pub fn action(&self) -> String {
        format!("view {}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableLine {
    Record(TableRow),
    /// Single row spanning all columns
    Placeholder(String),
}

/// Where the rows on screen came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableSource {
    /// Nothing fetched yet
    #[default]
    Initial,
    Loaded,
    /// The fetch failed; rows are the empty-result placeholder
    FetchFailed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableView {
    pub lines: Vec<TableLine>,
    pub source: TableSource,
}

impl TableView {
    #[cfg(test)]
    pub fn row_count(&self) -> usize {
        self.lines.len()
    }

    #[cfg(test)]
    pub fn records(&self) -> impl Iterator<Item = &TableRow> {
        self.lines.iter().filter_map(|line| match line {
            TableLine::Record(row) => Some(row),
            TableLine::Placeholder(_) => None,
        })
    }
}
