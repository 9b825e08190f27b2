/// A plain-text table for terminal output
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Row>,
    col_widths: Vec<usize>,
}

enum Row {
    Cells(Vec<String>),
    /// A single cell spanning every column
    Spanning(String),
}

impl Table {
    /// Create a new table with the given headers
    pub fn new(headers: &[&str]) -> Self {
        let col_widths = headers.iter().map(|h| h.chars().count()).collect();
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            rows: Vec::new(),
            col_widths,
        }
    }

    /// Add a row; cells beyond the header count are ignored
    pub fn add_row(&mut self, row: Vec<String>) {
        for (i, col) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                self.col_widths[i] = self.col_widths[i].max(col.chars().count());
            }
        }
        self.rows.push(Row::Cells(row));
    }

    /// Add a row whose text is centred across the whole table
    pub fn add_spanning_row(&mut self, text: &str) {
        self.rows.push(Row::Spanning(text.to_string()));
    }

    #[cfg(test)]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn total_width(&self) -> usize {
        let separators = self.col_widths.len().saturating_sub(1) * 3;
        self.col_widths.iter().sum::<usize>() + separators
    }

    /// Render the table as a formatted string
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_cells(&self.headers));
        output.push('\n');
        output.push_str(&self.render_separator());
        output.push('\n');

        for row in &self.rows {
            let line = match row {
                Row::Cells(cells) => self.render_cells(cells),
                Row::Spanning(text) => {
                    let width = self.total_width().max(text.chars().count());
                    format!("{:^width$}", text, width = width)
                }
            };
            output.push_str(line.trim_end());
            output.push('\n');
        }

        output
    }

    fn render_cells(&self, row: &[String]) -> String {
        let columns = row.len().min(self.col_widths.len());
        let mut line = String::new();
        for (i, col) in row.iter().take(columns).enumerate() {
            let width = self.col_widths[i];
            line.push_str(&format!("{:<width$}", col, width = width));
            if i + 1 < columns {
                line.push_str(" | ");
            }
        }
        line
    }

    fn render_separator(&self) -> String {
        self.col_widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("-+-")
    }
}
