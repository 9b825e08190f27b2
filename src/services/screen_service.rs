use crate::models::{
    ChartKind, FilterInputs, ModalView, Screen, StatisticsView, TableLine, TableView,
};
use crate::services::chart_service::ChartRegistry;
use crate::utils::Table;

const TABLE_HEADERS: [&str; 6] = ["Date", "Type", "Amount", "Sender", "Receiver", "Action"];

/// Render the whole dashboard as terminal text
pub fn render_screen(screen: &Screen, charts: &ChartRegistry) -> String {
    let mut output = String::from("📊 MoMo Transactions Dashboard\n\n");

    if screen.loading {
        output.push_str("⏳ Loading...\n");
    }
    if let Some(error) = &screen.error {
        output.push_str(&format!("⚠️ {}\n", error));
    }

    output.push_str(&render_statistics(&screen.statistics));
    output.push('\n');
    output.push_str(&render_filters(&screen.filters));
    output.push('\n');
    output.push_str(&render_table(&screen.table));
    output.push('\n');
    output.push_str(&render_charts(charts));

    if screen.modal.visible {
        output.push('\n');
        output.push_str(&render_modal(&screen.modal));
    }

    output
}

pub fn render_statistics(statistics: &StatisticsView) -> String {
    format!(
        "Total Transactions: {} | Total Amount: {} | Average Amount: {} | Total Fees: {}\n",
        statistics.total_transactions,
        statistics.total_amount,
        statistics.average_amount,
        statistics.total_fees
    )
}

fn render_filters(filters: &FilterInputs) -> String {
    fn shown(value: &str) -> &str {
        if value.is_empty() {
            "-"
        } else {
            value
        }
    }

    format!(
        "Filters: type={} start={} end={} search={}\n",
        filters.type_name,
        shown(&filters.start_date),
        shown(&filters.end_date),
        shown(&filters.search)
    )
}

pub fn render_table(view: &TableView) -> String {
    let mut table = Table::new(&TABLE_HEADERS);
    for line in &view.lines {
        match line {
            TableLine::Record(row) => table.add_row(vec![
                row.date.clone(),
                format!("[{}]", row.type_name),
                row.amount.clone(),
                row.sender.clone(),
                row.receiver.clone(),
                row.action(),
            ]),
            TableLine::Placeholder(text) => table.add_spanning_row(text),
        }
    }
    table.render()
}

pub fn render_charts(charts: &ChartRegistry) -> String {
    let mut output = String::from("Charts:\n");
    if charts.live_count() == 0 {
        output.push_str("  (none)\n");
        return output;
    }

    for chart in charts.instances() {
        let kind = match chart.spec.kind {
            ChartKind::Doughnut => "doughnut",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
        };
        let location = chart
            .artifact
            .as_ref()
            .map(|p| format!(" -> {}", p.display()))
            .unwrap_or_default();
        output.push_str(&format!("  {} [{}]{}\n", chart.spec.title, kind, location));

        let legend = chart.spec.legend();
        if legend.is_empty() {
            output.push_str("    No data\n");
        }
        for entry in legend {
            output.push_str(&format!("    {}\n", entry));
        }
    }
    output
}

pub fn render_modal(modal: &ModalView) -> String {
    let mut output = String::from("─── Transaction Details ───\n");
    for line in &modal.lines {
        output.push_str(&format!("{}: {}\n", line.label, line.value));
    }
    output.push_str("Raw Message:\n");
    for raw_line in modal.raw_message.lines() {
        output.push_str(&format!("  {}\n", raw_line));
    }
    output.push_str("(type `close` to dismiss)\n");
    output
}
