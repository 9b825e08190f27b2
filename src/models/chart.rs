//! Chart definition models

use plotters::style::RGBColor;

use crate::utils::format_currency;

/// The three fixed chart positions on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChartSlot {
    TypeBreakdown,
    MonthlyVolume,
    PaymentsDeposits,
}

impl ChartSlot {
    /// File stem used for rendered artifacts
    pub fn file_stem(&self) -> &'static str {
        match self {
            ChartSlot::TypeBreakdown => "type-breakdown",
            ChartSlot::MonthlyVolume => "monthly-volume",
            ChartSlot::PaymentsDeposits => "payments-deposits",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Doughnut,
    Bar,
    Pie,
}

/// How data values are printed in labels and axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Count,
    Currency,
}

impl ValueFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Count => format!("{}", value.round() as i64),
            ValueFormat::Currency => format_currency(value),
        }
    }
}

/// Everything needed to draw one chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub slot: ChartSlot,
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<RGBColor>,
    pub value_format: ValueFormat,
}

impl ChartSpec {
    /// True when there is nothing meaningful to plot
    pub fn is_degenerate(&self) -> bool {
        self.values.is_empty() || self.values.iter().all(|v| *v <= 0.0)
    }

    /// `label: value` pairs for the text legend
    pub fn legend(&self) -> Vec<String> {
        self.labels
            .iter()
            .zip(&self.values)
            .map(|(label, value)| format!("{}: {}", label, self.value_format.format(*value)))
            .collect()
    }
}
