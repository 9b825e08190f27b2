use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use plotters::coord::ranged1d::SegmentValue;
use plotters::element::Pie;
use plotters::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

use crate::api::{CategoryTotal, MonthlyVolume, Summary, TypeCount};
use crate::models::{ChartKind, ChartSlot, ChartSpec, ValueFormat};

/// Categorical palette for the type breakdown, cycled past ten categories
pub const TYPE_PALETTE: [RGBColor; 10] = [
    RGBColor(0xff, 0xcc, 0x00),
    RGBColor(0x00, 0x67, 0x8f),
    RGBColor(0xff, 0x6b, 0x35),
    RGBColor(0x4e, 0xcd, 0xc4),
    RGBColor(0x45, 0xb7, 0xd1),
    RGBColor(0x96, 0xce, 0xb4),
    RGBColor(0xfe, 0xca, 0x57),
    RGBColor(0xff, 0x9f, 0xf3),
    RGBColor(0x54, 0xa0, 0xff),
    RGBColor(0x5f, 0x27, 0xcd),
];

pub const SPLIT_PALETTE: [RGBColor; 2] = [RGBColor(0xff, 0xcc, 0x00), RGBColor(0x00, 0x67, 0x8f)];

const BAR_COLOR: RGBColor = RGBColor(0xff, 0xcc, 0x00);

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Failed to prepare chart directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to draw chart: {0}")]
    Draw(String),
}

fn draw_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Draw(e.to_string())
}

/// Where and how large chart images are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOutput {
    pub dir: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// A constructed chart, owned by exactly one slot of the registry
#[derive(Debug)]
pub struct ChartInstance {
    pub id: u64,
    pub spec: ChartSpec,
    /// Rendered PNG, if an output directory is configured and drawing succeeded
    pub artifact: Option<PathBuf>,
}

impl ChartInstance {
    /// Release the instance and the image it produced
    fn destroy(self) {
        if let Some(path) = self.artifact {
            match fs::remove_file(&path) {
                Ok(()) => debug!("🗑️ Removed chart artifact {}", path.display()),
                Err(e) => warn!("Failed to remove chart artifact {}: {}", path.display(), e),
            }
        }
        debug!("Destroyed chart instance #{} ({})", self.id, self.spec.slot.file_stem());
    }
}

/// Live chart instances, at most one per slot
pub struct ChartRegistry {
    output: Option<ChartOutput>,
    slots: BTreeMap<ChartSlot, ChartInstance>,
    next_id: u64,
}

impl ChartRegistry {
    pub fn new(output: Option<ChartOutput>) -> Self {
        Self {
            output,
            slots: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// A registry that keeps chart data without drawing images
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new(None)
    }

    /// Destroy whatever occupies `spec.slot`, then build the new instance there
    pub fn replace(&mut self, spec: ChartSpec) -> &ChartInstance {
        let slot = spec.slot;
        if let Some(previous) = self.slots.remove(&slot) {
            previous.destroy();
        }

        let id = self.next_id;
        self.next_id += 1;

        let artifact = self.output.as_ref().and_then(|output| {
            let path = output.dir.join(format!("{}-{}.png", slot.file_stem(), id));
            match rasterize(&spec, &path, output) {
                Ok(()) => Some(path),
                Err(e) => {
                    warn!("Chart {} was not rendered: {}", slot.file_stem(), e);
                    None
                }
            }
        });

        self.slots
            .entry(slot)
            .or_insert(ChartInstance { id, spec, artifact })
    }

    pub fn instances(&self) -> impl Iterator<Item = &ChartInstance> {
        self.slots.values()
    }

    pub fn live_count(&self) -> usize {
        self.slots.len()
    }
}

/// Doughnut over transaction counts per type
pub fn type_breakdown_spec(counts: &[TypeCount]) -> ChartSpec {
    ChartSpec {
        slot: ChartSlot::TypeBreakdown,
        kind: ChartKind::Doughnut,
        title: "Transactions by Type".to_string(),
        labels: counts.iter().map(|c| c.name.clone()).collect(),
        values: counts.iter().map(|c| c.count as f64).collect(),
        colors: (0..counts.len()).map(|i| TYPE_PALETTE[i % TYPE_PALETTE.len()]).collect(),
        value_format: ValueFormat::Count,
    }
}

/// Bars of total volume per month
pub fn monthly_volume_spec(months: &[MonthlyVolume]) -> ChartSpec {
    ChartSpec {
        slot: ChartSlot::MonthlyVolume,
        kind: ChartKind::Bar,
        title: "Total Volume (RWF)".to_string(),
        labels: months.iter().map(|m| m.month.clone()).collect(),
        values: months.iter().map(|m| m.total_amount).collect(),
        colors: vec![BAR_COLOR; months.len()],
        value_format: ValueFormat::Currency,
    }
}

/// Pie of payments against deposits
pub fn payments_deposits_spec(totals: &[CategoryTotal]) -> ChartSpec {
    ChartSpec {
        slot: ChartSlot::PaymentsDeposits,
        kind: ChartKind::Pie,
        title: "Payments vs Deposits".to_string(),
        labels: totals.iter().map(|t| t.category.clone()).collect(),
        values: totals.iter().map(|t| t.total_amount).collect(),
        colors: (0..totals.len()).map(|i| SPLIT_PALETTE[i % SPLIT_PALETTE.len()]).collect(),
        value_format: ValueFormat::Currency,
    }
}

/// Rebuild all three charts from a summary; an absent summary leaves them as they are
pub fn render_charts(registry: &mut ChartRegistry, summary: Option<&Summary>) {
    let Some(summary) = summary else {
        debug!("No summary available, skipping chart render");
        return;
    };

    registry.replace(type_breakdown_spec(&summary.transactions_by_type));
    registry.replace(monthly_volume_spec(&summary.monthly_volume));
    registry.replace(payments_deposits_spec(&summary.payments_deposits));
}

/// Draw a chart to a PNG file
pub fn rasterize(spec: &ChartSpec, path: &Path, output: &ChartOutput) -> Result<(), ChartError> {
    fs::create_dir_all(&output.dir)?;
    let size = (output.width, output.height);

    match spec.kind {
        ChartKind::Doughnut | ChartKind::Pie => draw_proportion_chart(spec, path, size),
        ChartKind::Bar => draw_bar_chart(spec, path, size),
    }
}

fn draw_proportion_chart(
    spec: &ChartSpec,
    path: &Path,
    size: (u32, u32),
) -> Result<(), ChartError> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;
    let area = root
        .titled(&spec.title, ("sans-serif", 28).into_font())
        .map_err(draw_err)?;

    let (width, height) = area.dim_in_pixel();
    if spec.is_degenerate() {
        area.draw(&Text::new(
            "No data",
            (width as i32 / 2 - 30, height as i32 / 2),
            ("sans-serif", 20).into_font(),
        ))
        .map_err(draw_err)?;
    } else {
        let center = (width as i32 / 2, height as i32 / 2);
        let radius = f64::from(width.min(height)) * 0.32;
        let sizes: Vec<f64> = spec.values.iter().map(|v| v.max(0.0)).collect();
        let labels = spec.legend();

        let mut pie = Pie::new(&center, &radius, &sizes, &spec.colors, &labels);
        pie.start_angle(-90.0);
        pie.label_style(("sans-serif", 14).into_font().color(&BLACK));
        if spec.kind == ChartKind::Doughnut {
            pie.donut_hole(radius * 0.55);
        }
        area.draw(&pie).map_err(draw_err)?;
    }

    root.present().map_err(draw_err)?;
    Ok(())
}

fn draw_bar_chart(spec: &ChartSpec, path: &Path, size: (u32, u32)) -> Result<(), ChartError> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let bars = spec.values.len().max(1);
    let y_max = spec.values.iter().cloned().fold(0.0, f64::max).max(1.0) * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", 28).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(110)
        .build_cartesian_2d((0usize..bars).into_segmented(), 0f64..y_max)
        .map_err(draw_err)?;

    let labels = &spec.labels;
    let value_format = spec.value_format;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars)
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                labels.get(*i).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .y_label_formatter(&|v| value_format.format(*v))
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BAR_COLOR.mix(0.8).filled())
                .margin(10)
                .data(spec.values.iter().enumerate().map(|(i, v)| (i, v.max(0.0)))),
        )
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}
