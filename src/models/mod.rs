//! View models for the dashboard screen
//!
//! Renderers in `services` write into these; the presenter prints them.

pub mod chart;
pub mod filter;
pub mod modal;
pub mod screen;
pub mod statistics;
pub mod table;

pub use chart::{ChartKind, ChartSlot, ChartSpec, ValueFormat};
pub use filter::{FilterInputs, ALL_TYPES};
pub use modal::{DetailLine, ModalView};
pub use screen::Screen;
pub use statistics::StatisticsView;
pub use table::{TableLine, TableRow, TableSource, TableView, NO_RESULTS_TEXT};
