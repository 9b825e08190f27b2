//! The whole dashboard as the user sees it

use super::filter::{FilterInputs, ALL_TYPES};
use super::modal::ModalView;
use super::statistics::StatisticsView;
use super::table::TableView;

/// View model every renderer writes into
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub filters: FilterInputs,
    /// Type selector options, always led by `all`
    pub type_options: Vec<String>,
    pub table: TableView,
    pub statistics: StatisticsView,
    pub modal: ModalView,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            filters: FilterInputs::default(),
            type_options: vec![ALL_TYPES.to_string()],
            table: TableView::default(),
            statistics: StatisticsView::default(),
            modal: ModalView::default(),
            loading: false,
            error: None,
        }
    }
}

impl Screen {
    /// Show the loading indicator and hide any previous error
    pub fn show_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn hide_loading(&mut self) {
        self.loading = false;
    }

    pub fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }
}
