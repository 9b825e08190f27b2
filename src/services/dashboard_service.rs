use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::api::{DashboardApi, Summary, TransactionFilter};
use crate::models::{Screen, ALL_TYPES};
use crate::services::filter_service::{self, FetchEvent, TransactionRequest};
use crate::services::{chart_service, modal_service, statistics_service};
use crate::session::{Session, ViewKey};

pub const SUMMARY_ERROR: &str = "Failed to load summary statistics.";
pub const TYPES_ERROR: &str = "Failed to load transaction types.";

/// The running dashboard: API handle, session state and the screen
pub struct Dashboard {
    api: Arc<dyn DashboardApi>,
    pub session: Session,
    pub screen: Screen,
}

impl Dashboard {
    pub fn new(api: Arc<dyn DashboardApi>, session: Session) -> Self {
        Self {
            api,
            session,
            screen: Screen::default(),
        }
    }

    pub fn api(&self) -> Arc<dyn DashboardApi> {
        Arc::clone(&self.api)
    }

    /// Log whether the API answers its health check; never fatal
    pub async fn probe_health(&self) {
        match self.api.health().await {
            Ok(health) => info!(
                "API health: {} ({})",
                health.status,
                health.message.as_deref().unwrap_or("no message")
            ),
            Err(e) => warn!("API health check failed: {}", e),
        }
    }

    /// Initial load: transactions and summary together, then the type options
    ///
    /// Failures degrade to the empty state instead of stopping the load.
    pub async fn bootstrap(&mut self) {
        info!("Loading dashboard...");
        self.screen.show_loading();

        let transactions_ticket = self.session.requests.issue(ViewKey::Transactions);
        let summary_ticket = self.session.requests.issue(ViewKey::Summary);
        let no_filter = TransactionFilter::default();

        let (transactions, summary) =
            tokio::join!(self.api.list_transactions(&no_filter), self.api.summary());

        filter_service::store_transactions(
            &mut self.session,
            &mut self.screen,
            transactions_ticket,
            transactions,
        );

        let summary: Option<Summary> = match summary {
            Ok(summary) => Some(summary),
            Err(e) => {
                error!("Error fetching summary: {}", e);
                self.screen.show_error(SUMMARY_ERROR);
                None
            }
        };
        if self.session.requests.is_current(&summary_ticket) {
            self.render_summary(summary.as_ref());
        }

        self.load_transaction_types().await;
        self.screen.hide_loading();
        info!(
            "Dashboard ready: {} transactions, {} charts",
            self.session.current_transactions.len(),
            self.session.charts.live_count()
        );
    }

    fn render_summary(&mut self, summary: Option<&Summary>) {
        statistics_service::update_statistics(&mut self.screen.statistics, summary);
        chart_service::render_charts(&mut self.session.charts, summary);
    }

    /// Replace the type selector options, keeping `all` first
    pub async fn load_transaction_types(&mut self) {
        match self.api.list_transaction_types().await {
            Ok(types) => {
                let mut options = vec![ALL_TYPES.to_string()];
                for t in types {
                    if !options.iter().any(|o| o.eq_ignore_ascii_case(&t.name)) {
                        options.push(t.name);
                    }
                }
                debug!("Loaded {} transaction types", options.len() - 1);
                self.screen.type_options = options;
            }
            Err(e) => {
                error!("Error fetching transaction types: {}", e);
                self.screen.show_error(TYPES_ERROR);
            }
        }
    }

    pub fn begin_apply(&mut self) -> TransactionRequest {
        filter_service::begin_apply(&mut self.session, &mut self.screen)
    }

    pub fn begin_clear(&mut self) -> TransactionRequest {
        filter_service::clear_filters(&mut self.session, &mut self.screen)
    }

    /// Apply a settled fetch; false when it was superseded
    pub fn handle_fetch_event(&mut self, event: FetchEvent) -> bool {
        filter_service::complete_apply(&mut self.session, &mut self.screen, event)
    }

    /// Open the detail view for a transaction in the current result set
    ///
    /// Unknown ids are ignored.
    pub fn view_details(&mut self, id: i64) -> bool {
        match self.session.find_transaction(id) {
            Some(transaction) => {
                modal_service::show_transaction_details(&mut self.screen.modal, transaction);
                true
            }
            None => {
                debug!("No transaction {} in the current result set", id);
                false
            }
        }
    }

    pub fn close_details(&mut self) {
        modal_service::hide_transaction_details(&mut self.screen.modal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{sample_record, FakeApi};
    use crate::models::{TableLine, TableSource, NO_RESULTS_TEXT};
    use crate::services::chart_service::ChartRegistry;
    use crate::services::filter_service::TRANSACTIONS_ERROR;
    use tokio::sync::mpsc;

    /// Spawn the request the way the input loop does and feed back its event
    async fn settle(dashboard: &mut Dashboard, request: TransactionRequest) -> bool {
        let (events_tx, mut events_rx) = mpsc::unbounded_channel();
        filter_service::spawn_fetch(dashboard.api(), request, events_tx);
        let event = events_rx.recv().await.unwrap();
        dashboard.handle_fetch_event(event)
    }

    fn dashboard(api: FakeApi) -> (Dashboard, Arc<FakeApi>) {
        let api = Arc::new(api);
        let dashboard = Dashboard::new(api.clone(), Session::new(ChartRegistry::in_memory()));
        (dashboard, api)
    }

    #[tokio::test]
    async fn test_bootstrap_renders_everything() {
        let (mut dashboard, api) = dashboard(FakeApi::populated());
        dashboard.bootstrap().await;

        let screen = &dashboard.screen;
        assert!(!screen.loading);
        assert_eq!(screen.error, None);
        assert_eq!(screen.table.records().count(), 2);
        assert_eq!(screen.statistics.total_transactions, "2");
        assert_eq!(screen.type_options.len(), 4);
        assert_eq!(screen.type_options[0], ALL_TYPES);
        assert_eq!(dashboard.session.charts.live_count(), 3);
        assert_eq!(api.last_filter(), Some(TransactionFilter::default()));
    }

    #[tokio::test]
    async fn test_bootstrap_with_empty_data() {
        let mut summary = Summary::default();
        summary.total_stats.total_transactions = 0;
        let (mut dashboard, _) =
            dashboard(FakeApi::new(Some(Vec::new()), Some(summary), Some(Vec::new())));

        dashboard.bootstrap().await;

        let screen = &dashboard.screen;
        assert_eq!(
            screen.table.lines,
            vec![TableLine::Placeholder(NO_RESULTS_TEXT.to_string())]
        );
        assert_eq!(screen.table.source, TableSource::Loaded);
        assert_eq!(screen.statistics.total_transactions, "0");
        assert_eq!(screen.statistics.average_amount, "RF 0");
        assert_eq!(dashboard.session.charts.live_count(), 3);
        assert_eq!(screen.error, None);
    }

    #[tokio::test]
    async fn test_bootstrap_survives_transaction_failure() {
        let api = FakeApi::populated();
        api.set_transactions(None);
        let (mut dashboard, _) = dashboard(api);
        dashboard.session.current_transactions = vec![sample_record(99, "Payment")];

        dashboard.bootstrap().await;

        assert!(dashboard.session.current_transactions.is_empty());

        let screen = &dashboard.screen;
        assert_eq!(screen.table.row_count(), 1);
        assert_eq!(screen.table.source, TableSource::FetchFailed);
        assert_eq!(screen.error.as_deref(), Some(TRANSACTIONS_ERROR));
        // the summary branch still rendered
        assert_eq!(screen.statistics.total_amount, "RF 3,000");
        assert!(!screen.loading);
    }

    #[tokio::test]
    async fn test_bootstrap_without_summary_skips_rendering() {
        let (mut dashboard, _) = dashboard(FakeApi::new(
            Some(vec![sample_record(1, "Payment")]),
            None,
            Some(Vec::new()),
        ));

        dashboard.bootstrap().await;

        assert_eq!(dashboard.screen.error.as_deref(), Some(SUMMARY_ERROR));
        assert_eq!(dashboard.screen.statistics.total_amount, "-");
        assert_eq!(dashboard.session.charts.live_count(), 0);
        assert_eq!(dashboard.screen.table.records().count(), 1);
    }

    #[tokio::test]
    async fn test_type_failure_keeps_existing_options() {
        let (mut dashboard, _) =
            dashboard(FakeApi::new(Some(Vec::new()), Some(Summary::default()), None));
        dashboard.bootstrap().await;

        assert_eq!(dashboard.screen.type_options, vec![ALL_TYPES.to_string()]);
        assert_eq!(dashboard.screen.error.as_deref(), Some(TYPES_ERROR));
    }

    #[tokio::test]
    async fn test_view_resolves_against_current_transactions() {
        let (mut dashboard, api) = dashboard(FakeApi::populated());
        dashboard.bootstrap().await;

        let ids: Vec<i64> = dashboard.screen.table.records().map(|r| r.id).collect();
        for id in ids {
            assert!(dashboard.view_details(id));
            assert_eq!(
                dashboard.screen.modal.value_of("Transaction ID"),
                Some(format!("TX{:05}", id).as_str())
            );
        }

        api.set_transactions(Some(vec![sample_record(7, "Deposit")]));
        let request = dashboard.begin_apply();
        assert!(settle(&mut dashboard, request).await);

        // row 1 belonged to the previous result set
        dashboard.close_details();
        assert!(!dashboard.view_details(1));
        assert!(!dashboard.screen.modal.visible);
        assert!(dashboard.view_details(7));
    }

    #[tokio::test]
    async fn test_clear_filters_refetches_without_constraints() {
        let (mut dashboard, api) = dashboard(FakeApi::populated());
        dashboard.bootstrap().await;
        dashboard.screen.filters.search = "airtime".to_string();

        let request = dashboard.begin_apply();
        assert!(dashboard.screen.loading);
        assert!(settle(&mut dashboard, request).await);
        assert_eq!(
            api.last_filter().and_then(|f| f.search).as_deref(),
            Some("airtime")
        );

        let request = dashboard.begin_clear();
        assert!(dashboard.screen.filters.search.is_empty());
        assert!(settle(&mut dashboard, request).await);
        assert_eq!(api.last_filter(), Some(TransactionFilter::default()));
        assert!(!dashboard.screen.loading);
    }

    #[tokio::test]
    async fn test_superseded_apply_is_dropped() {
        let (mut dashboard, api) = dashboard(FakeApi::populated());
        dashboard.bootstrap().await;

        let stale = dashboard.begin_apply();
        let latest = dashboard.begin_apply();

        // the stale request still sees the old data set
        assert!(!settle(&mut dashboard, stale).await);
        assert!(dashboard.screen.loading);

        api.set_transactions(Some(vec![sample_record(7, "Deposit")]));
        assert!(settle(&mut dashboard, latest).await);

        let ids: Vec<i64> = dashboard.screen.table.records().map(|r| r.id).collect();
        assert_eq!(ids, vec![7]);
        assert!(!dashboard.screen.loading);
    }
}
