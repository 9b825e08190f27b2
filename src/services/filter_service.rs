use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, error};

use crate::api::{DashboardApi, FetchError, TransactionFilter, TransactionRecord};
use crate::models::{Screen, TableSource};
use crate::services::table_service;
use crate::session::{RequestTicket, Session, ViewKey};

pub const TRANSACTIONS_ERROR: &str = "Failed to load transactions.";

/// One of the four filter inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Type,
    StartDate,
    EndDate,
    Search,
}

impl FromStr for FilterField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "type" => Ok(FilterField::Type),
            "start" | "start_date" | "from" => Ok(FilterField::StartDate),
            "end" | "end_date" | "to" => Ok(FilterField::EndDate),
            "search" | "q" => Ok(FilterField::Search),
            _ => Err(format!(
                "❌ Unknown filter field: '{}'. Use: type, start, end, search",
                s
            )),
        }
    }
}

/// A transactions request that has been issued but not answered yet
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRequest {
    pub ticket: RequestTicket,
    pub filter: TransactionFilter,
}

/// A settled fetch handed back to the event loop
#[derive(Debug)]
pub struct FetchEvent {
    pub ticket: RequestTicket,
    pub result: Result<Vec<TransactionRecord>, FetchError>,
}

/// Set one filter input
///
/// Dates must be `YYYY-MM-DD`; a type must be one of the loaded options.
pub fn set_input(screen: &mut Screen, field: FilterField, value: &str) -> Result<(), String> {
    let value = value.trim();
    match field {
        FilterField::Type => {
            let option = screen
                .type_options
                .iter()
                .find(|o| o.eq_ignore_ascii_case(value))
                .cloned()
                .ok_or_else(|| {
                    format!(
                        "❌ Unknown transaction type: '{}'. Options: {}",
                        value,
                        screen.type_options.join(", ")
                    )
                })?;
            screen.filters.type_name = option;
        }
        FilterField::StartDate | FilterField::EndDate => {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map_err(|_| format!("❌ Invalid date: '{}'. Use YYYY-MM-DD", value))?;
            if field == FilterField::StartDate {
                screen.filters.start_date = value.to_string();
            } else {
                screen.filters.end_date = value.to_string();
            }
        }
        FilterField::Search => screen.filters.search = value.to_string(),
    }
    Ok(())
}

/// Return one filter input to its default
pub fn unset_input(screen: &mut Screen, field: FilterField) {
    let defaults = crate::models::FilterInputs::default();
    match field {
        FilterField::Type => screen.filters.type_name = defaults.type_name,
        FilterField::StartDate => screen.filters.start_date = defaults.start_date,
        FilterField::EndDate => screen.filters.end_date = defaults.end_date,
        FilterField::Search => screen.filters.search = defaults.search,
    }
}

/// Enter the loading state and issue a request for the current inputs
pub fn begin_apply(session: &mut Session, screen: &mut Screen) -> TransactionRequest {
    screen.show_loading();
    let ticket = session.requests.issue(ViewKey::Transactions);
    let filter = screen.filters.to_filter();
    debug!("Issuing transactions request #{} with {:?}", ticket.generation, filter);
    TransactionRequest { ticket, filter }
}

/// Reset every input, then apply the now-empty filter
pub fn clear_filters(session: &mut Session, screen: &mut Screen) -> TransactionRequest {
    screen.filters.reset();
    begin_apply(session, screen)
}

/// Store a settled result as the current transactions and re-render the table
///
/// Returns false if a newer request superseded this one; nothing is touched then.
pub fn store_transactions(
    session: &mut Session,
    screen: &mut Screen,
    ticket: RequestTicket,
    result: Result<Vec<TransactionRecord>, FetchError>,
) -> bool {
    if !session.requests.is_current(&ticket) {
        debug!("Discarding stale transactions response #{}", ticket.generation);
        return false;
    }

    let (transactions, source) = match result {
        Ok(transactions) => (transactions, TableSource::Loaded),
        Err(e) => {
            error!("Error fetching transactions: {}", e);
            screen.show_error(TRANSACTIONS_ERROR);
            (Vec::new(), TableSource::FetchFailed)
        }
    };

    session.current_transactions = transactions;
    table_service::render_transactions_table(
        &mut screen.table,
        &session.current_transactions,
        source,
    );
    true
}

/// Settle an apply/clear: store the result and leave the loading state
pub fn complete_apply(session: &mut Session, screen: &mut Screen, event: FetchEvent) -> bool {
    let applied = store_transactions(session, screen, event.ticket, event.result);
    if applied {
        screen.hide_loading();
    }
    applied
}

/// Run the request on its own task and report back through `events`
pub fn spawn_fetch(
    api: Arc<dyn DashboardApi>,
    request: TransactionRequest,
    events: UnboundedSender<FetchEvent>,
) {
    tokio::spawn(async move {
        let result = api.list_transactions(&request.filter).await;
        if events
            .send(FetchEvent {
                ticket: request.ticket,
                result,
            })
            .is_err()
        {
            debug!("Event loop closed before request #{} settled", request.ticket.generation);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{sample_record, FakeApi};
    use crate::models::ALL_TYPES;
    use crate::services::chart_service::ChartRegistry;

    fn fixtures() -> (Session, Screen) {
        let mut screen = Screen::default();
        screen.type_options = vec![
            ALL_TYPES.to_string(),
            "Incoming Money".to_string(),
            "Bank Deposits".to_string(),
        ];
        (Session::new(ChartRegistry::in_memory()), screen)
    }

    #[test]
    fn test_set_type_matches_option_case_insensitively() {
        let (_, mut screen) = fixtures();
        set_input(&mut screen, FilterField::Type, "bank deposits").unwrap();
        assert_eq!(screen.filters.type_name, "Bank Deposits");

        assert!(set_input(&mut screen, FilterField::Type, "Lottery").is_err());
        assert_eq!(screen.filters.type_name, "Bank Deposits");
    }

    #[test]
    fn test_set_date_requires_iso_format() {
        let (_, mut screen) = fixtures();
        assert!(set_input(&mut screen, FilterField::StartDate, "01/02/2024").is_err());
        set_input(&mut screen, FilterField::EndDate, "2024-02-01").unwrap();
        assert_eq!(screen.filters.end_date, "2024-02-01");

        unset_input(&mut screen, FilterField::EndDate);
        assert!(screen.filters.end_date.is_empty());
    }

    #[test]
    fn test_field_aliases() {
        assert_eq!("from".parse::<FilterField>(), Ok(FilterField::StartDate));
        assert_eq!("END_DATE".parse::<FilterField>(), Ok(FilterField::EndDate));
        assert!("amount".parse::<FilterField>().is_err());
    }

    #[test]
    fn test_begin_apply_enters_loading_and_hides_error() {
        let (mut session, mut screen) = fixtures();
        screen.show_error("old failure");
        screen.filters.search = "airtime".to_string();

        let request = begin_apply(&mut session, &mut screen);

        assert!(screen.loading);
        assert_eq!(screen.error, None);
        assert_eq!(request.filter.search.as_deref(), Some("airtime"));
        assert_eq!(request.filter.kind, None);
    }

    #[test]
    fn test_clear_resets_inputs_before_applying() {
        let (mut session, mut screen) = fixtures();
        screen.filters.type_name = "Bank Deposits".to_string();
        screen.filters.start_date = "2024-01-01".to_string();

        let request = clear_filters(&mut session, &mut screen);

        assert!(request.filter.is_empty());
        assert_eq!(screen.filters.type_name, ALL_TYPES);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let (mut session, mut screen) = fixtures();
        let slow = begin_apply(&mut session, &mut screen);
        let fast = begin_apply(&mut session, &mut screen);

        let applied = complete_apply(
            &mut session,
            &mut screen,
            FetchEvent { ticket: fast.ticket, result: Ok(vec![sample_record(2, "Deposit")]) },
        );
        assert!(applied);
        assert!(!screen.loading);

        let applied = complete_apply(
            &mut session,
            &mut screen,
            FetchEvent { ticket: slow.ticket, result: Ok(vec![sample_record(1, "Payment")]) },
        );
        assert!(!applied);
        assert_eq!(session.current_transactions.len(), 1);
        assert_eq!(session.current_transactions[0].id, 2);
    }

    #[test]
    fn test_failure_is_distinct_from_empty_result() {
        let (mut session, mut screen) = fixtures();
        session.current_transactions = vec![sample_record(1, "Payment")];

        let request = begin_apply(&mut session, &mut screen);
        complete_apply(
            &mut session,
            &mut screen,
            FetchEvent {
                ticket: request.ticket,
                result: Err(FetchError::Network("connection refused".to_string())),
            },
        );

        assert!(session.current_transactions.is_empty());
        assert_eq!(screen.table.row_count(), 1);
        assert_eq!(screen.table.source, TableSource::FetchFailed);
        assert_eq!(screen.error.as_deref(), Some(TRANSACTIONS_ERROR));
        assert!(!screen.loading);

        let request = begin_apply(&mut session, &mut screen);
        complete_apply(
            &mut session,
            &mut screen,
            FetchEvent { ticket: request.ticket, result: Ok(Vec::new()) },
        );
        assert_eq!(screen.table.source, TableSource::Loaded);
        assert_eq!(screen.error, None);
    }

    #[tokio::test]
    async fn test_spawned_fetch_reports_back() {
        let (mut session, mut screen) = fixtures();
        let api = Arc::new(FakeApi::populated());
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

        screen.filters.type_name = "Incoming Money".to_string();
        let request = begin_apply(&mut session, &mut screen);
        spawn_fetch(api.clone(), request, tx);

        let event = rx.recv().await.unwrap();
        assert!(complete_apply(&mut session, &mut screen, event));
        assert_eq!(screen.table.records().count(), 2);
        assert_eq!(
            api.last_filter().and_then(|f| f.kind).as_deref(),
            Some("Incoming Money")
        );
    }
}
