//! Per-session state shared by the renderers
//!
//! Holds the last fetched transactions, the live chart instances and the
//! request generations used to drop superseded responses.

use std::collections::HashMap;

use crate::api::TransactionRecord;
use crate::services::chart_service::ChartRegistry;

/// Independent request streams; generations are counted per view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKey {
    Transactions,
    Summary,
}

/// Tag attached to an outgoing request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub view: ViewKey,
    pub generation: u64,
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: HashMap<ViewKey, u64>,
}

impl RequestTracker {
    /// Issue the next ticket for `view`, superseding all earlier ones
    pub fn issue(&mut self, view: ViewKey) -> RequestTicket {
        let generation = self.latest.entry(view).or_insert(0);
        *generation += 1;
        RequestTicket {
            view,
            generation: *generation,
        }
    }

    /// Only the most recently issued ticket of a view is current
    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.latest.get(&ticket.view) == Some(&ticket.generation)
    }
}

pub struct Session {
    /// Last fetched transactions, used to resolve "view" actions
    pub current_transactions: Vec<TransactionRecord>,
    pub charts: ChartRegistry,
    pub requests: RequestTracker,
}

impl Session {
    pub fn new(charts: ChartRegistry) -> Self {
        Self {
            current_transactions: Vec::new(),
            charts,
            requests: RequestTracker::default(),
        }
    }

    pub fn find_transaction(&self, id: i64) -> Option<&TransactionRecord> {
        self.current_transactions.iter().find(|t| t.id == id)
    }
}
