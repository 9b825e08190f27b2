pub mod details;
pub mod filter;
pub mod help;
pub mod reload;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use crate::services::dashboard_service::Dashboard;
use crate::services::filter_service::FetchEvent;

/// What the event loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the dashboard again
    Redraw,
    /// Print a message without redrawing
    Message(String),
    Quit,
}

/// Route one input line to its handler
///
/// Errors are user-facing messages; the session always continues.
pub async fn handle_line(
    dashboard: &mut Dashboard,
    line: &str,
    events: &UnboundedSender<FetchEvent>,
) -> Result<Reply, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&command, args)) = parts.split_first() else {
        return Ok(Reply::Message(String::new()));
    };
    debug!("Command {} with args {:?}", command, args);

    let result = match command.to_lowercase().as_str() {
        "apply" | "filter" => filter::apply(dashboard, events),
        "clear" | "reset" => filter::clear(dashboard, events),
        "set" => filter::set(dashboard, args),
        "unset" => filter::unset(dashboard, args),
        "types" => filter::types(dashboard),
        "view" | "details" => details::view(dashboard, args),
        "close" => details::close(dashboard),
        "show" | "ls" => Ok(Reply::Redraw),
        "reload" | "refresh" => reload::execute(dashboard).await,
        "help" | "?" => Ok(help::execute()),
        "quit" | "exit" | "q" => Ok(Reply::Quit),
        _ => Err(format!(
            "❌ Unknown command: '{}'. Type `help` for the list of commands.",
            command
        )),
    };

    if let Err(e) = &result {
        warn!("Command {} failed: {}", command, e);
    }
    result
}
