use tokio::sync::mpsc::UnboundedSender;

use super::Reply;
use crate::services::dashboard_service::Dashboard;
use crate::services::filter_service::{self, FetchEvent, FilterField};

const SET_USAGE: &str = "Usage: `set <type|start|end|search> <value>`";
const UNSET_USAGE: &str = "Usage: `unset <type|start|end|search>`";

/// `apply`: fetch with the current inputs in the background
pub fn apply(
    dashboard: &mut Dashboard,
    events: &UnboundedSender<FetchEvent>,
) -> Result<Reply, String> {
    let request = dashboard.begin_apply();
    filter_service::spawn_fetch(dashboard.api(), request, events.clone());
    Ok(Reply::Redraw)
}

/// `clear`: reset all inputs and fetch unfiltered
pub fn clear(
    dashboard: &mut Dashboard,
    events: &UnboundedSender<FetchEvent>,
) -> Result<Reply, String> {
    let request = dashboard.begin_clear();
    filter_service::spawn_fetch(dashboard.api(), request, events.clone());
    Ok(Reply::Redraw)
}

/// `set <field> <value...>`: edit one input without fetching
pub fn set(dashboard: &mut Dashboard, args: &[&str]) -> Result<Reply, String> {
    let (field, value) = match args.split_first() {
        Some((field, rest)) if !rest.is_empty() => (field.parse::<FilterField>()?, rest.join(" ")),
        _ => return Err(SET_USAGE.to_string()),
    };

    filter_service::set_input(&mut dashboard.screen, field, &value)?;
    Ok(Reply::Message(format!(
        "✅ Filter updated. Type `apply` to fetch ({:?} = {})",
        field, value
    )))
}

/// `unset <field>`: return one input to its default
pub fn unset(dashboard: &mut Dashboard, args: &[&str]) -> Result<Reply, String> {
    let field = args
        .first()
        .ok_or_else(|| UNSET_USAGE.to_string())?
        .parse::<FilterField>()?;

    filter_service::unset_input(&mut dashboard.screen, field);
    Ok(Reply::Message(format!("✅ {:?} filter cleared", field)))
}

/// `types`: list the type selector options
pub fn types(dashboard: &Dashboard) -> Result<Reply, String> {
    Ok(Reply::Message(format!(
        "Transaction types: {}",
        dashboard.screen.type_options.join(", ")
    )))
}
