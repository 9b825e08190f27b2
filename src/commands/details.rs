use super::Reply;
use crate::services::dashboard_service::Dashboard;

/// `view <id>`: open the detail view for a row of the current table
///
/// Ids outside the current result set are ignored.
pub fn view(dashboard: &mut Dashboard, args: &[&str]) -> Result<Reply, String> {
    let id = args
        .first()
        .ok_or_else(|| "Usage: `view <id>`".to_string())?
        .parse::<i64>()
        .map_err(|_| {
            "❌ Invalid transaction id. Use the number shown in the Action column".to_string()
        })?;

    dashboard.view_details(id);
    Ok(Reply::Redraw)
}

/// `close`: hide the detail view
pub fn close(dashboard: &mut Dashboard) -> Result<Reply, String> {
    dashboard.close_details();
    Ok(Reply::Redraw)
}
