use tracing::info;

use super::Reply;
use crate::services::dashboard_service::Dashboard;

/// `reload`: run the initial load again, summary included
pub async fn execute(dashboard: &mut Dashboard) -> Result<Reply, String> {
    info!("🔄 Reloading dashboard");
    dashboard.bootstrap().await;
    Ok(Reply::Redraw)
}
