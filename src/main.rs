use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod models;
mod services;
mod session;
mod utils;

use api::MomoApiClient;
use commands::Reply;
use config::DashboardConfig;
use services::chart_service::ChartRegistry;
use services::dashboard_service::Dashboard;
use services::screen_service;
use session::Session;

fn redraw(dashboard: &Dashboard) {
    println!(
        "{}",
        screen_service::render_screen(&dashboard.screen, &dashboard.session.charts)
    );
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Logs go to stderr; stdout is the dashboard itself
    let env_filter = match "momo_dashboard=info".parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("📊 Starting MoMo transactions dashboard...");

    let config = match DashboardConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return;
        }
    };

    let client = match MomoApiClient::new(&config.api_base_url) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create API client: {}", e);
            return;
        }
    };
    info!("Using API at {}", client.base_url());
    if let Some(output) = &config.chart_output {
        info!("Charts will be written to {}", output.dir.display());
    }

    let session = Session::new(ChartRegistry::new(config.chart_output.clone()));
    let mut dashboard = Dashboard::new(Arc::new(client), session);

    dashboard.probe_health().await;
    dashboard.bootstrap().await;
    redraw(&dashboard);
    println!("Type `help` for commands.");

    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        error!("Failed to read input: {}", e);
                        break;
                    }
                };

                match commands::handle_line(&mut dashboard, &line, &events_tx).await {
                    Ok(Reply::Redraw) => redraw(&dashboard),
                    Ok(Reply::Message(message)) => {
                        if !message.is_empty() {
                            println!("{}", message);
                        }
                    }
                    Ok(Reply::Quit) => break,
                    Err(message) => println!("{}", message),
                }
            }
            Some(event) = events_rx.recv() => {
                if dashboard.handle_fetch_event(event) {
                    redraw(&dashboard);
                } else {
                    debug!("Ignored superseded response");
                }
            }
        }
    }

    info!("👋 Dashboard closed");
}
