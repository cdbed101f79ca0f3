//! Trip Chat - a trip group chat viewer built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI and owns the chat view state
//! - Backend thread: runs a Tokio runtime for HTTP fetches
//! - Communication via crossbeam channels (lock-free, sync-safe)

use std::sync::Arc;

use eframe::egui;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tripchat::app::TripChatApp;
use tripchat::client::{HttpChatClient, PageSource};
use tripchat::config::load_settings;

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let settings = load_settings();
    info!(host = %settings.host, "Starting trip chat");

    let source: Arc<dyn PageSource> = match HttpChatClient::new(settings.clone()) {
        Ok(client) => Arc::new(client),
        Err(err) => {
            error!(error = %err, "Failed to create HTTP client");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 780.0])
            .with_min_inner_size([320.0, 480.0])
            .with_title("Trip Chat"),
        ..Default::default()
    };

    eframe::run_native(
        "Trip Chat",
        options,
        Box::new(move |cc| Ok(Box::new(TripChatApp::new(cc, settings, source)))),
    )
}
