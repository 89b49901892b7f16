//! BioPage - personal link-in-bio page
//!
//! Main entry point for the application.

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting BioPage v{}", env!("CARGO_PKG_VERSION"));

    // AccessKit is enabled by default in eframe, so disclosure and toggle
    // state reach platform screen readers
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 900.0])
            .with_min_inner_size([380.0, 520.0])
            .with_title("BioPage"),
        ..Default::default()
    };

    eframe::run_native(
        "BioPage",
        options,
        Box::new(|cc| Ok(Box::new(app::BioPageApp::new(cc)))),
    )
}
