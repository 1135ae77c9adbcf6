//! Gomoku AI Engine GUI
//!
//! A graphical interface for playing Gomoku against the engine, watching
//! it play itself, or playing another person.

use gomoku::ui::GomokuApp;
use gomoku::AppConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load_from_env()?;
    tracing::info!(
        board_size = config.search.board_size,
        depth = config.search.max_depth,
        pruning = config.search.pruning,
        "starting gui"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)))),
    )?;
    Ok(())
}
