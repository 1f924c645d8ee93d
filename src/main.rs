#![warn(clippy::all, rust_2018_idioms)]

use modern_paint::{AppConfig, PaintApp};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(config.title.clone()),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        &config.title,
        options,
        Box::new(|cc| Ok(Box::new(PaintApp::new(cc)))),
    ) {
        log::error!("Failed to start application: {}", e);
    }
}
