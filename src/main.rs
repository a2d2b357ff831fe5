use clap::Parser;
use eframe::egui;
use quality_dashboard::app::QualityDashboardApp;
use quality_dashboard::config::{self, DashboardConfig};
use quality_dashboard::fonts;

fn main() -> eframe::Result {
    let config = DashboardConfig::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config::WINDOW_SIZE)
            .with_min_inner_size(config::MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        config.locale.strings().window_title,
        options,
        Box::new(move |cc| {
            fonts::install_fallback_font(&cc.egui_ctx, config.font.as_deref());
            Ok(Box::new(QualityDashboardApp::new(&config)))
        }),
    )
}
