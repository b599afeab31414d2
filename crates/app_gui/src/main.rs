mod app;
mod config;
mod i18n;

use app::UiApp;
use config::AppSettings;
use eframe::{NativeOptions, egui};

fn main() {
    tracing_subscriber::fmt::init();
    let settings = AppSettings::load();
    tracing::info!(
        language = ?settings.language,
        seeded = settings.seed.is_some(),
        "starting Waste Sorter {}",
        env!("WASTE_SORTER_VERSION")
    );
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([520.0, 360.0]),
        ..Default::default()
    };
    if let Err(e) = eframe::run_native(
        "Waste Sorter",
        options,
        Box::new(|_cc| Ok(Box::new(UiApp::new(settings)))),
    ) {
        eprintln!("Applicatie gestopt met fout: {e}");
    }
}
