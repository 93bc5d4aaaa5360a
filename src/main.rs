mod app;
mod chart;
mod color;
mod data;
mod state;
mod ui;

use app::NgramExplorerApp;
use data::sample::SampleStore;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let store = match SampleStore::builtin() {
        Ok(store) => store,
        Err(e) => {
            log::error!("Failed to load sample data: {e:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([500.0, 350.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Ngram Mock Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(NgramExplorerApp::new(store)))),
    )
}
