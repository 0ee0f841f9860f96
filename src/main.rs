use eframe::egui;
use std::path::Path;

mod app;

use app::LifewheelApp;
use lifewheel::model::loader;

/// Dataset document, relative to the working directory. Synthesized on first
/// run.
const DATA_PATH: &str = "data/lifecycle_data.json";

fn main() {
    env_logger::init();

    let outcome = loader::load_or_default(Path::new(DATA_PATH));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Lifewheel — Research Data Lifecycle",
        options,
        Box::new(move |_cc| Ok(Box::new(LifewheelApp::new(outcome)))),
    )
    .expect("Failed to start Lifewheel");
}
