#![warn(clippy::all, rust_2018_idioms)]

use sketchpad::PaintApp;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sketchpad")
            .with_inner_size([760.0, 540.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "sketchpad",
        options,
        Box::new(|cc| Ok(Box::new(PaintApp::new(cc)))),
    )
}
