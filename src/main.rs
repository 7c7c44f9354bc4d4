// Minical Application
// Main entry point

mod models;
mod services;
mod ui;
mod utils;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Minical");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Minical",
        options,
        Box::new(|cc| Ok(Box::new(ui::CalendarApp::new(cc)))),
    )
}
