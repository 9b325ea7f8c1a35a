#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

use app::TankthermApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 600.0])
            .with_title("Tanktherm"),
        ..Default::default()
    };

    eframe::run_native(
        "Tanktherm",
        options,
        Box::new(|cc| Ok(Box::new(TankthermApp::new(cc)))),
    )
}
