use dropship::app::DropshipApp;

fn main() {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([480.0, 560.0])
            .with_min_inner_size([360.0, 420.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "Dropship",
        options,
        Box::new(|cc| Box::new(DropshipApp::new(cc))),
    ) {
        eprintln!("Failed to start UI: {}", e);
    }
}
