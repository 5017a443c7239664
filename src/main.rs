use clavier::ui::ComposerApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 420.0])
            .with_title("Clavier"),
        ..Default::default()
    };

    eframe::run_native(
        "Clavier",
        native_options,
        Box::new(|_cc| Ok(Box::new(ComposerApp::default()))),
    )
}
