use eframe::egui;
use rosterdesk::gui::RosterApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 620.0])
            .with_min_inner_size([640.0, 400.0])
            .with_title("Rosterdesk"),
        ..Default::default()
    };

    eframe::run_native("Rosterdesk", options, Box::new(|cc| Ok(Box::new(RosterApp::new(cc)))))
}
