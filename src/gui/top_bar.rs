use eframe::egui::{
    self,
    containers,
};

#[derive(Debug, Clone, Copy)]
pub enum TopBarAction {
    LoadRoster,
    AddCourse,
    ViewCourses,
    OpenBackendSettings,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        backend_connected: bool,
        backend_url: &str,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("Roster", |ui| {
                    if ui.button("Load Students").clicked() {
                        action = Some(TopBarAction::LoadRoster);
                    }
                });

                ui.menu_button("Courses", |ui| {
                    if ui.button("Add Course").clicked() {
                        action = Some(TopBarAction::AddCourse);
                    }
                    if ui.button("View Courses").clicked() {
                        action = Some(TopBarAction::ViewCourses);
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("Backend Settings").clicked() {
                        action = Some(TopBarAction::OpenBackendSettings);
                    }
                });

                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicator(ui, backend_connected, backend_url);
                });
            });
        });

        action
    }

    fn show_status_indicator(ui: &mut egui::Ui, connected: bool, backend_url: &str) {
        let color = if connected {
            egui::Color32::from_rgb(0, 200, 0)
        } else {
            egui::Color32::from_rgb(200, 80, 80)
        };

        let tooltip = if connected {
            format!("Connected to {}", backend_url)
        } else {
            format!("Backend unreachable: {}", backend_url)
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("backend").on_hover_text(&tooltip);
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(&tooltip);
        });
    }
}
