use eframe::egui;

use super::data::SettingsData;

/// Edits the backend base URL. The value was a hardcoded constant in the old
/// front-end; here it is part of the persisted settings and every request
/// reads the current value.
pub struct BackendSettingsModal {
    open: bool,
    settings: SettingsData,
    original_settings: SettingsData,
    url_input: String,
}

impl BackendSettingsModal {
    pub fn new() -> Self {
        Self {
            open: false,
            settings: SettingsData::default(),
            original_settings: SettingsData::default(),
            url_input: String::new(),
        }
    }

    pub fn open_settings(&mut self, current_settings: SettingsData) {
        self.url_input = current_settings.api_base_url.clone();
        self.settings = current_settings.clone();
        self.original_settings = current_settings;
        self.open = true;
    }

    fn is_dirty(&self) -> bool {
        self.url_input != self.original_settings.api_base_url
    }

    fn is_valid_url(url: &str) -> bool {
        url.starts_with("http://") || url.starts_with("https://")
    }

    /// Returns updated settings when the user saves.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut result: Option<SettingsData> = None;

        let modal = egui::Modal::new(egui::Id::new("backend_settings_modal")).show(ctx, |ui| {
            ui.heading("Backend Settings");
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("API base URL:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.url_input)
                        .desired_width(260.0)
                        .hint_text("http://localhost:8080/api"),
                );
            });

            if !Self::is_valid_url(self.url_input.trim()) {
                ui.colored_label(
                    egui::Color32::RED,
                    "⚠ URL must start with http:// or https://",
                );
            }

            ui.add_space(10.0);
            ui.separator();

            let is_dirty = self.is_dirty();

            ui.horizontal(|ui| {
                let save_clicked = ui
                    .add_enabled(
                        is_dirty && Self::is_valid_url(self.url_input.trim()),
                        egui::Button::new("Save"),
                    )
                    .clicked();
                let cancel_clicked = ui.add_enabled(is_dirty, egui::Button::new("Cancel")).clicked();

                let mut reset_clicked = false;
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    reset_clicked = ui.button("Restore Default").clicked();
                });

                if save_clicked {
                    let mut settings = self.settings.clone();
                    settings.api_base_url = self.url_input.trim().to_string();
                    self.original_settings = settings.clone();
                    result = Some(settings);
                    ui.close();
                } else if cancel_clicked {
                    self.url_input = self.original_settings.api_base_url.clone();
                } else if reset_clicked {
                    self.url_input = SettingsData::default().api_base_url;
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }
}

impl Default for BackendSettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
