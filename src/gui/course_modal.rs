use eframe::egui;

use crate::{
    core::NewCourse,
    gui::theme::Theme,
};

pub const COURSE_ADDED: &str = "✅ Course added successfully!";
pub const COURSE_FAILED: &str = "❌ Error adding course.";

/// The add-course form: name, code, duration, submit, and an inline result
/// line. Fields are deliberately not cleared after a successful submit, and
/// the button stays enabled while a request is in flight.
pub struct CourseModal {
    open: bool,
    name: String,
    code: String,
    duration: String,
    message: Option<(String, bool)>,
}

impl CourseModal {
    pub fn new() -> Self {
        Self {
            open: false,
            name: String::new(),
            code: String::new(),
            duration: String::new(),
            message: None,
        }
    }

    pub fn open_modal(&mut self) {
        self.message = None;
        self.open = true;
    }

    pub fn set_success(&mut self) {
        self.message = Some((COURSE_ADDED.to_string(), true));
    }

    pub fn set_failure(&mut self) {
        self.message = Some((COURSE_FAILED.to_string(), false));
    }

    /// Returns the payload to post when the user submits.
    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) -> Option<NewCourse> {
        if !self.open {
            return None;
        }

        let mut submitted: Option<NewCourse> = None;

        let modal = egui::Modal::new(egui::Id::new("course_modal")).show(ctx, |ui| {
            ui.set_width(320.0);
            ui.heading("Add Course");
            ui.add_space(10.0);

            egui::Grid::new("course_form").num_columns(2).spacing([8.0, 6.0]).show(ui, |ui| {
                ui.label("Name:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.name)
                        .desired_width(200.0)
                        .hint_text("Algorithms"),
                );
                ui.end_row();

                ui.label("Code:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.code)
                        .desired_width(200.0)
                        .hint_text("CS201"),
                );
                ui.end_row();

                ui.label("Duration:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.duration)
                        .desired_width(200.0)
                        .hint_text("weeks"),
                );
                ui.end_row();
            });

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui.button("Add Course").clicked() {
                    self.message = None;
                    submitted =
                        Some(NewCourse::from_inputs(&self.name, &self.code, &self.duration));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Close").clicked() {
                        ui.close();
                    }
                });
            });

            if let Some((text, success)) = &self.message {
                ui.add_space(6.0);
                let color = if *success {
                    theme.green(ui.ctx())
                } else {
                    theme.red(ui.ctx())
                };
                ui.colored_label(color, text);
            }
        });

        if modal.should_close() {
            self.open = false;
        }

        submitted
    }
}

impl Default for CourseModal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_messages_use_the_literal_strings() {
        let mut modal = CourseModal::new();
        assert!(modal.message.is_none());

        modal.set_success();
        assert_eq!(
            modal.message,
            Some(("✅ Course added successfully!".to_string(), true))
        );

        modal.set_failure();
        assert_eq!(modal.message, Some(("❌ Error adding course.".to_string(), false)));
    }

    #[test]
    fn fields_survive_a_successful_submit() {
        let mut modal = CourseModal::new();
        modal.name = "Algorithms".to_string();
        modal.code = "CS201".to_string();
        modal.duration = "12".to_string();

        modal.set_success();
        assert_eq!(modal.name, "Algorithms");
        assert_eq!(modal.code, "CS201");
        assert_eq!(modal.duration, "12");
    }
}
