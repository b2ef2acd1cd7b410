use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use super::app::RosterApp;

/// Central panel: the student roster as a five-column striped table, rows in
/// the order the server returned them.
pub fn roster_table(ctx: &egui::Context, app: &mut RosterApp) {
    let mut load_requested = false;

    egui::CentralPanel::default().show(ctx, |ui| {
        if !app.roster.is_loaded() {
            if !app.message_overlay.active {
                load_requested = empty_state(ui, app);
            }
            return;
        }

        ui.horizontal(|ui| {
            ui.heading(app.theme.heading(ui.ctx(), "Student Roster"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⟳ Reload").clicked() {
                    load_requested = true;
                }
                ui.label(
                    egui::RichText::new(format!("{} students", app.roster.get().len()))
                        .color(app.theme.comment(ui.ctx())),
                );
            });
        });
        ui.add_space(6.0);

        let text_height =
            egui::TextStyle::Body.resolve(ui.style()).size.max(ui.spacing().interact_size.y);

        egui::ScrollArea::vertical().show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::auto().at_least(40.0))
                .column(Column::auto().at_least(140.0))
                .column(Column::auto().at_least(180.0))
                .column(Column::auto().at_least(110.0))
                .column(Column::remainder())
                .header(25.0, |mut header| {
                    for title in ["ID", "Name", "Email", "Phone", "Course"] {
                        header.col(|ui| {
                            ui.label(app.theme.heading(ui.ctx(), title));
                        });
                    }
                })
                .body(|body| {
                    let students = app.roster.get();
                    body.rows(text_height, students.len(), |mut row| {
                        let student = &students[row.index()];
                        row.col(|ui| {
                            ui.label(student.student_id.to_string());
                        });
                        row.col(|ui| {
                            ui.strong(&student.student_name);
                        });
                        row.col(|ui| {
                            ui.label(&student.email);
                        });
                        row.col(|ui| {
                            ui.label(&student.phone);
                        });
                        row.col(|ui| {
                            if student.course.is_some() {
                                ui.label(student.course_label());
                            } else {
                                ui.label(
                                    egui::RichText::new(student.course_label())
                                        .color(ui.visuals().weak_text_color()),
                                );
                            }
                        });
                    });
                });
        });
    });

    if load_requested {
        app.load_roster();
    }
}

fn empty_state(ui: &mut egui::Ui, app: &RosterApp) -> bool {
    let mut clicked = false;

    ui.vertical_centered(|ui| {
        ui.add_space(100.0);

        ui.label(
            egui::RichText::new("No Roster Loaded").size(32.0).color(app.theme.cyan(ui.ctx())),
        );

        ui.add_space(4.0);

        ui.label(
            egui::RichText::new("Fetch the student roster from the backend to get started.")
                .size(12.0)
                .color(app.theme.comment(ui.ctx())),
        );

        ui.add_space(16.0);

        let label = egui::Label::new(
            egui::RichText::new("Load Students")
                .size(14.0)
                .color(ui.ctx().style().visuals.weak_text_color()),
        )
        .sense(egui::Sense::click());

        let mut response = ui.add(label);
        if response.hovered() {
            response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
        }
        if response.clicked() {
            clicked = true;
        }
    });

    clicked
}
