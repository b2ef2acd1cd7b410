use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::{
    core::Catalog,
    gui::theme::Theme,
};

/// Read-only listing of the course catalog.
pub struct CatalogModal {
    open: bool,
}

impl CatalogModal {
    pub fn new() -> Self {
        Self { open: false }
    }

    pub fn open_modal(&mut self) {
        self.open = true;
    }

    /// Returns true when the user asks for a refresh.
    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme, catalog: &Catalog) -> bool {
        if !self.open {
            return false;
        }

        let mut refresh_requested = false;

        let modal = egui::Modal::new(egui::Id::new("catalog_modal")).show(ctx, |ui| {
            ui.set_width(420.0);

            ui.horizontal(|ui| {
                ui.heading("Courses");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⟳").clicked() {
                        refresh_requested = true;
                    }
                });
            });
            ui.add_space(8.0);

            if !catalog.is_loaded() {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new());
                    ui.label("Loading courses...");
                });
            } else if catalog.get().is_empty() {
                ui.label(
                    egui::RichText::new("No courses yet.").color(theme.comment(ui.ctx())),
                );
            } else {
                let text_height = egui::TextStyle::Body
                    .resolve(ui.style())
                    .size
                    .max(ui.spacing().interact_size.y);

                egui::ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
                    TableBuilder::new(ui)
                        .striped(true)
                        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                        .column(Column::auto().at_least(160.0))
                        .column(Column::auto().at_least(80.0))
                        .column(Column::remainder())
                        .header(25.0, |mut header| {
                            for title in ["Name", "Code", "Duration"] {
                                header.col(|ui| {
                                    ui.label(theme.heading(ui.ctx(), title));
                                });
                            }
                        })
                        .body(|body| {
                            let courses = catalog.get();
                            body.rows(text_height, courses.len(), |mut row| {
                                let course = &courses[row.index()];
                                row.col(|ui| {
                                    ui.strong(&course.course_name);
                                });
                                row.col(|ui| {
                                    ui.label(course.course_code.as_deref().unwrap_or("—"));
                                });
                                row.col(|ui| {
                                    match course.course_duration {
                                        Some(weeks) => ui.label(format!("{} weeks", weeks)),
                                        None => ui.label("—"),
                                    };
                                });
                            });
                        });
                });
            }

            ui.add_space(12.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Close").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        refresh_requested
    }
}

impl Default for CatalogModal {
    fn default() -> Self {
        Self::new()
    }
}
