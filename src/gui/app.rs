use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use super::{
    catalog_modal::CatalogModal,
    course_modal::CourseModal,
    error_modal::ErrorModal,
    message_overlay::MessageOverlay,
    roster_table::roster_table,
    settings::{
        BackendSettingsModal,
        SettingsData,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        Catalog,
        Roster,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

const SETTINGS_FILE: &str = "settings.json";
const BACKEND_CHECK_INTERVAL: Duration = Duration::from_secs(5);

pub struct Modals {
    pub error: ErrorModal,
    pub course: CourseModal,
    pub catalog: CatalogModal,
    pub backend_settings: BackendSettingsModal,
}

impl Default for Modals {
    fn default() -> Self {
        Self {
            error: ErrorModal::new(),
            course: CourseModal::new(),
            catalog: CatalogModal::new(),
            backend_settings: BackendSettingsModal::new(),
        }
    }
}

pub struct RosterApp {
    pub settings_data: SettingsData,

    // Fetched state
    pub roster: Roster,
    pub catalog: Catalog,

    // UI state
    pub theme: Theme,
    pub message_overlay: MessageOverlay,
    pub modals: Modals,

    // Backend reachability
    pub backend_connected: bool,
    last_backend_check: Option<Instant>,

    task_manager: TaskManager,
}

impl RosterApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_data = load_json_or_default::<SettingsData>(SETTINGS_FILE);
        let theme = Theme::default();

        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_theme(if settings_data.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        Self {
            settings_data,
            roster: Roster::default(),
            catalog: Catalog::default(),
            theme,
            message_overlay: MessageOverlay::new(),
            modals: Modals::default(),
            backend_connected: false,
            last_backend_check: None,
            task_manager: TaskManager::new(),
        }
    }

    pub fn load_roster(&mut self) {
        let generation = self.task_manager.load_roster(self.settings_data.base_url());
        self.roster.track(generation);
        self.message_overlay.set_message("Loading students...".to_string());
    }

    fn load_catalog(&mut self) {
        let generation = self.task_manager.load_catalog(self.settings_data.base_url());
        self.catalog.track(generation);
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::Roster { generation, result } => {
                // A response from a superseded load: a newer request is
                // still in flight, leave the overlay and table alone.
                if !self.roster.is_current(generation) {
                    return;
                }

                self.message_overlay.clear_message();
                match result {
                    Ok(students) => {
                        self.roster.accept(generation, students);
                    }
                    Err(details) => {
                        self.modals.error.show_error(
                            "Roster Error",
                            "Error fetching students",
                            Some(details),
                        );
                    }
                }
            }

            TaskResult::Catalog { generation, result } => {
                if !self.catalog.is_current(generation) {
                    return;
                }

                match result {
                    Ok(courses) => {
                        self.catalog.accept(generation, courses);
                    }
                    Err(details) => {
                        self.modals.error.show_error(
                            "Catalog Error",
                            "Error fetching courses",
                            Some(details),
                        );
                    }
                }
            }

            TaskResult::CourseCreated(result) => match result {
                Ok(()) => {
                    self.modals.course.set_success();
                    // Keep the catalog in step with the record we just added.
                    self.load_catalog();
                }
                Err(details) => {
                    eprintln!("Course creation failed: {}", details);
                    self.modals.course.set_failure();
                }
            },

            TaskResult::BackendStatus(connected) => {
                self.backend_connected = connected;
            }
        }
    }

    fn update_backend_status(&mut self) {
        let now = Instant::now();
        let should_check = match self.last_backend_check {
            None => true,
            Some(last_check) => now.duration_since(last_check) >= BACKEND_CHECK_INTERVAL,
        };

        if should_check {
            self.task_manager.check_backend(self.settings_data.base_url());
            self.last_backend_check = Some(now);
        }
    }

    fn sync_dark_mode(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.style().visuals.dark_mode;
        if dark_mode != self.settings_data.dark_mode {
            self.settings_data.dark_mode = dark_mode;
            self.save_settings();
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}

impl eframe::App for RosterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        self.update_backend_status();
        self.sync_dark_mode(ctx);

        if let Some(action) = TopBar::show(
            ctx,
            self.backend_connected,
            &self.settings_data.api_base_url,
        ) {
            match action {
                TopBarAction::LoadRoster => self.load_roster(),
                TopBarAction::AddCourse => self.modals.course.open_modal(),
                TopBarAction::ViewCourses => {
                    self.modals.catalog.open_modal();
                    self.load_catalog();
                }
                TopBarAction::OpenBackendSettings => {
                    self.modals.backend_settings.open_settings(self.settings_data.clone());
                }
            }
        }

        roster_table(ctx, self);

        self.message_overlay.show(ctx, &self.theme);
        self.modals.error.show(ctx, &self.theme);

        if let Some(course) = self.modals.course.show(ctx, &self.theme) {
            self.task_manager.create_course(self.settings_data.base_url(), course);
        }

        if self.modals.catalog.show(ctx, &self.theme, &self.catalog) {
            self.load_catalog();
        }

        if let Some(settings) = self.modals.backend_settings.show(ctx) {
            self.settings_data = settings;
            self.save_settings();
            // Re-probe the new address right away.
            self.last_backend_check = None;
        }

        // Task results arrive without user input; keep the frame loop
        // ticking so they are picked up promptly.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
