pub mod app;
pub mod catalog_modal;
pub mod course_modal;
pub mod error_modal;
pub mod message_overlay;
pub mod roster_table;
pub mod settings;
pub mod theme;
pub mod top_bar;

pub use app::RosterApp;
