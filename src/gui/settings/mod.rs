pub mod backend_modal;
pub mod data;

pub use backend_modal::BackendSettingsModal;
pub use data::SettingsData;
