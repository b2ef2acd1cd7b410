use serde::{
    Deserialize,
    Serialize,
};

use crate::api::DEFAULT_BASE_URL;

#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingsData {
    pub api_base_url: String,
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_BASE_URL.to_string(), dark_mode: true }
    }
}

impl SettingsData {
    /// Base URL with any trailing slash dropped, so endpoint paths can be
    /// appended without doubling separators.
    pub fn base_url(&self) -> String {
        self.api_base_url.trim_end_matches('/').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_strips_trailing_slash() {
        let mut settings = SettingsData::default();
        assert_eq!(settings.base_url(), "http://localhost:8080/api");

        settings.api_base_url = "http://backend:9000/api/".to_string();
        assert_eq!(settings.base_url(), "http://backend:9000/api");
    }
}
