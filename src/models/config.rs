//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::domain::settings::SettingsDefaults;

fn default_topics_per_page() -> i64 {
    20
}

fn default_max_topics_per_page() -> i64 {
    100
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    pub secret: String,
    pub auth_service_url: String,
    /// Absolute site URL used for canonical and pagination link tags.
    pub url: String,
    /// Path prefix the forum is mounted under, e.g. `/forum`. Empty at the root.
    #[serde(default)]
    pub relative_path: String,
    /// Title shown when the unread listing is served as the home page.
    #[serde(default)]
    pub home_page_title: Option<String>,
    /// Route served at `/`. Set to `unread` to make the unread listing the home page.
    #[serde(default)]
    pub home_route: Option<String>,
    #[serde(default = "default_topics_per_page")]
    pub default_topics_per_page: i64,
    #[serde(default = "default_max_topics_per_page")]
    pub max_topics_per_page: i64,
    #[serde(default)]
    pub default_use_pagination: bool,
}

impl ServerConfig {
    /// Settings applied to users without stored preferences.
    pub fn settings_defaults(&self) -> SettingsDefaults {
        SettingsDefaults {
            topics_per_page: self.default_topics_per_page,
            max_topics_per_page: self.max_topics_per_page,
            use_pagination: self.default_use_pagination,
        }
    }
}
