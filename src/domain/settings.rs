//! Per-user display preferences.

use serde::{Deserialize, Serialize};

use crate::domain::types::PageSize;

/// Display settings that drive the unread listing pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Number of topics per page.
    pub topics_per_page: PageSize,
    /// Whether the user navigates with page numbers instead of infinite scroll.
    pub use_pagination: bool,
}

/// Fallback values applied when a user never saved their preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsDefaults {
    pub topics_per_page: i64,
    pub max_topics_per_page: i64,
    pub use_pagination: bool,
}

impl Default for SettingsDefaults {
    fn default() -> Self {
        Self {
            topics_per_page: 20,
            max_topics_per_page: 100,
            use_pagination: false,
        }
    }
}

impl SettingsDefaults {
    /// Resolves stored (possibly missing) values into effective settings.
    pub fn resolve(&self, topics_per_page: Option<i64>, use_pagination: Option<bool>) -> UserSettings {
        UserSettings {
            topics_per_page: PageSize::clamped(
                topics_per_page.unwrap_or(self.topics_per_page),
                self.max_topics_per_page,
            ),
            use_pagination: use_pagination.unwrap_or(self.use_pagination),
        }
    }
}
