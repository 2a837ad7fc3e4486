//! Domain model for forum categories.

use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, SanitizedTitle};

/// Category record as seen by the listing views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub cid: CategoryId,
    pub name: SanitizedTitle,
    pub icon: String,
    pub bg_color: String,
}

impl Category {
    #[must_use]
    pub fn new(cid: CategoryId, name: SanitizedTitle, icon: String, bg_color: String) -> Self {
        Self {
            cid,
            name,
            icon,
            bg_color,
        }
    }
}
