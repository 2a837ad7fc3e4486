//! Diesel models for accounts and their display settings.

use diesel::prelude::*;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::users)]
#[diesel(primary_key(uid))]
pub struct User {
    pub uid: i32,
    pub username: String,
    pub is_admin: bool,
    pub is_global_moderator: bool,
}

impl User {
    /// Whether the account holds elevated moderation capability.
    pub fn is_privileged(&self) -> bool {
        self.is_admin || self.is_global_moderator
    }
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::user_settings)]
#[diesel(primary_key(uid))]
/// Stored preferences; `None` columns fall back to configured defaults.
pub struct UserSettingsRow {
    pub uid: i32,
    pub topics_per_page: Option<i64>,
    pub use_pagination: Option<bool>,
}
