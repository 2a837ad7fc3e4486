use async_trait::async_trait;
use pushkind_common::db::DbPool;

use crate::domain::category::Category;
use crate::domain::settings::{SettingsDefaults, UserSettings};
use crate::domain::types::{CategoryId, UserId};
use crate::domain::unread::{UnreadFilter, UnreadTopicsPage, UnreadTopicsQuery};
use crate::repository::errors::RepositoryResult;

pub mod category;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod topic;
pub mod user;

/// Diesel-backed implementation of every forum collaborator.
///
/// The adapter only reads. Blocking SQLite work is moved off the async
/// workers with [`actix_web::web::block`].
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
    defaults: SettingsDefaults,
}

impl DieselRepository {
    pub fn new(pool: DbPool, defaults: SettingsDefaults) -> Self {
        Self { pool, defaults }
    }
}

#[async_trait]
pub trait UserSettingsReader: Send + Sync {
    /// Effective display settings, falling back to defaults for unknown users.
    async fn get_user_settings(&self, uid: UserId) -> RepositoryResult<UserSettings>;
}

#[async_trait]
pub trait PrivilegeReader: Send + Sync {
    /// Whether the user holds elevated moderation capability.
    async fn is_privileged(&self, uid: UserId) -> RepositoryResult<bool>;
}

#[async_trait]
pub trait CategoryReader: Send + Sync {
    /// Existing categories among `cids`, in the order they were requested.
    async fn get_categories_by_ids(&self, cids: &[CategoryId]) -> RepositoryResult<Vec<Category>>;
}

#[async_trait]
pub trait UnreadTopicReader: Send + Sync {
    async fn list_unread_topics(
        &self,
        query: UnreadTopicsQuery,
    ) -> RepositoryResult<UnreadTopicsPage>;
    async fn count_unread_topics(&self, uid: UserId, filter: UnreadFilter)
    -> RepositoryResult<i64>;
}
