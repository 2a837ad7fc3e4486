//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::category::Category;
use crate::domain::settings::UserSettings;
use crate::domain::types::{CategoryId, UserId};
use crate::domain::unread::{UnreadFilter, UnreadTopicsPage, UnreadTopicsQuery};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, PrivilegeReader, UnreadTopicReader, UserSettingsReader};

mock! {
    pub Repository {}

    #[async_trait]
    impl UserSettingsReader for Repository {
        async fn get_user_settings(&self, uid: UserId) -> RepositoryResult<UserSettings>;
    }

    #[async_trait]
    impl PrivilegeReader for Repository {
        async fn is_privileged(&self, uid: UserId) -> RepositoryResult<bool>;
    }

    #[async_trait]
    impl CategoryReader for Repository {
        async fn get_categories_by_ids(
            &self,
            cids: &[CategoryId],
        ) -> RepositoryResult<Vec<Category>>;
    }

    #[async_trait]
    impl UnreadTopicReader for Repository {
        async fn list_unread_topics(
            &self,
            query: UnreadTopicsQuery,
        ) -> RepositoryResult<UnreadTopicsPage>;
        async fn count_unread_topics(
            &self,
            uid: UserId,
            filter: UnreadFilter,
        ) -> RepositoryResult<i64>;
    }
}
