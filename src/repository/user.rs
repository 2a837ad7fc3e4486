use actix_web::web;
use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::settings::UserSettings;
use crate::domain::types::UserId;
use crate::models::user::{User, UserSettingsRow};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, PrivilegeReader, UserSettingsReader};

#[async_trait]
impl UserSettingsReader for DieselRepository {
    async fn get_user_settings(&self, uid: UserId) -> RepositoryResult<UserSettings> {
        use crate::schema::user_settings;

        let pool = self.pool.clone();
        let defaults = self.defaults;

        web::block(move || -> RepositoryResult<UserSettings> {
            let mut conn = pool.get()?;
            let row = user_settings::table
                .find(uid.get())
                .select(UserSettingsRow::as_select())
                .first(&mut conn)
                .optional()?;

            Ok(match row {
                Some(row) => defaults.resolve(row.topics_per_page, row.use_pagination),
                None => defaults.resolve(None, None),
            })
        })
        .await?
    }
}

#[async_trait]
impl PrivilegeReader for DieselRepository {
    async fn is_privileged(&self, uid: UserId) -> RepositoryResult<bool> {
        use crate::schema::users;

        let pool = self.pool.clone();

        web::block(move || -> RepositoryResult<bool> {
            let mut conn = pool.get()?;
            let user = users::table
                .find(uid.get())
                .select(User::as_select())
                .first(&mut conn)
                .optional()?;

            Ok(user.is_some_and(|user| user.is_privileged()))
        })
        .await?
    }
}
