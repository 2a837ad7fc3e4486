use actix_web::web;
use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::category::Category;
use crate::domain::types::CategoryId;
use crate::models::category::Category as DbCategory;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, DieselRepository};

#[async_trait]
impl CategoryReader for DieselRepository {
    async fn get_categories_by_ids(&self, cids: &[CategoryId]) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        if cids.is_empty() {
            return Ok(Vec::new());
        }

        let pool = self.pool.clone();
        let requested: Vec<i32> = cids.iter().map(|cid| cid.get()).collect();

        web::block(move || -> RepositoryResult<Vec<Category>> {
            let mut conn = pool.get()?;
            let rows = categories::table
                .filter(categories::cid.eq_any(requested.clone()))
                .select(DbCategory::as_select())
                .load(&mut conn)?;

            let mut found = Vec::with_capacity(requested.len());
            for cid in &requested {
                if let Some(row) = rows.iter().find(|row| row.cid == *cid) {
                    found.push(Category::try_from(row.clone())?);
                }
            }
            Ok(found)
        })
        .await?
    }
}
