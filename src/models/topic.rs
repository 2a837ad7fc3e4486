//! Diesel models for topic records.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::topic::TopicSummary;
use crate::domain::types::{CategoryId, SanitizedTitle, TopicId, TypeConstraintError};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::topics)]
/// Columns of [`crate::schema::topics`] needed by listing pages.
pub struct TopicRow {
    pub tid: i32,
    pub cid: i32,
    pub title: String,
    pub slug: String,
    pub post_count: i64,
    pub last_post_at: NaiveDateTime,
}

impl TryFrom<TopicRow> for TopicSummary {
    type Error = TypeConstraintError;

    fn try_from(row: TopicRow) -> Result<Self, Self::Error> {
        Ok(Self {
            tid: TopicId::try_from(row.tid)?,
            cid: CategoryId::try_from(row.cid)?,
            title: SanitizedTitle::new(row.title)?,
            slug: row.slug,
            post_count: row.post_count,
            last_post_at: row.last_post_at,
        })
    }
}
