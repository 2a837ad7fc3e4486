//! Domain model for topics shown in unread listings.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, SanitizedTitle, TopicId};

/// Summary of a topic as rendered by listing pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSummary {
    pub tid: TopicId,
    pub cid: CategoryId,
    pub title: SanitizedTitle,
    pub slug: String,
    pub post_count: i64,
    pub last_post_at: NaiveDateTime,
}
