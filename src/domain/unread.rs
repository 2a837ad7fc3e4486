//! Unread listing queries and results.

use serde::{Deserialize, Serialize};

use crate::domain::topic::TopicSummary;
use crate::domain::types::{CategoryId, UserId};

/// Subset of unread topics requested by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnreadFilter {
    /// Every unread topic.
    #[default]
    All,
    /// Topics the user has never opened.
    New,
    /// Unread topics the user follows.
    Watched,
    /// Unread topics nobody replied to yet.
    Unreplied,
}

impl UnreadFilter {
    /// All filters in the order they are offered to the user.
    pub const ALL: [UnreadFilter; 4] = [
        UnreadFilter::All,
        UnreadFilter::New,
        UnreadFilter::Watched,
        UnreadFilter::Unreplied,
    ];

    /// Maps the raw `filter` query value. Unknown names behave like `All`.
    pub fn from_query(value: &str) -> Self {
        match value {
            "new" => UnreadFilter::New,
            "watched" => UnreadFilter::Watched,
            "unreplied" => UnreadFilter::Unreplied,
            _ => UnreadFilter::All,
        }
    }

    /// Value used for the `filter` query parameter.
    pub const fn as_query(self) -> &'static str {
        match self {
            UnreadFilter::All => "",
            UnreadFilter::New => "new",
            UnreadFilter::Watched => "watched",
            UnreadFilter::Unreplied => "unreplied",
        }
    }
}

/// Inclusive `[start, stop]` window of unread topics for a single user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadTopicsQuery {
    pub uid: UserId,
    pub cids: Vec<CategoryId>,
    pub filter: UnreadFilter,
    pub start: i64,
    pub stop: i64,
}

impl UnreadTopicsQuery {
    pub fn new(uid: UserId) -> Self {
        Self {
            uid,
            cids: Vec::new(),
            filter: UnreadFilter::All,
            start: 0,
            stop: -1,
        }
    }

    pub fn categories(mut self, cids: Vec<CategoryId>) -> Self {
        self.cids = cids;
        self
    }

    pub fn filter(mut self, filter: UnreadFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn range(mut self, start: i64, stop: i64) -> Self {
        self.start = start;
        self.stop = stop;
        self
    }

    /// Number of rows covered by the window.
    pub fn limit(&self) -> i64 {
        (self.stop - self.start + 1).max(0)
    }
}

/// Page of unread topics with the total number of matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnreadTopicsPage {
    pub topic_count: i64,
    pub topics: Vec<TopicSummary>,
}
