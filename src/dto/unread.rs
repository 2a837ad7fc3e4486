//! DTOs shaped for the unread listing template and its JSON alias.

use serde::Serialize;

use crate::domain::topic::TopicSummary;
use crate::domain::types::CategoryId;
use crate::pagination::Pagination;
use crate::query::QueryParams;

/// Incoming listing request as seen by the service.
#[derive(Debug, Clone)]
pub struct UnreadPageRequest {
    /// Request path including the mount prefix.
    pub path: String,
    pub query: QueryParams,
}

/// Site-wide settings the listing depends on.
#[derive(Debug, Clone, Default)]
pub struct UnreadPageOptions {
    pub relative_path: String,
    /// Absolute site URL used in link tags.
    pub site_url: String,
    pub home_page_title: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Breadcrumb {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Category echoed back to the category selector.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SelectedCategory {
    /// Absent for the "multiple categories" placeholder.
    pub cid: Option<CategoryId>,
    pub name: String,
    pub icon: String,
    pub bg_color: String,
}

/// Outcome of resolving the `cid` query parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySelection {
    pub selected_category: Option<SelectedCategory>,
    pub selected_cids: Vec<CategoryId>,
}

/// Entry of the unread filter dropdown.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FilterLink {
    pub name: String,
    pub url: String,
    pub selected: bool,
    pub filter: String,
    pub icon: String,
}

/// `<link>` tag for the document head, also sent as an HTTP `Link` header.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LinkTag {
    pub rel: String,
    pub href: String,
}

/// Data required to render the unread listing.
#[derive(Debug, Clone, Serialize)]
pub struct UnreadPageData {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breadcrumbs: Option<Vec<Breadcrumb>>,
    pub topics: Vec<TopicSummary>,
    pub topic_count: i64,
    pub page_count: i64,
    pub pagination: Pagination,
    pub link_tags: Vec<LinkTag>,
    pub show_select: bool,
    pub show_topic_tools: bool,
    pub all_categories_url: String,
    pub selected_category: Option<SelectedCategory>,
    pub selected_cids: Vec<CategoryId>,
    pub select_category_label: String,
    pub select_category_icon: String,
    pub show_category_select_label: bool,
    pub filters: Vec<FilterLink>,
    pub selected_filter: Option<FilterLink>,
}

/// What the listing route should answer with.
#[derive(Debug)]
pub enum UnreadPageOutcome {
    Render(Box<UnreadPageData>),
    /// Redirect target relative to the mount prefix, e.g. `/unread?page=2`.
    Redirect(String),
}
