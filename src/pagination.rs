//! Pagination descriptors for listing pages.

use serde::Serialize;

use crate::query::QueryParams;

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Link to a single page of the listing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageLink {
    pub page: i64,
    pub active: bool,
    /// Query string (without `?`) selecting this page.
    pub qs: String,
}

/// `rel="prev"`/`rel="next"` relation with a `?`-prefixed href.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RelLink {
    pub rel: String,
    pub href: String,
}

/// Everything templates need to draw pagination controls.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Pagination {
    pub prev: PageLink,
    pub next: PageLink,
    pub first: PageLink,
    pub last: PageLink,
    pub rel: Vec<RelLink>,
    /// Page window; `None` marks a gap between non-adjacent pages.
    pub pages: Vec<Option<PageLink>>,
    pub current_page: i64,
    pub page_count: i64,
}

impl Pagination {
    /// Builds the descriptor for `current_page` out of `page_count`, carrying
    /// the other parameters of `query` into every generated link.
    pub fn create(current_page: i64, page_count: i64, query: &QueryParams) -> Self {
        let mut query = query.clone();
        query.remove("_");
        let link = |page: i64, active: bool| PageLink {
            page,
            active,
            qs: query.with("page", page.to_string()).encode(),
        };

        if page_count <= 1 {
            return Self {
                prev: link(1, current_page > 1),
                next: link(1, current_page < page_count),
                first: link(1, current_page == 1),
                last: link(1, current_page == page_count),
                rel: Vec::new(),
                pages: Vec::new(),
                current_page: 1,
                page_count: 1,
            };
        }

        let previous = current_page.saturating_sub(1).clamp(1, page_count);
        let next = current_page.saturating_add(1).clamp(1, page_count);

        let window_page = current_page.clamp(1, page_count) as usize;
        let pages = get_pages(page_count as usize, window_page, 2, 2, 2, 2)
            .into_iter()
            .map(|page| page.map(|page| link(page as i64, page as i64 == current_page)))
            .collect();

        let mut rel = Vec::new();
        if current_page < page_count {
            rel.push(RelLink {
                rel: "next".to_string(),
                href: format!("?{}", query.with("page", next.to_string()).encode()),
            });
        }
        if current_page > 1 {
            rel.push(RelLink {
                rel: "prev".to_string(),
                href: format!("?{}", query.with("page", previous.to_string()).encode()),
            });
        }

        Self {
            prev: link(previous, current_page > 1),
            next: link(next, current_page < page_count),
            first: link(1, current_page == 1),
            last: link(page_count, current_page == page_count),
            rel,
            pages,
            current_page,
            page_count,
        }
    }
}
