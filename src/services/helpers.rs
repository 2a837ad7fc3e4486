//! View helpers shared by listing pages: query strings, filter links,
//! breadcrumbs, link tags and category selection.

use crate::domain::category::Category;
use crate::domain::types::CategoryId;
use crate::domain::unread::UnreadFilter;
use crate::dto::unread::{Breadcrumb, CategorySelection, FilterLink, LinkTag, SelectedCategory};
use crate::pagination::RelLink;
use crate::query::QueryParams;

pub const MULTIPLE_CATEGORIES_LABEL: &str = "[[unread:multiple-categories-selected]]";

/// Copies `query` with `key` set to `value`, or removed when `value` is empty.
///
/// Returns `?`-prefixed parameters, or an empty string when nothing is left.
pub fn build_query_string(query: &QueryParams, key: &str, value: &str) -> String {
    let mut query = query.clone();
    if value.is_empty() {
        query.remove(key);
    } else {
        query.set(key, value);
    }
    query.remove("_");

    if query.is_empty() {
        String::new()
    } else {
        format!("?{}", query.encode())
    }
}

fn filter_label(filter: UnreadFilter) -> (&'static str, &'static str) {
    match filter {
        UnreadFilter::All => ("[[unread:all-topics]]", "fa-book"),
        UnreadFilter::New => ("[[unread:new-topics]]", "fa-clock-o"),
        UnreadFilter::Watched => ("[[unread:watched-topics]]", "fa-bell-o"),
        UnreadFilter::Unreplied => ("[[unread:unreplied-topics]]", "fa-reply"),
    }
}

/// Links for every unread filter, marking the one matching `current`.
pub fn build_filters(base_url: &str, current: &str, query: &QueryParams) -> Vec<FilterLink> {
    UnreadFilter::ALL
        .iter()
        .map(|filter| {
            let (name, icon) = filter_label(*filter);
            FilterLink {
                name: name.to_string(),
                url: format!(
                    "{base_url}{}",
                    build_query_string(query, "filter", filter.as_query())
                ),
                selected: current == filter.as_query(),
                filter: filter.as_query().to_string(),
                icon: icon.to_string(),
            }
        })
        .collect()
}

/// Single-entry trail used by the unread listing.
pub fn build_breadcrumbs(text: &str) -> Vec<Breadcrumb> {
    vec![Breadcrumb {
        text: text.to_string(),
        url: None,
    }]
}

/// Canonical link plus one tag per pagination relation.
pub fn build_link_tags(site_url: &str, route: &str, rel: &[RelLink]) -> Vec<LinkTag> {
    let site_url = site_url.trim_end_matches('/');
    let mut tags = vec![LinkTag {
        rel: "canonical".to_string(),
        href: format!("{site_url}/{route}"),
    }];
    tags.extend(rel.iter().map(|link| LinkTag {
        rel: link.rel.clone(),
        href: format!("{site_url}/{route}{}", link.href),
    }));
    tags
}

/// Whether the listing is served from a route other than its own, i.e. as
/// the forum home page.
pub fn is_displayed_as_home(path: &str, relative_path: &str) -> bool {
    let api_prefix = format!("{relative_path}/api/unread");
    let ui_prefix = format!("{relative_path}/unread");
    !(path.starts_with(&api_prefix) || path.starts_with(&ui_prefix))
}

/// Parses raw `cid` values, dropping non-numeric ones and duplicates.
pub fn parse_cids(values: &[&str]) -> Vec<CategoryId> {
    let mut cids: Vec<CategoryId> = Vec::with_capacity(values.len());
    for value in values {
        let Ok(cid) = value.trim().parse::<i32>() else {
            continue;
        };
        let Ok(cid) = CategoryId::new(cid) else {
            continue;
        };
        if !cids.contains(&cid) {
            cids.push(cid);
        }
    }
    cids
}

/// Echo of the categories found for the requested ids.
pub fn select_categories(found: Vec<Category>) -> CategorySelection {
    let selected_cids = found.iter().map(|category| category.cid).collect();
    let selected_category = match found.len() {
        0 => None,
        1 => found.into_iter().next().map(|category| SelectedCategory {
            cid: Some(category.cid),
            name: category.name.into_inner(),
            icon: category.icon,
            bg_color: category.bg_color,
        }),
        _ => Some(SelectedCategory {
            cid: None,
            name: MULTIPLE_CATEGORIES_LABEL.to_string(),
            icon: "fa-plus".to_string(),
            bg_color: "#ddd".to_string(),
        }),
    };

    CategorySelection {
        selected_category,
        selected_cids,
    }
}
