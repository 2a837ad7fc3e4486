//! Unread topics listing and unread badge count.

use futures::TryFutureExt;
use pushkind_common::domain::auth::AuthenticatedUser;

use crate::domain::types::UserId;
use crate::domain::unread::{UnreadFilter, UnreadTopicsQuery};
use crate::dto::unread::{
    CategorySelection, UnreadPageData, UnreadPageOptions, UnreadPageOutcome, UnreadPageRequest,
};
use crate::pagination::Pagination;
use crate::query::parse_page;
use crate::repository::{CategoryReader, PrivilegeReader, UnreadTopicReader, UserSettingsReader};
use crate::services::helpers::{
    build_breadcrumbs, build_filters, build_link_tags, build_query_string, is_displayed_as_home,
    parse_cids, select_categories,
};
use crate::services::{ServiceError, ServiceResult, authenticated_user_id};

pub const HOME_TITLE: &str = "[[pages:home]]";
pub const UNREAD_TITLE: &str = "[[pages:unread]]";
pub const UNREAD_BREADCRUMB: &str = "[[unread:title]]";
pub const MARK_AS_READ_LABEL: &str = "[[unread:mark_as_read]]";
pub const MARK_AS_READ_ICON: &str = "fa-inbox";

/// Route the listing lives under, used for links and redirects.
const UNREAD_ROUTE: &str = "unread";

/// Resolves the categories named by the raw `cid` values.
pub async fn get_selected_category<R>(repo: &R, cids: &[&str]) -> ServiceResult<CategorySelection>
where
    R: CategoryReader + ?Sized,
{
    let cids = parse_cids(cids);
    if cids.is_empty() {
        return Ok(CategorySelection::default());
    }

    let found = repo.get_categories_by_ids(&cids).await?;

    Ok(select_categories(found))
}

/// Builds the unread listing for the authenticated user.
///
/// Returns a redirect instead of data when the user paginates and asked for a
/// page outside `[1, page_count]`.
pub async fn load_unread_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    request: UnreadPageRequest,
    options: &UnreadPageOptions,
) -> ServiceResult<UnreadPageOutcome>
where
    R: CategoryReader + UserSettingsReader + PrivilegeReader + UnreadTopicReader + ?Sized,
{
    let uid = authenticated_user_id(user)?;
    let UnreadPageRequest { path, mut query } = request;

    let raw_cids: Vec<String> = query.get_all("cid").into_iter().map(str::to_string).collect();
    let raw_cids: Vec<&str> = raw_cids.iter().map(String::as_str).collect();
    let filter = query.get("filter").unwrap_or("").to_string();

    let (category_data, settings, is_privileged) = futures::try_join!(
        get_selected_category(repo, &raw_cids),
        repo.get_user_settings(uid).map_err(ServiceError::from),
        repo.is_privileged(uid).map_err(ServiceError::from),
    )
    .inspect_err(|err| log::error!("Failed to load unread listing context for {uid}: {err}"))?;

    let page = parse_page(query.get("page"));
    let page_size = settings.topics_per_page.get();

    let start = page.saturating_sub(1).saturating_mul(page_size).max(0);
    let stop = start.saturating_add(page_size - 1);

    let unread = repo
        .list_unread_topics(
            UnreadTopicsQuery::new(uid)
                .categories(parse_cids(&raw_cids))
                .filter(UnreadFilter::from_query(&filter))
                .range(start, stop),
        )
        .await
        .inspect_err(|err| log::error!("Failed to list unread topics for {uid}: {err}"))?;

    let displayed_as_home = is_displayed_as_home(&path, &options.relative_path);
    let base_url = if displayed_as_home { "" } else { UNREAD_ROUTE };

    let (title, breadcrumbs) = if displayed_as_home {
        let title = options
            .home_page_title
            .as_deref()
            .filter(|title| !title.is_empty())
            .unwrap_or(HOME_TITLE);
        (title.to_string(), None)
    } else {
        (
            UNREAD_TITLE.to_string(),
            Some(build_breadcrumbs(UNREAD_BREADCRUMB)),
        )
    };

    let page_count = page_count(unread.topic_count, page_size);
    let pagination = Pagination::create(page, page_count, &query);
    let link_tags = build_link_tags(&options.site_url, UNREAD_ROUTE, &pagination.rel);

    if settings.use_pagination && (page < 1 || page > page_count) {
        query.set("page", page.clamp(1, page_count).to_string());
        let target = format!("/{UNREAD_ROUTE}?{}", query.encode());
        log::debug!("Redirecting {uid} from out-of-range page {page} to {target}");
        return Ok(UnreadPageOutcome::Redirect(target));
    }

    let filters = build_filters(base_url, &filter, &query);
    let selected_filter = filters.iter().find(|entry| entry.selected).cloned();

    Ok(UnreadPageOutcome::Render(Box::new(UnreadPageData {
        title,
        breadcrumbs,
        topics: unread.topics,
        topic_count: unread.topic_count,
        page_count,
        pagination,
        link_tags,
        show_select: true,
        show_topic_tools: is_privileged,
        all_categories_url: format!("{base_url}{}", build_query_string(&query, "cid", "")),
        selected_category: category_data.selected_category,
        selected_cids: category_data.selected_cids,
        select_category_label: MARK_AS_READ_LABEL.to_string(),
        select_category_icon: MARK_AS_READ_ICON.to_string(),
        show_category_select_label: true,
        filters,
        selected_filter,
    })))
}

/// Total number of unread topics for the badge.
pub async fn load_unread_total<R>(
    repo: &R,
    user: &AuthenticatedUser,
    filter: &str,
) -> ServiceResult<i64>
where
    R: UnreadTopicReader + ?Sized,
{
    let uid = authenticated_user_id(user)?;
    count_unread(repo, uid, UnreadFilter::from_query(filter)).await
}

async fn count_unread<R>(repo: &R, uid: UserId, filter: UnreadFilter) -> ServiceResult<i64>
where
    R: UnreadTopicReader + ?Sized,
{
    Ok(repo.count_unread_topics(uid, filter).await?)
}

/// Number of pages needed for `topic_count` topics, never less than one.
pub fn page_count(topic_count: i64, page_size: i64) -> i64 {
    let page_size = page_size.max(1);
    let pages = topic_count.max(0).saturating_add(page_size - 1) / page_size;
    pages.max(1)
}
