//! HTTP handlers and the response helpers they share.

use actix_web::http::header::HeaderValue;
use actix_web::{HttpRequest, HttpResponse};
use pushkind_common::routes::redirect;

use crate::dto::unread::LinkTag;

pub mod unread;

/// Header carrying the redirect target for API clients.
pub const X_REDIRECT: &str = "X-Redirect";

/// Whether the request came through the `/api` scope.
pub fn is_api_request(req: &HttpRequest, relative_path: &str) -> bool {
    req.path().starts_with(&format!("{relative_path}/api/"))
}

/// Redirects to `target`, given relative to the mount prefix.
///
/// Browsers get a `303 See Other`; API clients get the target in the
/// `X-Redirect` header and as a JSON string body so they can navigate
/// themselves.
pub fn redirect_to(target: &str, relative_path: &str, api: bool) -> HttpResponse {
    let location = format!("{relative_path}{target}");
    if api {
        HttpResponse::Ok()
            .insert_header((X_REDIRECT, location.as_str()))
            .json(location)
    } else {
        redirect(&location)
    }
}

/// Formats link tags as an HTTP `Link` header value.
pub fn link_header(tags: &[LinkTag]) -> Option<HeaderValue> {
    if tags.is_empty() {
        return None;
    }
    let value = tags
        .iter()
        .map(|tag| format!("<{}>; rel=\"{}\"", tag.href, tag.rel))
        .collect::<Vec<_>>()
        .join(", ");
    HeaderValue::from_str(&value)
        .inspect_err(|err| log::warn!("Skipping unrepresentable Link header {value:?}: {err}"))
        .ok()
}
