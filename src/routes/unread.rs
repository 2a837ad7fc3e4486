use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::models::config::CommonServerConfig;
use pushkind_common::routes::{base_context, render_template};
use tera::{Context, Tera};

use crate::dto::unread::{UnreadPageOptions, UnreadPageOutcome, UnreadPageRequest};
use crate::models::config::ServerConfig;
use crate::query::QueryParams;
use crate::repository::DieselRepository;
use crate::routes::{is_api_request, link_header, redirect_to};
use crate::services::{ServiceError, unread as unread_service};

#[get("/unread")]
pub async fn show_unread(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    common_config: web::Data<CommonServerConfig>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    unread_page(
        &req,
        &user,
        &repo,
        &flash_messages,
        &common_config,
        &server_config,
        &tera,
    )
    .await
}

/// The unread listing mounted as the forum home page.
#[get("/")]
pub async fn show_home(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    common_config: web::Data<CommonServerConfig>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    unread_page(
        &req,
        &user,
        &repo,
        &flash_messages,
        &common_config,
        &server_config,
        &tera,
    )
    .await
}

#[get("/unread/total")]
pub async fn unread_total(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    unread_total_response(&req, &user, &repo).await
}

/// Answers the badge request with the bare unread count.
pub async fn unread_total_response(
    req: &HttpRequest,
    user: &AuthenticatedUser,
    repo: &DieselRepository,
) -> HttpResponse {
    let query = QueryParams::parse(req.query_string());
    let filter = query.get("filter").unwrap_or("");

    match unread_service::load_unread_total(repo, user, filter).await {
        Ok(total) => HttpResponse::Ok().json(total),
        Err(ServiceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(err) => {
            log::error!("Failed to count unread topics: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Renders the unread listing, or answers with JSON under `/api`.
pub async fn unread_page(
    req: &HttpRequest,
    user: &AuthenticatedUser,
    repo: &DieselRepository,
    flash_messages: &IncomingFlashMessages,
    common_config: &CommonServerConfig,
    server_config: &ServerConfig,
    tera: &Tera,
) -> HttpResponse {
    let relative_path = server_config.relative_path.as_str();
    let api = is_api_request(req, relative_path);

    let request = UnreadPageRequest {
        path: req.path().to_string(),
        query: QueryParams::parse(req.query_string()),
    };
    let options = UnreadPageOptions {
        relative_path: relative_path.to_string(),
        site_url: server_config.url.clone(),
        home_page_title: server_config.home_page_title.clone(),
    };

    let data = match unread_service::load_unread_page(repo, user, request, &options).await {
        Ok(UnreadPageOutcome::Render(data)) => data,
        Ok(UnreadPageOutcome::Redirect(target)) => {
            return redirect_to(&target, relative_path, api);
        }
        Err(ServiceError::Unauthorized) => return HttpResponse::Unauthorized().finish(),
        Err(err) => {
            log::error!("Failed to load unread topics: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut response = if api {
        HttpResponse::Ok().json(&*data)
    } else {
        let mut context = base_context(
            flash_messages,
            user,
            "unread",
            &common_config.auth_service_url,
        );
        match Context::from_serialize(&*data) {
            Ok(page) => context.extend(page),
            Err(err) => {
                log::error!("Failed to build the unread template context: {err}");
                return HttpResponse::InternalServerError().finish();
            }
        }
        context.insert("relative_path", relative_path);

        render_template(tera, "unread/index.html", &context)
    };

    if response.status().is_success() {
        if let Some(value) = link_header(&data.link_tags) {
            response.headers_mut().insert(header::LINK, value);
        }
    }

    response
}
