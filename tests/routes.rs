use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::body::to_bytes;
use actix_web::cookie::Key;
use actix_web::http::{StatusCode, header};
use actix_web::{App, HttpRequest, HttpResponse, test, web};
use actix_web_flash_messages::{
    FlashMessagesFramework, IncomingFlashMessages, storage::CookieMessageStore,
};
use forum_unread::dto::unread::LinkTag;
use forum_unread::models::config::ServerConfig;
use forum_unread::repository::DieselRepository;
use forum_unread::routes::unread::{unread_page, unread_total_response};
use forum_unread::routes::{X_REDIRECT, is_api_request, link_header, redirect_to};
use forum_unread::{UNREAD_HOME_ROUTE, unread_scope};
use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::models::config::CommonServerConfig;
use tera::Tera;

mod common;

#[actix_web::test]
async fn html_redirect_is_see_other_under_mount_prefix() {
    let resp = redirect_to("/unread?page=2", "/forum", false);

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/forum/unread?page=2"
    );
}

#[actix_web::test]
async fn api_redirect_carries_target_in_header_and_body() {
    let resp = redirect_to("/unread?page=1", "", true);

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(X_REDIRECT).unwrap(), "/unread?page=1");

    let body = to_bytes(resp.into_body()).await.unwrap();
    assert_eq!(body.as_ref(), br#""/unread?page=1""#);
}

#[test]
fn api_requests_are_detected_by_prefix() {
    let api = test::TestRequest::get()
        .uri("/forum/api/unread?page=2")
        .to_http_request();
    let html = test::TestRequest::get()
        .uri("/forum/unread")
        .to_http_request();

    assert!(is_api_request(&api, "/forum"));
    assert!(!is_api_request(&html, "/forum"));
}

#[test]
fn link_header_lists_every_tag() {
    let tags = vec![
        LinkTag {
            rel: "canonical".to_string(),
            href: "https://forum.example.com/unread".to_string(),
        },
        LinkTag {
            rel: "next".to_string(),
            href: "https://forum.example.com/unread?page=2".to_string(),
        },
    ];

    let value = link_header(&tags).expect("header value");
    assert_eq!(
        value.to_str().unwrap(),
        "<https://forum.example.com/unread>; rel=\"canonical\", \
         <https://forum.example.com/unread?page=2>; rel=\"next\""
    );
    assert!(link_header(&[]).is_none());
}

fn server_config() -> ServerConfig {
    ServerConfig {
        domain: "localhost".to_string(),
        address: "127.0.0.1".to_string(),
        port: 8080,
        database_url: String::new(),
        templates_dir: "templates/**/*".to_string(),
        secret: "0".repeat(64),
        auth_service_url: "http://localhost:8000/auth/signin".to_string(),
        url: "http://localhost:8080".to_string(),
        relative_path: String::new(),
        home_page_title: None,
        home_route: Some(UNREAD_HOME_ROUTE.to_string()),
        default_topics_per_page: 20,
        max_topics_per_page: 100,
        default_use_pagination: false,
    }
}

/// Session user taken from the `x-forum-user` header, `1` when absent.
fn session_user(req: &HttpRequest) -> AuthenticatedUser {
    let sub = req
        .headers()
        .get("x-forum-user")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("1");
    AuthenticatedUser {
        sub: sub.to_string(),
        email: "alice@example.com".to_string(),
        hub_id: 1,
        name: "Alice".to_string(),
        roles: vec![],
        exp: 0,
    }
}

async fn listing_as_user(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    common_config: web::Data<CommonServerConfig>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> HttpResponse {
    unread_page(
        &req,
        &session_user(&req),
        &repo,
        &flash_messages,
        &common_config,
        &server_config,
        &tera,
    )
    .await
}

async fn total_as_user(req: HttpRequest, repo: web::Data<DieselRepository>) -> HttpResponse {
    unread_total_response(&req, &session_user(&req), &repo).await
}

fn flash_framework() -> FlashMessagesFramework {
    let store = CookieMessageStore::builder(Key::from(&[0u8; 64])).build();
    FlashMessagesFramework::builder(store).build()
}

macro_rules! forum_app {
    ($test_db:expr) => {{
        let config = server_config();
        test::init_service(
            App::new()
                .wrap(flash_framework())
                .app_data(web::Data::new(DieselRepository::new(
                    $test_db.pool(),
                    config.settings_defaults(),
                )))
                .app_data(web::Data::new(CommonServerConfig {
                    auth_service_url: config.auth_service_url.clone(),
                    secret: config.secret.clone(),
                }))
                .app_data(web::Data::new(Tera::new(&config.templates_dir).unwrap()))
                .app_data(web::Data::new(config))
                .route("/", web::get().to(listing_as_user))
                .route("/unread", web::get().to(listing_as_user))
                .route("/api/unread", web::get().to(listing_as_user))
                .route("/api/unread/total", web::get().to(total_as_user)),
        )
        .await
    }};
}

#[actix_web::test]
async fn total_returns_bare_count() {
    let test_db = common::TestDb::new("total_returns_bare_count.db");
    test_db.seed_forum();
    let app = forum_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/api/unread/total?filter=new")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await.as_ref(), b"2");

    let req = test::TestRequest::get()
        .uri("/api/unread/total?filter=watched&filter=new")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await.as_ref(), b"1");
}

#[actix_web::test]
async fn total_rejects_unusable_subject() {
    let test_db = common::TestDb::new("total_rejects_unusable_subject.db");
    test_db.seed_forum();
    let app = forum_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/api/unread/total")
        .insert_header(("x-forum-user", "guest"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn total_store_failure_is_server_error() {
    let test_db = common::TestDb::new("total_store_failure_is_server_error.db");
    test_db.seed_forum();
    test_db.execute("DROP TABLE topic_reads; DROP TABLE topic_follows; DROP TABLE topics;");
    let app = forum_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/api/unread/total")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn out_of_range_page_redirects_browser() {
    let test_db = common::TestDb::new("out_of_range_page_redirects_browser.db");
    test_db.seed_forum();
    let app = forum_app!(test_db);

    let req = test::TestRequest::get().uri("/unread?page=5").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/unread?page=2"
    );
    assert!(resp.headers().get(header::LINK).is_none());
}

#[actix_web::test]
async fn out_of_range_page_redirects_api_client() {
    let test_db = common::TestDb::new("out_of_range_page_redirects_api_client.db");
    test_db.seed_forum();
    let app = forum_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/api/unread?filter=new&page=9")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(X_REDIRECT).unwrap(),
        "/unread?filter=new&page=1"
    );
}

#[actix_web::test]
async fn api_listing_returns_view_model_with_link_header() {
    let test_db = common::TestDb::new("api_listing_returns_view_model_with_link_header.db");
    test_db.seed_forum();
    let app = forum_app!(test_db);

    let req = test::TestRequest::get().uri("/api/unread").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::LINK).unwrap(),
        "<http://localhost:8080/unread>; rel=\"canonical\", \
         <http://localhost:8080/unread?page=2>; rel=\"next\""
    );

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "[[pages:unread]]");
    assert_eq!(body["topic_count"], 3);
    assert_eq!(body["page_count"], 2);
    assert_eq!(body["topics"].as_array().unwrap().len(), 2);
    assert_eq!(body["topics"][0]["tid"], 4);
    assert_eq!(body["show_topic_tools"], false);
}

#[actix_web::test]
async fn html_listing_renders_topics() {
    let test_db = common::TestDb::new("html_listing_renders_topics.db");
    test_db.seed_forum();
    let app = forum_app!(test_db);

    let req = test::TestRequest::get().uri("/unread").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get(header::LINK).is_some());
    let body = test::read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();
    assert!(body.contains("Never opened"));
    assert!(body.contains("<title>[[pages:unread]]</title>"));
}

#[actix_web::test]
async fn home_listing_uses_home_title() {
    let test_db = common::TestDb::new("home_listing_uses_home_title.db");
    test_db.seed_forum();
    let app = forum_app!(test_db);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();
    assert!(body.contains("<title>[[pages:home]]</title>"));
    assert!(!body.contains("breadcrumb"));
}

macro_rules! mounted_app {
    ($test_db:expr, $unread_is_home:expr) => {{
        let config = server_config();
        let secret_key = Key::from(config.secret.as_bytes());
        test::init_service(
            App::new()
                .wrap(flash_framework())
                .wrap(IdentityMiddleware::default())
                .wrap(SessionMiddleware::new(
                    CookieSessionStore::default(),
                    secret_key,
                ))
                .app_data(web::Data::new(DieselRepository::new(
                    $test_db.pool(),
                    config.settings_defaults(),
                )))
                .app_data(web::Data::new(CommonServerConfig {
                    auth_service_url: config.auth_service_url.clone(),
                    secret: config.secret.clone(),
                }))
                .app_data(web::Data::new(Tera::new(&config.templates_dir).unwrap()))
                .service(unread_scope(&config.relative_path, $unread_is_home))
                .app_data(web::Data::new(config)),
        )
        .await
    }};
}

#[actix_web::test]
async fn anonymous_requests_never_reach_the_listing() {
    let test_db = common::TestDb::new("anonymous_requests_never_reach_the_listing.db");
    test_db.seed_forum();
    let app = mounted_app!(test_db, true);

    let req = test::TestRequest::get()
        .uri("/api/unread/total")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());

    let req = test::TestRequest::get().uri("/unread").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_redirection());

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_redirection());
}

#[actix_web::test]
async fn home_mount_depends_on_configuration() {
    let test_db = common::TestDb::new("home_mount_depends_on_configuration.db");
    let app = mounted_app!(test_db, false);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
