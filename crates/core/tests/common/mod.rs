//! Common test utilities: in-process mock trackers.
//!
//! Each mock tracker is an axum router served on an ephemeral loopback port,
//! so searches go through the real HTTP client, auth and parsing paths.

#![allow(dead_code)]

use std::collections::HashMap;
use std::time::Duration;

use axum::extract::{Form, Query as QueryParams};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;

pub use seedpick_core::testing::fixtures;

/// Basic auth header for `alice:secret`.
pub const ALICE_BASIC: &str = "Basic YWxpY2U6c2VjcmV0";

pub const SESSION_COOKIE: &str = "session=abc123";

/// Serve a router on 127.0.0.1 and return its base URL.
pub async fn spawn_tracker(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock tracker");
    let addr = listener.local_addr().expect("Mock tracker has no address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });
    format!("http://{}", addr)
}

fn xml(body: String) -> Response {
    ([(header::CONTENT_TYPE, "application/rss+xml")], body).into_response()
}

fn html(body: String) -> Response {
    ([(header::CONTENT_TYPE, "text/html")], body).into_response()
}

/// Tracker answering `/api` with a fixed Torznab feed.
pub async fn torznab_tracker(body: String) -> String {
    let router = Router::new().route(
        "/api",
        get(move || {
            let body = body.clone();
            async move { xml(body) }
        }),
    );
    format!("{}/api", spawn_tracker(router).await)
}

/// Tracker answering `/browse` with a fixed HTML page.
pub async fn html_tracker(body: String) -> String {
    let router = Router::new().route(
        "/browse",
        get(move || {
            let body = body.clone();
            async move { html(body) }
        }),
    );
    format!("{}/browse", spawn_tracker(router).await)
}

/// Tracker that echoes the query string it received back as one feed item
/// titled with `key=value&...` (sorted), with the given seeders.
pub async fn echo_tracker(seeders: u32) -> String {
    let router = Router::new().route(
        "/api",
        get(
            move |QueryParams(params): QueryParams<HashMap<String, String>>| async move {
                let mut pairs: Vec<_> = params
                    .into_iter()
                    .map(|(k, v)| format!("{}={}", k, v))
                    .collect();
                pairs.sort();
                xml(fixtures::torznab_feed(&[fixtures::FeedItem::new(
                    &pairs.join("&"),
                    "http://echo/dl",
                )
                .seeders(seeders)]))
            },
        ),
    );
    format!("{}/api", spawn_tracker(router).await)
}

/// Tracker requiring `param_name=api_key` in the query string.
pub async fn api_key_tracker(param_name: &'static str, api_key: &'static str, body: String) -> String {
    let router = Router::new().route(
        "/api",
        get(
            move |QueryParams(params): QueryParams<HashMap<String, String>>| {
                let body = body.clone();
                async move {
                    if params.get(param_name).map(String::as_str) == Some(api_key) {
                        xml(body)
                    } else {
                        (StatusCode::UNAUTHORIZED, "invalid api key").into_response()
                    }
                }
            },
        ),
    );
    format!("{}/api", spawn_tracker(router).await)
}

/// Tracker requiring HTTP Basic `alice:secret`.
pub async fn basic_auth_tracker(body: String) -> String {
    let router = Router::new().route(
        "/api",
        get(move |headers: HeaderMap| {
            let body = body.clone();
            async move {
                let authorized = headers
                    .get(header::AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    == Some(ALICE_BASIC);
                if authorized {
                    xml(body)
                } else {
                    (StatusCode::UNAUTHORIZED, "login required").into_response()
                }
            }
        }),
    );
    format!("{}/api", spawn_tracker(router).await)
}

/// Tracker with a `/login` form that sets a session cookie, and a
/// `/search` page that requires it. Returns the base URL.
pub async fn cookie_tracker(body: String) -> String {
    let router = Router::new()
        .route(
            "/login",
            post(|Form(form): Form<HashMap<String, String>>| async move {
                if form.get("username").map(String::as_str) == Some("me")
                    && form.get("password").map(String::as_str) == Some("hunter2")
                {
                    (
                        [(header::SET_COOKIE, format!("{}; Path=/", SESSION_COOKIE))],
                        "welcome",
                    )
                        .into_response()
                } else {
                    (StatusCode::FORBIDDEN, "bad login").into_response()
                }
            }),
        )
        .route(
            "/search",
            get(move |headers: HeaderMap| {
                let body = body.clone();
                async move {
                    let has_session = headers
                        .get(header::COOKIE)
                        .and_then(|v| v.to_str().ok())
                        .is_some_and(|cookies| cookies.contains(SESSION_COOKIE));
                    if has_session {
                        xml(body)
                    } else {
                        (StatusCode::FORBIDDEN, "not logged in").into_response()
                    }
                }
            }),
        );
    spawn_tracker(router).await
}

/// Tracker that answers only after `delay`.
pub async fn slow_tracker(delay: Duration, body: String) -> String {
    let router = Router::new().route(
        "/api",
        get(move || {
            let body = body.clone();
            async move {
                tokio::time::sleep(delay).await;
                xml(body)
            }
        }),
    );
    format!("{}/api", spawn_tracker(router).await)
}

/// Tracker that always answers with the given status.
pub async fn failing_tracker(status: StatusCode) -> String {
    let router = Router::new().route("/api", get(move || async move { (status, "tracker error") }));
    format!("{}/api", spawn_tracker(router).await)
}
