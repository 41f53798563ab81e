//! Middleware wrapped around every route, fallback included.

use std::{convert::Infallible, time::Instant};

use axum::{
    extract::{FromRequestParts, Request},
    http::{header, request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::info;

const LEGACY_PREFIX: &str = "tasks/";
const CANONICAL_PREFIX: &str = "/todos/";

/// When the request reached the server, before its body was read.
///
/// Stamped by [`log_requests`]; extracting it outside that middleware falls
/// back to the current time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReceivedAt(pub DateTime<Utc>);

impl<S: Send + Sync> FromRequestParts<S> for ReceivedAt {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<ReceivedAt>()
            .copied()
            .unwrap_or_else(|| ReceivedAt(Utc::now())))
    }
}

/// Log one line when a request arrives and one when its response is ready.
pub async fn log_requests(mut request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();
    let received_at = Utc::now();
    request.extensions_mut().insert(ReceivedAt(received_at));

    info!(
        %method,
        %path,
        timestamp = %received_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        "started"
    );

    let response = next.run(request).await;

    info!(
        %method,
        %path,
        timestamp = %Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "finished"
    );

    response
}

/// Answer `tasks/...` with a redirect to the same path under `todos/`.
pub async fn redirect_legacy_paths(request: Request, next: Next) -> Response {
    match legacy_redirect_target(request.uri().path(), request.uri().query()) {
        Some(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
        None => next.run(request).await,
    }
}

/// Where a legacy path should be sent, or `None` if it is not legacy.
pub fn legacy_redirect_target(path: &str, query: Option<&str>) -> Option<String> {
    let rest = path
        .strip_prefix('/')
        .unwrap_or(path)
        .strip_prefix(LEGACY_PREFIX)?;

    let mut location = format!("{CANONICAL_PREFIX}{rest}");
    if let Some(query) = query {
        location.push('?');
        location.push_str(query);
    }
    Some(location)
}
