pub mod config;
pub mod error;
pub mod middleware;
pub mod model;
pub mod routes;
pub mod store;
pub mod telemetry;
pub mod validation;

use std::sync::Arc;

use axum::{http::StatusCode, middleware::from_fn, Router};
use tokio::net::TcpListener;

pub use config::ServerConfig;
pub use error::AppError;
pub use model::Todo;
pub use store::{InMemoryTodoStore, TodoStore};
pub use validation::{validate_new_todo, ValidationErrors};

/// Router backed by a fresh in-memory store.
pub fn app() -> Router {
    app_with_store(InMemoryTodoStore::new())
}

/// Router backed by `store`. The logger wraps the legacy-path redirect,
/// which wraps routing; unmatched paths fall through to an empty 404.
pub fn app_with_store<S: TodoStore>(store: S) -> Router {
    routes::todo_routes::<S>()
        .with_state(Arc::new(store))
        .fallback(|| async { StatusCode::NOT_FOUND })
        .layer(from_fn(middleware::redirect_legacy_paths))
        .layer(from_fn(middleware::log_requests))
}

pub async fn run<S: TodoStore>(listener: TcpListener, store: S) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_store(store)).await
}
