use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::debug;

use crate::{
    error::AppError,
    middleware::ReceivedAt,
    model::Todo,
    store::TodoStore,
    validation::validate_new_todo,
};

/// Location sent back on creation. The placeholder is not substituted.
pub const CREATED_LOCATION: &str = "/todos/{id}";

pub fn todo_routes<S: TodoStore>() -> Router<Arc<S>> {
    Router::new()
        .route("/todos", get(list_todos::<S>).post(create_todo::<S>))
        .route("/todos/{id}", get(get_todo::<S>).delete(delete_todo::<S>))
}

async fn list_todos<S: TodoStore>(State(store): State<Arc<S>>) -> Json<Vec<Todo>> {
    Json(store.list().await)
}

async fn get_todo<S: TodoStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<i32>,
) -> Result<Json<Todo>, AppError> {
    store.get_by_id(id).await.map(Json).ok_or(AppError::NotFound)
}

async fn create_todo<S: TodoStore>(
    State(store): State<Arc<S>>,
    ReceivedAt(received_at): ReceivedAt,
    Json(todo): Json<Todo>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(errors) = validate_new_todo(&todo, received_at) {
        debug!(id = todo.id, fields = ?errors.keys().collect::<Vec<_>>(), "rejected todo");
        return Err(AppError::Validation(errors));
    }

    let todo = store.add(todo).await;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, CREATED_LOCATION)],
        Json(todo),
    ))
}

async fn delete_todo<S: TodoStore>(State(store): State<Arc<S>>, Path(id): Path<i32>) -> StatusCode {
    store.delete_by_id(id).await;
    StatusCode::NO_CONTENT
}
