pub mod pages;
pub mod private;
pub mod todos;
pub mod users;

use crate::AppState;
use crate::db::models::api::HealthStatus;
use crate::middleware::{cors_layer, request_tracking_middleware};
use axum::{
    Json, Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;

pub fn create_router(state: Arc<AppState>) -> Router {
    // 读接口
    let api_routes = Router::new()
        .route("/api/todos", get(todos::get_todos))
        .route(
            "/api/todos/:todo_id/discussions",
            get(todos::get_todo_discussions),
        )
        .route("/api/users", get(users::get_users));

    // 页面与写接口
    let private_routes = Router::new()
        .route(private::TODO_PAGE_PATH, get(pages::todo_page))
        .route(private::ADD_TODO_PATH, post(private::add_todo))
        .route(private::DISCUSS_PATH, post(private::add_discussion))
        .route("/private/todo/update/:todo_id", post(private::update_todo));

    let cors = cors_layer(&state.config.server().cors_origins);

    Router::new()
        .route("/health", get(health))
        .merge(api_routes)
        .merge(private_routes)
        .layer(cors)
        .layer(from_fn_with_state(state.clone(), request_tracking_middleware))
        .with_state(state)
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}
