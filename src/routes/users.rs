use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::AppState;
use crate::db::models::api::{ErrorBody, UserDirectory, error_messages};
use crate::services::UsersService;

// 获取用户目录（id + email），供指派人选择器使用
pub async fn get_users(State(state): State<Arc<AppState>>) -> Response {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!(error = %e, "Error fetching users: database connection failed");
            return fetch_users_failed();
        }
    };

    match UsersService::directory(&mut conn) {
        Ok(users) => (StatusCode::OK, Json(UserDirectory { users })).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Error fetching users");
            fetch_users_failed()
        }
    }
}

fn fetch_users_failed() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new(error_messages::FETCH_USERS)),
    )
        .into_response()
}
