use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::AppState;
use crate::db::models::api::{DiscussionThread, ErrorBody, error_messages};
use crate::error::AppError;
use crate::services::{DiscussionsService, TodosService};

// 获取全部 todo 及全部讨论；任一表读取失败则整体返回 500
pub async fn get_todos(State(state): State<Arc<AppState>>) -> Response {
    let result = state
        .db
        .get()
        .map_err(AppError::from)
        .and_then(|mut conn| TodosService::snapshot(&mut conn));

    match result {
        Ok(snapshot) => (StatusCode::OK, Json(snapshot)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Error fetching data");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new(error_messages::FETCH_DATA)),
            )
                .into_response()
        }
    }
}

// 获取单个 todo 的讨论列表
pub async fn get_todo_discussions(
    State(state): State<Arc<AppState>>,
    Path(todo_id): Path<i64>,
) -> Response {
    let result = state
        .db
        .get()
        .map_err(AppError::from)
        .and_then(|mut conn| DiscussionsService::list_by_todo(&mut conn, todo_id));

    match result {
        Ok(discussions) => (StatusCode::OK, Json(DiscussionThread { discussions })).into_response(),
        Err(err) => {
            tracing::error!(todo_id, error = %err, "Error fetching discussions");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new(error_messages::FETCH_DISCUSSIONS)),
            )
                .into_response()
        }
    }
}
