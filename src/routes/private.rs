use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::ACCEPT},
    response::{IntoResponse, Redirect, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::AppState;
use crate::db::enums::TodoStatus;
use crate::db::models::api::DiscussionThread;
use crate::error::{AppError, AppResult};
use crate::services::{DiscussionsService, TodosService};
use crate::utils::{blank_as_none, empty_string_as_none, optional_id};
use crate::validation::JsonOrForm;

pub const TODO_PAGE_PATH: &str = "/private/todo";
pub const ADD_TODO_PATH: &str = "/private/todo/add";
pub const DISCUSS_PATH: &str = "/private/todo/discuss";

pub fn update_todo_path(todo_id: i64) -> String {
    format!("/private/todo/update/{}", todo_id)
}

/// The todo page with the given todo open, so its thread stays in view.
pub fn todo_thread_path(todo_id: i64) -> String {
    format!("{}?todo={}", TODO_PAGE_PATH, todo_id)
}

/// Body of the create and update endpoints.
#[derive(Deserialize, Validate, Debug, Default, Clone)]
pub struct TodoForm {
    #[serde(default)]
    #[validate(length(max = 10000, message = "Todo content is too long (max 10000 characters)"))]
    pub content: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = 10000, message = "Todo description is too long (max 10000 characters)"))]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub follow_up_date: Option<NaiveDate>,
    #[serde(default)]
    pub assignees: Vec<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub status: Option<TodoStatus>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = 10000, message = "Progress notes are too long (max 10000 characters)"))]
    pub progress_notes: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct DiscussionForm {
    #[serde(default, deserialize_with = "optional_id")]
    pub todo_id: Option<i64>,
    #[serde(default)]
    pub content: String,
}

/// JSON callers get the re-fetched resource or the error; everyone else is
/// sent back to the todo page whatever happened.
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|accept| accept.contains("application/json"))
        .unwrap_or(false)
}

fn respond<T: Serialize>(
    json: bool,
    result: AppResult<T>,
    success: StatusCode,
    action: &'static str,
    return_to: &str,
) -> Response {
    match result {
        Ok(body) if json => (success, Json(body)).into_response(),
        Ok(_) => Redirect::to(return_to).into_response(),
        Err(err) if json => err.into_response(),
        Err(err) => {
            if err.is_server_error() {
                tracing::error!(error = %err, "Error {}", action);
            } else {
                tracing::warn!(error = %err, "Rejected {} request", action);
            }
            Redirect::to(return_to).into_response()
        }
    }
}

// 创建 todo 并解析指派人
pub async fn add_todo(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<JsonOrForm<TodoForm>, AppError>,
) -> Response {
    let result = payload
        .and_then(|JsonOrForm(form)| TodosService::prepare_create(&form))
        .and_then(|prepared| {
            let mut conn = state.db.get()?;
            TodosService::create(&mut conn, prepared)
        });

    respond(
        wants_json(&headers),
        result,
        StatusCode::CREATED,
        "adding todo",
        TODO_PAGE_PATH,
    )
}

// 更新 todo 字段及指派人集合
pub async fn update_todo(
    State(state): State<Arc<AppState>>,
    Path(todo_id): Path<i64>,
    headers: HeaderMap,
    payload: Result<JsonOrForm<TodoForm>, AppError>,
) -> Response {
    let result = payload
        .and_then(|JsonOrForm(form)| TodosService::prepare_update(todo_id, &form))
        .and_then(|prepared| {
            let mut conn = state.db.get()?;
            TodosService::update(&mut conn, prepared)
        });

    respond(
        wants_json(&headers),
        result,
        StatusCode::OK,
        "updating todo",
        TODO_PAGE_PATH,
    )
}

// 添加讨论；表单提交后回到该 todo 的讨论
pub async fn add_discussion(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<JsonOrForm<DiscussionForm>, AppError>,
) -> Response {
    let return_to = match payload.as_ref().ok().and_then(|JsonOrForm(form)| form.todo_id) {
        Some(todo_id) if todo_id > 0 => todo_thread_path(todo_id),
        _ => TODO_PAGE_PATH.to_string(),
    };

    let result = payload
        .and_then(|JsonOrForm(form)| DiscussionsService::prepare(&form))
        .and_then(|new_discussion| {
            let mut conn = state.db.get()?;
            DiscussionsService::create(&mut conn, new_discussion)
        })
        .map(|discussions| DiscussionThread { discussions });

    respond(
        wants_json(&headers),
        result,
        StatusCode::CREATED,
        "adding discussion",
        &return_to,
    )
}
