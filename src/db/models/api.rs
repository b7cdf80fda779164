use serde::{Deserialize, Serialize};

use super::{Discussion, PublicUser, TodoWithAssignees};

// API 响应结构

/// Body of every failed JSON response.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// `GET /api/todos`
#[derive(Serialize, Deserialize, Debug)]
pub struct TodosSnapshot {
    pub todos: Vec<TodoWithAssignees>,
    pub discussions: Vec<Discussion>,
}

/// `GET /api/users`
#[derive(Serialize, Deserialize, Debug)]
pub struct UserDirectory {
    pub users: Vec<PublicUser>,
}

/// `GET /api/todos/:todo_id/discussions`, also returned after a discussion is posted.
#[derive(Serialize, Deserialize, Debug)]
pub struct DiscussionThread {
    pub discussions: Vec<Discussion>,
}

/// Re-fetched todo returned after a create or update.
#[derive(Serialize, Deserialize, Debug)]
pub struct TodoWriteResult {
    pub todo: TodoWithAssignees,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unresolved_assignees: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

// 错误消息常量，读接口对外只暴露这些固定文案
pub mod error_messages {
    pub const FETCH_DATA: &str = "Error fetching data";
    pub const FETCH_USERS: &str = "Error fetching users";
    pub const FETCH_DISCUSSIONS: &str = "Error fetching discussions";
}
