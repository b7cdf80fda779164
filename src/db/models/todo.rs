use crate::db::enums::TodoStatus;
use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

// Todo models
#[derive(Queryable, Selectable, Identifiable, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schema::todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Todo {
    pub id: i64,
    pub content: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub follow_up_date: Option<NaiveDate>,
    pub status: TodoStatus,
    pub progress_notes: Option<String>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::todos)]
pub struct NewTodo {
    pub content: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub follow_up_date: Option<NaiveDate>,
    pub status: TodoStatus,
    pub progress_notes: Option<String>,
}

/// Full replacement of the editable columns; `None` clears the column.
#[derive(AsChangeset, Debug)]
#[diesel(table_name = crate::schema::todos)]
#[diesel(treat_none_as_null = true)]
pub struct TodoChanges {
    pub content: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub follow_up_date: Option<NaiveDate>,
    pub status: TodoStatus,
    pub progress_notes: Option<String>,
}

/// A todo together with the emails of its assignees, as served to clients.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TodoWithAssignees {
    #[serde(flatten)]
    pub todo: Todo,
    pub assignees: Vec<String>,
}

impl TodoWithAssignees {
    pub fn is_assigned_to(&self, email: &str) -> bool {
        self.assignees.iter().any(|a| a == email)
    }
}
