use std::collections::HashMap;

use diesel::prelude::*;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::models::api::{TodoWriteResult, TodosSnapshot},
    db::models::assignment::Assignment,
    db::models::todo::{NewTodo, Todo, TodoChanges, TodoWithAssignees},
    db::repositories::{AssignmentRepo, DiscussionRepo, PublicUserRepo, TodoRepo},
    error::AppError,
    routes::private::TodoForm,
    validation::{
        into_app_error,
        todo::{normalize_assignees, partition_by_format, validate_create_todo, validate_update_todo},
    },
};

/// Resolved assignment rows plus the submitted emails that matched no user.
#[derive(Debug, Default, PartialEq)]
pub struct AssignmentPlan {
    pub rows: Vec<Assignment>,
    /// Emails behind `rows`, in the same order.
    pub assigned: Vec<String>,
    pub unresolved: Vec<String>,
}

impl AssignmentPlan {
    /// The rows could not be written: every planned email is reported unresolved.
    pub fn mark_unassigned(&mut self) {
        let assigned = std::mem::take(&mut self.assigned);
        self.rows.clear();
        self.unresolved.splice(0..0, assigned);
    }
}

/// Pairs each email with its user id. Order follows `emails`; a user listed
/// twice under the same email yields one row.
pub fn plan_assignments(
    todo_id: i64,
    emails: &[String],
    directory: &HashMap<String, Uuid>,
) -> AssignmentPlan {
    let mut plan = AssignmentPlan::default();
    for email in emails {
        match directory.get(email) {
            Some(user_id) => {
                if !plan.rows.iter().any(|row| row.user_id == *user_id) {
                    plan.rows.push(Assignment {
                        todo_id,
                        user_id: *user_id,
                    });
                    plan.assigned.push(email.clone());
                }
            }
            None => plan.unresolved.push(email.clone()),
        }
    }
    plan
}

/// Groups (todo id, email) pairs onto their todos. Todos without assignments get
/// an empty list; pairs for unknown todos are ignored.
pub fn attach_assignees(todos: Vec<Todo>, pairs: Vec<(i64, String)>) -> Vec<TodoWithAssignees> {
    let mut by_todo: HashMap<i64, Vec<String>> = HashMap::new();
    for (todo_id, email) in pairs {
        by_todo.entry(todo_id).or_default().push(email);
    }

    todos
        .into_iter()
        .map(|todo| {
            let assignees = by_todo.remove(&todo.id).unwrap_or_default();
            TodoWithAssignees { todo, assignees }
        })
        .collect()
}

/// A create request that passed validation.
#[derive(Debug)]
pub struct PreparedTodo {
    pub new_todo: NewTodo,
    pub assignees: Vec<String>,
}

/// An update request that passed validation.
#[derive(Debug)]
pub struct PreparedUpdate {
    pub todo_id: i64,
    pub changes: TodoChanges,
    pub assignees: Vec<String>,
}

pub struct TodosService;

impl TodosService {
    pub fn list_with_assignees(conn: &mut PgConnection) -> Result<Vec<TodoWithAssignees>, AppError> {
        let todos = TodoRepo::list_all(conn)?;
        let pairs = AssignmentRepo::list_assignee_emails(conn)?;
        Ok(attach_assignees(todos, pairs))
    }

    /// All todos and all discussions; either table failing fails the whole read.
    pub fn snapshot(conn: &mut PgConnection) -> Result<TodosSnapshot, AppError> {
        let todos = Self::list_with_assignees(conn)?;
        let discussions = DiscussionRepo::list_all(conn)?;
        Ok(TodosSnapshot { todos, discussions })
    }

    pub fn get_with_assignees(
        conn: &mut PgConnection,
        todo_id: i64,
    ) -> Result<TodoWithAssignees, AppError> {
        let todo = TodoRepo::find_by_id(conn, todo_id)?.ok_or_else(|| AppError::not_found("todo"))?;
        let assignees = AssignmentRepo::list_assignee_emails_for_todo(conn, todo_id)?;
        Ok(TodoWithAssignees { todo, assignees })
    }

    /// Validates a create request. Needs no database, so rejected input never
    /// costs a pooled connection.
    pub fn prepare_create(form: &TodoForm) -> Result<PreparedTodo, AppError> {
        form.validate().map_err(into_app_error)?;
        let assignees = normalize_assignees(&form.assignees);
        validate_create_todo(&form.content, &assignees)?;

        Ok(PreparedTodo {
            new_todo: NewTodo {
                content: form.content.trim().to_string(),
                description: form.description.clone(),
                due_date: form.due_date,
                follow_up_date: form.follow_up_date,
                status: form.status.unwrap_or_default(),
                progress_notes: form.progress_notes.clone(),
            },
            assignees,
        })
    }

    pub fn prepare_update(todo_id: i64, form: &TodoForm) -> Result<PreparedUpdate, AppError> {
        form.validate().map_err(into_app_error)?;
        validate_update_todo(todo_id, &form.content)?;

        Ok(PreparedUpdate {
            todo_id,
            changes: TodoChanges {
                content: form.content.trim().to_string(),
                description: form.description.clone(),
                due_date: form.due_date,
                follow_up_date: form.follow_up_date,
                status: form.status.unwrap_or_default(),
                progress_notes: form.progress_notes.clone(),
            },
            assignees: normalize_assignees(&form.assignees),
        })
    }

    /// Inserts the todo, then attaches whichever assignees resolve.
    ///
    /// The todo row is committed before assignee resolution starts and is not
    /// rolled back when resolution or the assignment insert fails; those
    /// failures are logged and the affected emails show up in `unresolved_assignees`.
    /// Each fallible assignment step runs in its own transaction; a failure
    /// there rolls back only that step.
    pub fn create(conn: &mut PgConnection, prepared: PreparedTodo) -> Result<TodoWriteResult, AppError> {
        let todo = TodoRepo::insert(conn, &prepared.new_todo)?;
        tracing::info!(todo_id = todo.id, "Todo created");

        let mut plan = Self::resolve_assignees(conn, todo.id, prepared.assignees);
        let inserted = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            AssignmentRepo::insert_batch(conn, &plan.rows)
        });
        if let Err(e) = inserted {
            tracing::error!(todo_id = todo.id, error = %e, "Error adding assignments");
            plan.mark_unassigned();
        }

        let todo = Self::get_with_assignees(conn, todo.id)?;
        Ok(TodoWriteResult {
            todo,
            unresolved_assignees: plan.unresolved,
        })
    }

    /// Rewrites the editable fields, then replaces the assignee set. The
    /// replacement is atomic on its own but does not undo the field update.
    pub fn update(conn: &mut PgConnection, prepared: PreparedUpdate) -> Result<TodoWriteResult, AppError> {
        let todo_id = prepared.todo_id;
        TodoRepo::update(conn, todo_id, &prepared.changes)?
            .ok_or_else(|| AppError::not_found("todo"))?;
        tracing::info!(todo_id, "Todo updated");

        let mut plan = Self::resolve_assignees(conn, todo_id, prepared.assignees);
        if let Err(e) = AssignmentRepo::replace_for_todo(conn, todo_id, &plan.rows) {
            tracing::error!(todo_id, error = %e, "Error replacing assignments");
            plan.mark_unassigned();
        }

        let todo = Self::get_with_assignees(conn, todo_id)?;
        Ok(TodoWriteResult {
            todo,
            unresolved_assignees: plan.unresolved,
        })
    }

    /// One batched lookup for all emails. A failed lookup leaves every email unresolved.
    fn resolve_assignees(conn: &mut PgConnection, todo_id: i64, emails: Vec<String>) -> AssignmentPlan {
        let (well_formed, malformed) = partition_by_format(emails);

        let lookup = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            PublicUserRepo::find_ids_by_emails(conn, &well_formed)
        });
        let directory = match lookup {
            Ok(directory) => directory,
            Err(e) => {
                tracing::error!(todo_id, error = %e, "Error fetching users by email");
                HashMap::new()
            }
        };

        let mut plan = plan_assignments(todo_id, &well_formed, &directory);
        plan.unresolved.extend(malformed);
        for email in &plan.unresolved {
            tracing::warn!(todo_id, email = %email, "Assignee email did not resolve to a user");
        }
        plan
    }
}
