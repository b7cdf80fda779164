use diesel::prelude::*;

use crate::{
    db::models::discussion::{Discussion, NewDiscussion},
    db::repositories::{DiscussionRepo, TodoRepo},
    error::AppError,
    routes::private::DiscussionForm,
    validation::discussion::validate_create_discussion,
};

pub struct DiscussionsService;

impl DiscussionsService {
    pub fn list_by_todo(conn: &mut PgConnection, todo_id: i64) -> Result<Vec<Discussion>, AppError> {
        DiscussionRepo::list_by_todo(conn, todo_id).map_err(AppError::from)
    }

    pub fn prepare(form: &DiscussionForm) -> Result<NewDiscussion, AppError> {
        let todo_id = validate_create_discussion(form.todo_id, &form.content)?;
        Ok(NewDiscussion {
            todo_id,
            content: form.content.clone(),
        })
    }

    /// Appends one discussion and returns the todo's thread as it now stands.
    pub fn create(
        conn: &mut PgConnection,
        new_discussion: NewDiscussion,
    ) -> Result<Vec<Discussion>, AppError> {
        let todo_id = new_discussion.todo_id;
        if !TodoRepo::exists(conn, todo_id)? {
            return Err(AppError::not_found("todo"));
        }

        let discussion = DiscussionRepo::insert(conn, &new_discussion)?;
        tracing::info!(todo_id, discussion_id = discussion.id, "Discussion added");

        Self::list_by_todo(conn, todo_id)
    }
}
