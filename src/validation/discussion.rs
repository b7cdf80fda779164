use crate::error::AppError;
use crate::validation::rules::is_blank;

pub fn validate_create_discussion(todo_id: Option<i64>, content: &str) -> Result<i64, AppError> {
    let todo_id = match todo_id {
        Some(id) if id > 0 => id,
        _ => return Err(AppError::validation("Todo id is required")),
    };

    if is_blank(content) {
        return Err(AppError::validation("Discussion content is required"));
    }

    if content.chars().count() > 10000 {
        return Err(AppError::validation(
            "Discussion content is too long (max 10000 characters)",
        ));
    }

    Ok(todo_id)
}
