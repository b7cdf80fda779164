use crate::error::AppError;
use crate::validation::rules::{is_blank, is_valid_email};

pub const MAX_TEXT_LEN: u64 = 10000;

/// Trims entries, drops blanks and duplicates, keeps first-seen order.
pub fn normalize_assignees(raw: &[String]) -> Vec<String> {
    let mut emails: Vec<String> = Vec::with_capacity(raw.len());
    for entry in raw {
        let email = entry.trim();
        if email.is_empty() || emails.iter().any(|e| e == email) {
            continue;
        }
        emails.push(email.to_string());
    }
    emails
}

/// Splits normalized emails into (well-formed, malformed).
pub fn partition_by_format(emails: Vec<String>) -> (Vec<String>, Vec<String>) {
    emails.into_iter().partition(|e| is_valid_email(e))
}

pub fn validate_create_todo(content: &str, assignees: &[String]) -> Result<(), AppError> {
    if is_blank(content) {
        return Err(AppError::validation("Todo content is required"));
    }

    if assignees.is_empty() {
        return Err(AppError::validation("At least one assignee is required"));
    }

    Ok(())
}

pub fn validate_update_todo(todo_id: i64, content: &str) -> Result<(), AppError> {
    if todo_id <= 0 {
        return Err(AppError::validation("Invalid todo id"));
    }

    if is_blank(content) {
        return Err(AppError::validation("Todo content cannot be empty"));
    }

    Ok(())
}
