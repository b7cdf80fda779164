use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::models::user::{NewPublicUser, PublicUser},
    db::repositories::PublicUserRepo,
    error::AppError,
    validation::{
        rules::is_valid_email,
        todo::normalize_assignees,
    },
};

pub struct UsersService;

impl UsersService {
    pub fn directory(conn: &mut PgConnection) -> Result<Vec<PublicUser>, AppError> {
        PublicUserRepo::list_all(conn).map_err(AppError::from)
    }

    /// Adds directory entries for the given emails, skipping ones already present.
    pub fn add_emails(conn: &mut PgConnection, emails: &[String]) -> Result<usize, AppError> {
        let emails = normalize_assignees(emails);
        if let Some(bad) = emails.iter().find(|e| !is_valid_email(e)) {
            return Err(AppError::validation(format!("Invalid email address: {}", bad)));
        }

        let new_users: Vec<NewPublicUser> = emails
            .into_iter()
            .map(|email| NewPublicUser {
                id: Uuid::new_v4(),
                email,
            })
            .collect();

        PublicUserRepo::insert_many(conn, &new_users).map_err(AppError::from)
    }
}
