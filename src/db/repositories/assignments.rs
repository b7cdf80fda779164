use diesel::prelude::*;

use crate::db::models::assignment::Assignment;

pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Inserts all rows in a single statement. Pairs that already exist are skipped.
    pub fn insert_batch(
        conn: &mut PgConnection,
        rows: &[Assignment],
    ) -> Result<usize, diesel::result::Error> {
        if rows.is_empty() {
            return Ok(0);
        }

        diesel::insert_into(crate::schema::assignments::table)
            .values(rows)
            .on_conflict_do_nothing()
            .execute(conn)
    }

    /// Replaces the assignee set of one todo inside a transaction.
    pub fn replace_for_todo(
        conn: &mut PgConnection,
        target_todo_id: i64,
        rows: &[Assignment],
    ) -> Result<usize, diesel::result::Error> {
        conn.transaction(|conn| {
            use crate::schema::assignments::dsl::*;
            diesel::delete(assignments.filter(todo_id.eq(target_todo_id))).execute(conn)?;
            Self::insert_batch(conn, rows)
        })
    }

    /// (todo id, assignee email) pairs for every assignment, ordered by todo then email.
    pub fn list_assignee_emails(
        conn: &mut PgConnection,
    ) -> Result<Vec<(i64, String)>, diesel::result::Error> {
        use crate::schema::{assignments, public_users};
        assignments::table
            .inner_join(public_users::table)
            .select((assignments::todo_id, public_users::email))
            .order((assignments::todo_id.asc(), public_users::email.asc()))
            .load::<(i64, String)>(conn)
    }

    pub fn list_assignee_emails_for_todo(
        conn: &mut PgConnection,
        target_todo_id: i64,
    ) -> Result<Vec<String>, diesel::result::Error> {
        use crate::schema::{assignments, public_users};
        assignments::table
            .inner_join(public_users::table)
            .filter(assignments::todo_id.eq(target_todo_id))
            .select(public_users::email)
            .order(public_users::email.asc())
            .load::<String>(conn)
    }
}
