use std::collections::HashMap;

use diesel::prelude::*;
use uuid::Uuid;

use crate::db::models::user::{NewPublicUser, PublicUser};

pub struct PublicUserRepo;

impl PublicUserRepo {
    pub fn list_all(conn: &mut PgConnection) -> Result<Vec<PublicUser>, diesel::result::Error> {
        use crate::schema::public_users::dsl::*;
        public_users
            .order(email.asc())
            .select(PublicUser::as_select())
            .load::<PublicUser>(conn)
    }

    /// Resolves a set of emails to user ids in one round trip.
    /// Emails without a matching row are simply absent from the map.
    pub fn find_ids_by_emails(
        conn: &mut PgConnection,
        emails: &[String],
    ) -> Result<HashMap<String, Uuid>, diesel::result::Error> {
        use crate::schema::public_users::dsl::*;
        if emails.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = public_users
            .filter(email.eq_any(emails))
            .select((email, id))
            .load::<(String, Uuid)>(conn)?;

        Ok(rows.into_iter().collect())
    }

    /// Returns the number of rows actually inserted; existing emails are left alone.
    pub fn insert_many(
        conn: &mut PgConnection,
        new_users: &[NewPublicUser],
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::public_users::dsl::*;
        if new_users.is_empty() {
            return Ok(0);
        }

        diesel::insert_into(public_users)
            .values(new_users)
            .on_conflict(email)
            .do_nothing()
            .execute(conn)
    }
}
