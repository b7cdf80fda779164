use diesel::prelude::*;

use crate::db::models::discussion::{Discussion, NewDiscussion};

pub struct DiscussionRepo;

impl DiscussionRepo {
    pub fn list_all(conn: &mut PgConnection) -> Result<Vec<Discussion>, diesel::result::Error> {
        use crate::schema::discussions::dsl::*;
        discussions
            .order((created_at.asc(), id.asc()))
            .select(Discussion::as_select())
            .load::<Discussion>(conn)
    }

    pub fn list_by_todo(
        conn: &mut PgConnection,
        target_todo_id: i64,
    ) -> Result<Vec<Discussion>, diesel::result::Error> {
        use crate::schema::discussions::dsl::*;
        discussions
            .filter(todo_id.eq(target_todo_id))
            .order((created_at.asc(), id.asc()))
            .select(Discussion::as_select())
            .load::<Discussion>(conn)
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_discussion: &NewDiscussion,
    ) -> Result<Discussion, diesel::result::Error> {
        diesel::insert_into(crate::schema::discussions::table)
            .values(new_discussion)
            .returning(Discussion::as_returning())
            .get_result(conn)
    }
}
