use diesel::prelude::*;

use crate::db::models::todo::{NewTodo, Todo, TodoChanges};

pub struct TodoRepo;

impl TodoRepo {
    pub fn find_by_id(
        conn: &mut PgConnection,
        todo_id: i64,
    ) -> Result<Option<Todo>, diesel::result::Error> {
        use crate::schema::todos::dsl::*;
        todos
            .filter(id.eq(todo_id))
            .select(Todo::as_select())
            .first::<Todo>(conn)
            .optional()
    }

    pub fn list_all(conn: &mut PgConnection) -> Result<Vec<Todo>, diesel::result::Error> {
        use crate::schema::todos::dsl::*;
        todos.order(id.asc()).select(Todo::as_select()).load::<Todo>(conn)
    }

    pub fn insert(conn: &mut PgConnection, new_todo: &NewTodo) -> Result<Todo, diesel::result::Error> {
        diesel::insert_into(crate::schema::todos::table)
            .values(new_todo)
            .returning(Todo::as_returning())
            .get_result(conn)
    }

    /// Returns `None` when no row has the given id.
    pub fn update(
        conn: &mut PgConnection,
        todo_id: i64,
        changes: &TodoChanges,
    ) -> Result<Option<Todo>, diesel::result::Error> {
        use crate::schema::todos::dsl::*;
        diesel::update(todos.filter(id.eq(todo_id)))
            .set(changes)
            .returning(Todo::as_returning())
            .get_result(conn)
            .optional()
    }

    pub fn exists(conn: &mut PgConnection, todo_id: i64) -> Result<bool, diesel::result::Error> {
        use crate::schema::todos::dsl::*;
        diesel::select(diesel::dsl::exists(todos.filter(id.eq(todo_id)))).get_result(conn)
    }
}
