use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Assignment models (many-to-many relationship between todos and users)
#[derive(Queryable, Selectable, Insertable, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[diesel(table_name = crate::schema::assignments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Assignment {
    pub todo_id: i64,
    pub user_id: Uuid,
}
