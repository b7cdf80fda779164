use diesel::prelude::*;
use serde::{Deserialize, Serialize};

// Discussion models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schema::discussions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Discussion {
    pub id: i64,
    pub todo_id: i64,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::discussions)]
pub struct NewDiscussion {
    pub todo_id: i64,
    pub content: String,
}
