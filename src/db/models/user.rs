use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read-only projection of the user table: what the assignee picker needs.
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schema::public_users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::public_users)]
pub struct NewPublicUser {
    pub id: Uuid,
    pub email: String,
}
