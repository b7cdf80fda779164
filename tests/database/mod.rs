// Database-backed service tests; run with TEST_DATABASE_URL set and `--ignored`.
// Every test works inside a test transaction that is never committed.

use diesel::{Connection, PgConnection, connection::SimpleConnection};
use std::collections::HashSet;
use team_todo::{
    db::enums::TodoStatus,
    db::repositories::TodoRepo,
    error::AppError,
    routes::private::{DiscussionForm, TodoForm},
    services::{DiscussionsService, TodosService, UsersService},
};

const SCHEMA: &str = include_str!("../../migrations/2024-06-01-000000_create_todos/up.sql");

fn connection() -> PgConnection {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
    let mut conn = PgConnection::establish(&url).expect("Failed to connect to test database");
    conn.begin_test_transaction().unwrap();
    conn.batch_execute(SCHEMA).unwrap();
    UsersService::add_emails(
        &mut conn,
        &["alice@example.com".to_string(), "bob@example.com".to_string()],
    )
    .unwrap();
    conn
}

fn todo_form(content: &str, assignees: &[&str]) -> TodoForm {
    TodoForm {
        content: content.to_string(),
        assignees: assignees.iter().map(|s| s.to_string()).collect(),
        ..TodoForm::default()
    }
}

fn as_set(emails: &[String]) -> HashSet<&str> {
    emails.iter().map(String::as_str).collect()
}

#[test]
#[ignore = "requires database"]
fn create_skips_unknown_assignee() {
    let mut conn = connection();
    let prepared = TodosService::prepare_create(&todo_form(
        "Write report",
        &["alice@example.com", "ghost@example.com"],
    ))
    .unwrap();

    let result = TodosService::create(&mut conn, prepared).unwrap();

    assert_eq!(result.todo.todo.content, "Write report");
    assert_eq!(result.todo.todo.status, TodoStatus::Pending);
    assert_eq!(result.todo.assignees, vec!["alice@example.com"]);
    assert_eq!(result.unresolved_assignees, vec!["ghost@example.com"]);
}

#[test]
#[ignore = "requires database"]
fn update_replaces_assignee_set() {
    let mut conn = connection();
    let prepared =
        TodosService::prepare_create(&todo_form("Review budget", &["alice@example.com"])).unwrap();
    let created = TodosService::create(&mut conn, prepared).unwrap();
    let todo_id = created.todo.todo.id;

    let mut form = todo_form("Review budget v2", &["bob@example.com", "alice@example.com"]);
    form.status = Some(TodoStatus::InProgress);
    let prepared = TodosService::prepare_update(todo_id, &form).unwrap();
    let updated = TodosService::update(&mut conn, prepared).unwrap();

    assert_eq!(updated.todo.todo.content, "Review budget v2");
    assert_eq!(updated.todo.todo.status, TodoStatus::InProgress);
    assert_eq!(
        as_set(&updated.todo.assignees),
        HashSet::from(["alice@example.com", "bob@example.com"])
    );

    // clearing the set leaves the todo unassigned
    let prepared = TodosService::prepare_update(todo_id, &todo_form("Review budget v2", &[])).unwrap();
    let cleared = TodosService::update(&mut conn, prepared).unwrap();
    assert!(cleared.todo.assignees.is_empty());
}

#[test]
#[ignore = "requires database"]
fn update_missing_todo_is_not_found() {
    let mut conn = connection();
    let prepared = TodosService::prepare_update(i64::MAX, &todo_form("Nothing", &[])).unwrap();
    let err = TodosService::update(&mut conn, prepared).unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[test]
#[ignore = "requires database"]
fn discussion_appends_one_row() {
    let mut conn = connection();
    let prepared =
        TodosService::prepare_create(&todo_form("Plan offsite", &["bob@example.com"])).unwrap();
    let todo_id = TodosService::create(&mut conn, prepared).unwrap().todo.todo.id;

    let before = DiscussionsService::list_by_todo(&mut conn, todo_id).unwrap().len();
    let new_discussion = DiscussionsService::prepare(&DiscussionForm {
        todo_id: Some(todo_id),
        content: "Venue booked".to_string(),
    })
    .unwrap();
    let thread = DiscussionsService::create(&mut conn, new_discussion).unwrap();

    assert_eq!(thread.len(), before + 1);
    assert_eq!(thread.last().unwrap().content, "Venue booked");

    let snapshot = TodosService::snapshot(&mut conn).unwrap();
    assert!(snapshot.todos.iter().any(|t| t.todo.id == todo_id));
    assert!(snapshot.discussions.iter().any(|d| d.todo_id == todo_id));
}

#[test]
#[ignore = "requires database"]
fn discussion_on_missing_todo_is_rejected() {
    let mut conn = connection();
    let new_discussion = DiscussionsService::prepare(&DiscussionForm {
        todo_id: Some(i64::MAX),
        content: "Anyone?".to_string(),
    })
    .unwrap();
    assert!(DiscussionsService::create(&mut conn, new_discussion).is_err());
}

#[test]
#[ignore = "requires database"]
fn user_directory_skips_existing_emails() {
    let mut conn = connection();
    let inserted = UsersService::add_emails(
        &mut conn,
        &["alice@example.com".to_string(), "carol@example.com".to_string()],
    )
    .unwrap();
    assert_eq!(inserted, 1);

    let emails: Vec<String> = UsersService::directory(&mut conn)
        .unwrap()
        .into_iter()
        .map(|u| u.email)
        .collect();
    assert!(emails.contains(&"carol@example.com".to_string()));
    assert!(UsersService::add_emails(&mut conn, &["not-an-email".to_string()]).is_err());
}

#[test]
#[ignore = "requires database"]
fn create_keeps_todo_when_assignment_insert_fails() {
    let mut conn = connection();
    conn.batch_execute(
        "CREATE FUNCTION reject_assignment() RETURNS trigger AS $$
         BEGIN RAISE EXCEPTION 'assignments are read-only'; END;
         $$ LANGUAGE plpgsql;
         CREATE TRIGGER reject_assignment BEFORE INSERT ON assignments
         FOR EACH ROW EXECUTE FUNCTION reject_assignment();",
    )
    .unwrap();

    let prepared = TodosService::prepare_create(&todo_form(
        "Write report",
        &["alice@example.com", "ghost@example.com"],
    ))
    .unwrap();
    let result = TodosService::create(&mut conn, prepared).unwrap();

    assert!(result.todo.assignees.is_empty());
    assert_eq!(
        result.unresolved_assignees,
        vec!["alice@example.com", "ghost@example.com"]
    );
    let stored = TodoRepo::find_by_id(&mut conn, result.todo.todo.id).unwrap();
    assert_eq!(stored.map(|t| t.content), Some("Write report".to_string()));
}
