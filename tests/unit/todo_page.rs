use chrono::Utc;
use team_todo::db::enums::TodoStatus;
use team_todo::db::models::{Discussion, PublicUser, Todo, TodoWithAssignees};
use team_todo::ui::{PageQuery, TodoPage, View};
use uuid::Uuid;

fn todo(id: i64, content: &str, assignees: &[&str]) -> TodoWithAssignees {
    TodoWithAssignees {
        todo: Todo {
            id,
            content: content.to_string(),
            description: None,
            due_date: None,
            follow_up_date: None,
            status: TodoStatus::Pending,
            progress_notes: None,
        },
        assignees: assignees.iter().map(|s| s.to_string()).collect(),
    }
}

fn user(email: &str) -> PublicUser {
    PublicUser {
        id: Uuid::new_v4(),
        email: email.to_string(),
    }
}

fn discussion(id: i64, todo_id: i64, content: &str) -> Discussion {
    Discussion {
        id,
        todo_id,
        content: content.to_string(),
        created_at: Utc::now(),
    }
}

fn page() -> TodoPage {
    TodoPage::new(
        vec![
            todo(1, "Write report", &["alice@example.com"]),
            todo(2, "Review budget", &["bob@example.com"]),
            todo(3, "Plan offsite", &["alice@example.com", "bob@example.com"]),
        ],
        vec![user("alice@example.com"), user("bob@example.com")],
    )
}

#[test]
fn assignee_filter_narrows_list() {
    let mut page = page();
    assert_eq!(page.filtered_todos().len(), 3);

    page.set_assignee_filter(Some("bob@example.com".to_string()));
    let ids: Vec<i64> = page.filtered_todos().iter().map(|t| t.todo.id).collect();
    assert_eq!(ids, vec![2, 3]);

    page.set_assignee_filter(Some("  ".to_string()));
    assert_eq!(page.filtered_todos().len(), 3);
}

fn chip_selection(page: &TodoPage) -> Vec<String> {
    let context = page.context().unwrap().into_json();
    serde_json::from_value(context["chip"]["selected"].clone()).unwrap()
}

#[test]
fn selecting_todo_loads_its_assignees() {
    let mut page = page();
    assert!(page.select_todo(3));
    assert_eq!(page.view(), View::Edit(3));
    assert_eq!(chip_selection(&page), vec!["alice@example.com", "bob@example.com"]);

    assert!(!page.select_todo(99));
    assert_eq!(page.view(), View::Edit(3));

    page.open_create();
    assert_eq!(page.view(), View::Create);
    assert!(page.selected_todo().is_none());
    assert!(chip_selection(&page).is_empty());
}

#[test]
fn discussions_belong_to_selected_todo() {
    let mut page = page();
    page.set_discussions(vec![discussion(1, 1, "ignored while listing")]);
    assert!(page.discussions().is_empty());

    page.select_todo(1);
    page.set_discussions(vec![discussion(1, 1, "first"), discussion(2, 2, "other todo")]);
    assert_eq!(page.discussions().len(), 1);
    assert_eq!(page.discussions()[0].content, "first");

    page.select_todo(2);
    assert!(page.discussions().is_empty());
}

#[test]
fn query_string_drives_view() {
    let mut page = page();
    page.apply_query(&PageQuery {
        todo: Some(2),
        create: Some(true),
        assignee: Some("bob@example.com".to_string()),
        filter: Some(true),
    });
    assert_eq!(page.view(), View::Edit(2));
    assert_eq!(page.filtered_todos().len(), 2);

    let mut page = self::page();
    page.apply_query(&PageQuery {
        todo: Some(42),
        create: Some(true),
        ..PageQuery::default()
    });
    assert_eq!(page.view(), View::Create);
}
