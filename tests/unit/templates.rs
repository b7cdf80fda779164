use team_todo::db::enums::TodoStatus;
use team_todo::db::models::{PublicUser, Todo, TodoWithAssignees};
use team_todo::ui::{PageQuery, Templates, TodoPage};
use uuid::Uuid;

fn render(todos: Vec<TodoWithAssignees>, query: PageQuery) -> String {
    render_with_users(todos, query, &["alice@example.com"])
}

fn render_with_users(todos: Vec<TodoWithAssignees>, query: PageQuery, emails: &[&str]) -> String {
    let users = emails
        .iter()
        .map(|email| PublicUser {
            id: Uuid::new_v4(),
            email: email.to_string(),
        })
        .collect();
    let mut page = TodoPage::new(todos, users);
    page.apply_query(&query);

    let templates = Templates::new().unwrap();
    templates.render("todo/page.html", &page.context().unwrap()).unwrap()
}

fn todo(id: i64, content: &str) -> TodoWithAssignees {
    TodoWithAssignees {
        todo: Todo {
            id,
            content: content.to_string(),
            description: Some("quarterly".to_string()),
            due_date: None,
            follow_up_date: None,
            status: TodoStatus::InProgress,
            progress_notes: None,
        },
        assignees: vec!["alice@example.com".to_string()],
    }
}

#[test]
fn empty_list_renders_placeholder() {
    let html = render(Vec::new(), PageQuery::default());
    assert!(html.contains("Todo List"));
    assert!(html.contains("No todos yet."));
    assert!(html.contains("Create New Todo"));
}

#[test]
fn list_escapes_content_and_shows_status() {
    let html = render(vec![todo(1, "<script>alert(1)</script>")], PageQuery::default());
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("In Progress"));
    assert!(html.contains("Due: N/A"));
}

#[test]
fn edit_view_renders_forms_with_selection() {
    let html = render(
        vec![todo(7, "Write report")],
        PageQuery {
            todo: Some(7),
            ..PageQuery::default()
        },
    );
    assert!(html.contains("Edit Todo"));
    assert!(html.contains(r#"action="/private/todo/update/7""#));
    assert!(html.contains(r#"action="/private/todo/discuss""#));
    assert!(html.contains(r#"name="todo_id" value="7""#));
    assert!(html.contains(r#"name="assignees" value="alice@example.com" checked"#));
}

#[test]
fn create_view_posts_to_add() {
    let html = render(
        Vec::new(),
        PageQuery {
            create: Some(true),
            ..PageQuery::default()
        },
    );
    assert!(html.contains(r#"action="/private/todo/add""#));
    assert!(html.contains("Enter assignee emails"));
}

#[test]
fn create_view_offers_every_directory_user() {
    let html = render_with_users(
        Vec::new(),
        PageQuery {
            create: Some(true),
            ..PageQuery::default()
        },
        &["a@x.com", "b@x.com"],
    );

    let checkboxes = html.matches(r#"type="checkbox" name="assignees""#).count();
    assert_eq!(checkboxes, 2);
    assert!(html.contains(r#"value="a@x.com">"#));
    assert!(html.contains(r#"value="b@x.com">"#));
    assert!(!html.contains("checked"));
}

#[test]
fn edit_view_checks_current_assignees_only() {
    let html = render_with_users(
        vec![todo(7, "Write report")],
        PageQuery {
            todo: Some(7),
            ..PageQuery::default()
        },
        &["alice@example.com", "bob@example.com"],
    );

    assert_eq!(html.matches(r#"type="checkbox" name="assignees""#).count(), 2);
    assert_eq!(html.matches(" checked>").count(), 1);
    assert!(html.contains(r#"value="bob@example.com">"#));
}
