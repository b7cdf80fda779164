use axum::{
    body::Body,
    extract::FromRequest,
    http::{Request, header},
};
use team_todo::routes::private::{DiscussionForm, TodoForm};
use team_todo::validation::JsonOrForm;
use tokio_test::{assert_err, assert_ok};

fn request(content_type: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn form_collects_repeated_assignees() {
    let req = request(
        "application/x-www-form-urlencoded",
        "content=Ship&assignees=a%40x.com&assignees=b%40x.com&due_date=&status=Completed",
    );
    let JsonOrForm(form) = assert_ok!(JsonOrForm::<TodoForm>::from_request(req, &()).await);

    assert_eq!(form.content, "Ship");
    assert_eq!(form.assignees, vec!["a@x.com", "b@x.com"]);
    assert_eq!(form.due_date, None);
    assert_eq!(form.status.map(|s| s.to_string()), Some("Completed".to_string()));
}

#[tokio::test]
async fn json_body_is_accepted() {
    let req = request(
        "application/json",
        r#"{"content":"Ship","assignees":["a@x.com"],"due_date":"2024-07-01","status":"In Progress"}"#,
    );
    let JsonOrForm(form) = assert_ok!(JsonOrForm::<TodoForm>::from_request(req, &()).await);

    assert_eq!(form.assignees, vec!["a@x.com"]);
    assert_eq!(form.due_date.map(|d| d.to_string()), Some("2024-07-01".to_string()));
}

#[tokio::test]
async fn discussion_id_from_form_text() {
    let req = request("application/x-www-form-urlencoded", "todo_id=12&content=hi");
    let JsonOrForm(form) = assert_ok!(JsonOrForm::<DiscussionForm>::from_request(req, &()).await);
    assert_eq!(form.todo_id, Some(12));
}

#[tokio::test]
async fn bad_status_is_rejected() {
    let req = request("application/x-www-form-urlencoded", "content=Ship&status=Done");
    assert_err!(JsonOrForm::<TodoForm>::from_request(req, &()).await);
}
