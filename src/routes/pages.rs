use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::AppState;
use crate::error::AppResult;
use crate::services::{DiscussionsService, TodosService, UsersService};
use crate::ui::{PageQuery, TodoPage, View};

// 渲染 todo 页面：列表 + 编辑/创建表单
pub async fn todo_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Response {
    match render_todo_page(&state, &query) {
        Ok(html) => Html(html).into_response(),
        Err(err) => err.into_response(),
    }
}

fn render_todo_page(state: &AppState, query: &PageQuery) -> AppResult<String> {
    let mut conn = state.db.get()?;

    let todos = TodosService::list_with_assignees(&mut conn)?;
    let users = UsersService::directory(&mut conn)?;

    let mut page = TodoPage::new(todos, users);
    page.apply_query(query);

    if let View::Edit(todo_id) = page.view() {
        let discussions = DiscussionsService::list_by_todo(&mut conn, todo_id)?;
        page.set_discussions(discussions);
    }

    state.templates.render("todo/page.html", &page.context()?)
}
