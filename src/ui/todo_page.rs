use serde::{Deserialize, Serialize};

use crate::db::enums::TodoStatus;
use crate::db::models::{Discussion, PublicUser, TodoWithAssignees};
use crate::error::AppResult;
use crate::routes::private::{ADD_TODO_PATH, DISCUSS_PATH, update_todo_path};
use crate::ui::chip_input::{ChipInput, ChipInputView};
use crate::utils::empty_string_as_none;

/// Which panel the page shows next to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Edit(i64),
    Create,
}

impl View {
    fn name(&self) -> &'static str {
        match self {
            View::List => "list",
            View::Edit(_) => "edit",
            View::Create => "create",
        }
    }
}

/// `/private/todo` query string: `?todo=<id>&create=true&assignee=<email>&filter=true`
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct PageQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub todo: Option<i64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub create: Option<bool>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub assignee: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub filter: Option<bool>,
}

/// State of the todo page for one render.
pub struct TodoPage {
    todos: Vec<TodoWithAssignees>,
    users: Vec<PublicUser>,
    discussions: Vec<Discussion>,
    chip: ChipInput,
    selected_assignee: Option<String>,
    filter_visible: bool,
    view: View,
}

#[derive(Serialize)]
struct PageContext<'a> {
    view: &'static str,
    todos: Vec<&'a TodoWithAssignees>,
    users: Vec<&'a str>,
    selected_assignee: Option<&'a str>,
    filter_visible: bool,
    selected: Option<&'a TodoWithAssignees>,
    discussions: &'a [Discussion],
    chip: ChipInputView,
    statuses: Vec<&'static str>,
    add_action: &'static str,
    update_action: Option<String>,
    discuss_action: &'static str,
}

impl TodoPage {
    pub fn new(todos: Vec<TodoWithAssignees>, users: Vec<PublicUser>) -> Self {
        let chip = ChipInput::new(&users).on_change(|assignees| {
            tracing::debug!(assignees = ?assignees, "Assignee selection changed");
        });
        Self {
            todos,
            users,
            discussions: Vec::new(),
            chip,
            selected_assignee: None,
            filter_visible: false,
            view: View::List,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Switches to the edit view. Unknown ids leave the page on the list.
    pub fn select_todo(&mut self, todo_id: i64) -> bool {
        let Some(todo) = self.todos.iter().find(|t| t.todo.id == todo_id) else {
            return false;
        };
        let assignees = todo.assignees.clone();

        self.view = View::Edit(todo_id);
        self.chip.set_value(&assignees);
        self.discussions.clear();
        true
    }

    pub fn open_create(&mut self) {
        self.view = View::Create;
        self.chip.set_value(&[]);
        self.discussions.clear();
    }

    pub fn toggle_filter(&mut self) {
        self.filter_visible = !self.filter_visible;
    }

    pub fn set_assignee_filter(&mut self, email: Option<String>) {
        self.selected_assignee = email.filter(|e| !e.trim().is_empty());
    }

    pub fn selected_todo(&self) -> Option<&TodoWithAssignees> {
        match self.view {
            View::Edit(id) => self.todos.iter().find(|t| t.todo.id == id),
            _ => None,
        }
    }

    pub fn discussions(&self) -> &[Discussion] {
        &self.discussions
    }

    /// Stores the selected todo's thread; discussions of other todos are dropped.
    pub fn set_discussions(&mut self, discussions: Vec<Discussion>) {
        if let View::Edit(id) = self.view {
            self.discussions = discussions.into_iter().filter(|d| d.todo_id == id).collect();
        }
    }

    /// The list as shown: every todo, or only those assigned to the filter email.
    pub fn filtered_todos(&self) -> Vec<&TodoWithAssignees> {
        match &self.selected_assignee {
            Some(email) => self.todos.iter().filter(|t| t.is_assigned_to(email)).collect(),
            None => self.todos.iter().collect(),
        }
    }

    /// Replays the query string as user actions. A selected todo wins over `create`.
    pub fn apply_query(&mut self, query: &PageQuery) {
        if query.filter.unwrap_or(false) != self.filter_visible {
            self.toggle_filter();
        }
        self.set_assignee_filter(query.assignee.clone());

        let selected = query.todo.map(|id| self.select_todo(id)).unwrap_or(false);
        if !selected && query.create.unwrap_or(false) {
            self.open_create();
        }
    }

    pub fn context(&self) -> AppResult<tera::Context> {
        let ctx = PageContext {
            view: self.view.name(),
            todos: self.filtered_todos(),
            users: self.users.iter().map(|u| u.email.as_str()).collect(),
            selected_assignee: self.selected_assignee.as_deref(),
            filter_visible: self.filter_visible,
            selected: self.selected_todo(),
            discussions: &self.discussions,
            chip: self.chip.view("assignees"),
            statuses: TodoStatus::ALL.iter().map(|s| s.as_str()).collect(),
            add_action: ADD_TODO_PATH,
            update_action: self.selected_todo().map(|t| update_todo_path(t.todo.id)),
            discuss_action: DISCUSS_PATH,
        };
        Ok(tera::Context::from_serialize(&ctx)?)
    }
}
