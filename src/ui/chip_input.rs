//! Multi-select assignee picker backed by the user directory.
//!
//! The directory is loaded once when the component is built. Every directory
//! email is rendered as a selectable chip; narrowing the list while typing is
//! left to the browser's datalist and never goes back to the database.

use serde::Serialize;

use crate::db::models::user::PublicUser;

type ChangeCallback = Box<dyn FnMut(&[String]) + Send>;

pub struct ChipInput {
    options: Vec<String>,
    value: Vec<String>,
    on_change: Option<ChangeCallback>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChipOption {
    pub email: String,
    pub selected: bool,
}

/// What the template needs to draw the control.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChipInputView {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub selected: Vec<String>,
    pub options: Vec<ChipOption>,
    pub suggestions: Vec<String>,
}

impl ChipInput {
    pub fn new(directory: &[PublicUser]) -> Self {
        Self::from_emails(directory.iter().map(|u| u.email.clone()).collect())
    }

    pub fn from_emails(options: Vec<String>) -> Self {
        Self {
            options,
            value: Vec::new(),
            on_change: None,
        }
    }

    /// Registers the callback fired after every change that alters the selection.
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&[String]) + Send + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Directory emails not yet selected.
    fn suggestions(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|option| !self.value.contains(option))
            .map(String::as_str)
            .collect()
    }

    /// Replaces the selection wholesale, as when a different todo is loaded.
    /// Only directory emails become chips; blanks and repeats are dropped and
    /// order is preserved. The callback fires once, and only if the selection changed.
    pub fn set_value(&mut self, value: &[String]) {
        let previous = std::mem::take(&mut self.value);
        for email in value {
            self.push(email);
        }

        if previous != self.value {
            self.notify();
        }
    }

    pub fn view(&self, name: &str) -> ChipInputView {
        ChipInputView {
            name: name.to_string(),
            label: "Assignees".to_string(),
            placeholder: "Enter assignee emails".to_string(),
            selected: self.value.clone(),
            options: self
                .options
                .iter()
                .map(|email| ChipOption {
                    email: email.clone(),
                    selected: self.value.contains(email),
                })
                .collect(),
            suggestions: self.suggestions().into_iter().map(str::to_string).collect(),
        }
    }

    fn push(&mut self, email: &str) -> bool {
        let email = email.trim();
        if !self.options.iter().any(|o| o == email) || self.value.iter().any(|v| v == email) {
            return false;
        }
        self.value.push(email.to_string());
        true
    }

    fn notify(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.value);
        }
    }
}
