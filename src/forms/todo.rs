use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

pub const DEFAULT_SKIP: i64 = 0;
pub const DEFAULT_LIMIT: i64 = 100;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct TodoForm {
    #[validate(min_length = 1)]
    #[validate(pattern = r"\S")]
    pub title: String,
    pub description: Option<String>,
}

impl From<TodoForm> for models::Todo {
    fn from(form: TodoForm) -> Self {
        models::Todo {
            title: form.title,
            description: form.description,
            completed: false,
            ..Default::default()
        }
    }
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Serialize, Deserialize, Debug, Default, Validate)]
pub struct TodoUpdateForm {
    #[validate(min_length = 1)]
    #[validate(pattern = r"\S")]
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TodoUpdateForm {
    pub fn update(self, todo: &mut models::Todo) {
        if let Some(title) = self.title {
            todo.title = title;
        }

        if let Some(description) = self.description {
            todo.description = Some(description);
        }

        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BulkDeleteForm {
    pub ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct ListQuery {
    #[validate(minimum = 0)]
    pub skip: Option<i64>,
    #[validate(minimum = 0)]
    pub limit: Option<i64>,
}

impl ListQuery {
    pub fn skip(&self) -> i64 {
        self.skip.unwrap_or(DEFAULT_SKIP)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn deleted(count: u64) -> Self {
        Self::new(format!("{} todos deleted successfully", count))
    }
}
