use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Records that live in an ordered list and are addressed by id
pub trait WithId {
    fn id(&self) -> &str;
}

/// Generate a unique id such as `todo-6f1c...`
pub fn generate_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

/// A single todo line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub is_completed: bool,
    /// Completed as a side effect of completing a parent, not by the user
    #[serde(default)]
    pub auto_completed: bool,
    /// Indentation level
    #[serde(default)]
    pub ident: u32,
}

impl Todo {
    /// Create an empty-state todo, indented like `after` when given
    pub fn new(after: Option<&Todo>, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("todo"),
            text: text.into(),
            is_completed: false,
            auto_completed: false,
            ident: after.map(|t| t.ident).unwrap_or(0),
        }
    }

    /// Flip completion; a manual toggle always clears `auto_completed`
    pub fn toggle(&mut self) {
        self.is_completed = !self.is_completed;
        self.auto_completed = false;
    }
}

impl WithId for Todo {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A saved link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub uri: String,
}

impl Bookmark {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            id: generate_id("bookmark"),
            uri: uri.into(),
        }
    }
}

impl WithId for Bookmark {
    fn id(&self) -> &str {
        &self.id
    }
}
