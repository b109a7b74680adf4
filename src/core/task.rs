use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Stable identity: list position shifts on delete, the id never does.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    /// Last-modified instant; seed documents carry it as `timestamp`.
    #[serde(rename = "timestamp", default = "now")]
    pub updated: NaiveDateTime,
}

impl Task {
    pub fn new(draft: TaskDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            completed: false,
            updated: now(),
        }
    }

    /// Timestamp as shown in the expanded row detail.
    pub fn display_updated(&self) -> String {
        self.updated.format("%Y-%m-%d %H:%M").to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Title and description cannot be empty")]
    Empty,
}

/// A validated title/description pair, the only way task text enters the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
}

impl TaskDraft {
    /// Trims both fields and rejects the pair if either is left empty.
    pub fn parse(title: &str, description: &str) -> Result<Self, DraftError> {
        let title = title.trim();
        let description = description.trim();
        if title.is_empty() || description.is_empty() {
            return Err(DraftError::Empty);
        }
        Ok(Self {
            title: title.to_string(),
            description: description.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_whitespace() {
        let draft = TaskDraft::parse("  Buy milk  ", "\tTwo liters\n").unwrap();
        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.description, "Two liters");
    }

    #[test]
    fn parse_rejects_empty_title() {
        assert_eq!(TaskDraft::parse("", "x"), Err(DraftError::Empty));
        assert_eq!(TaskDraft::parse("   ", "x"), Err(DraftError::Empty));
    }

    #[test]
    fn parse_rejects_empty_description() {
        assert_eq!(TaskDraft::parse("x", ""), Err(DraftError::Empty));
        assert_eq!(TaskDraft::parse("x", " \n"), Err(DraftError::Empty));
    }

    #[test]
    fn draft_error_message() {
        assert_eq!(
            DraftError::Empty.to_string(),
            "Title and description cannot be empty"
        );
    }

    #[test]
    fn new_task_starts_incomplete() {
        let task = Task::new(TaskDraft::parse("Buy milk", "Two liters").unwrap());
        assert!(!task.completed);
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "Two liters");
    }
}
