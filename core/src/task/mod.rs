use chrono::{DateTime, Utc};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single to-do item as stored by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Task {
    pub id: u32,
    pub title: String,
    /// Optional free-form text; `None` is distinct from an empty string.
    pub description: Option<String>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Whether the task still needs doing.
    pub fn is_pending(&self) -> bool {
        !self.is_completed
    }
}

/// Input for creating a task. The server assigns `id` and both timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NewTask {
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_completed: bool,
}

impl NewTask {
    /// Checks the draft before it is handed to the store.
    pub fn validate(&self) -> Result<(), TaskError> {
        validate_title(&self.title)
    }
}

/// One field of a partial update: either keep the stored value or replace it.
///
/// `Option<Option<T>>` cannot express this over the wire: serde collapses
/// `None` and `Some(None)` to the same `null`, so "clear the description"
/// and "leave it alone" would become indistinguishable after a round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldUpdate<T> {
    /// Keep whatever the store currently holds.
    #[default]
    Unchanged,
    /// Replace the stored value.
    Set(T),
}

impl<T> FieldUpdate<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, FieldUpdate::Unchanged)
    }
}

/// A partial update for one task. Fields left `Unchanged` keep their stored
/// value; `description: Set(None)` clears the column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaskPatch {
    pub title: FieldUpdate<String>,
    pub description: FieldUpdate<Option<String>>,
    pub is_completed: FieldUpdate<bool>,
}

impl TaskPatch {
    /// Patch that only flips the completion flag, used by the toggle control.
    pub fn completion(is_completed: bool) -> Self {
        TaskPatch {
            is_completed: FieldUpdate::Set(is_completed),
            ..Default::default()
        }
    }

    /// Checks the patch before it is handed to the store.
    pub fn validate(&self) -> Result<(), TaskError> {
        if let FieldUpdate::Set(title) = &self.title {
            validate_title(title)?;
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TaskError {
    #[error("Task title must not be empty")]
    EmptyTitle,
}

fn validate_title(title: &str) -> Result<(), TaskError> {
    if title.trim().is_empty() {
        return Err(TaskError::EmptyTitle);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_defaults_to_pending_without_description() {
        let draft = NewTask {
            title: "Water the plants".to_string(),
            ..Default::default()
        };

        assert!(!draft.is_completed);
        assert_eq!(draft.description, None);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn empty_title_is_rejected() {
        let draft = NewTask {
            title: String::new(),
            ..Default::default()
        };

        assert_eq!(draft.validate(), Err(TaskError::EmptyTitle));
    }

    #[test]
    fn whitespace_only_title_is_rejected() {
        let draft = NewTask {
            title: "   ".to_string(),
            ..Default::default()
        };

        assert_eq!(draft.validate(), Err(TaskError::EmptyTitle));
    }

    #[test]
    fn default_patch_leaves_every_field_unchanged() {
        let patch = TaskPatch::default();

        assert!(patch.title.is_unchanged());
        assert!(patch.description.is_unchanged());
        assert!(patch.is_completed.is_unchanged());
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn completion_patch_only_touches_the_flag() {
        let patch = TaskPatch::completion(true);

        assert!(patch.title.is_unchanged());
        assert!(patch.description.is_unchanged());
        assert_eq!(patch.is_completed, FieldUpdate::Set(true));
    }

    #[test]
    fn patch_with_empty_title_is_rejected() {
        let patch = TaskPatch {
            title: FieldUpdate::Set("  ".to_string()),
            ..Default::default()
        };

        assert_eq!(patch.validate(), Err(TaskError::EmptyTitle));
    }

    #[test]
    fn clearing_the_description_is_a_set_not_an_omission() {
        let patch = TaskPatch {
            description: FieldUpdate::Set(None),
            ..Default::default()
        };

        assert!(!patch.description.is_unchanged());
    }

    #[test]
    fn pending_follows_the_completion_flag() {
        let now = Utc::now();
        let task = Task {
            id: 1,
            title: "Buy milk".to_string(),
            description: None,
            is_completed: false,
            created_at: now,
            updated_at: now,
        };

        assert!(task.is_pending());
        assert!(!Task {
            is_completed: true,
            ..task
        }
        .is_pending());
    }
}
