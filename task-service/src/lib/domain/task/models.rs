use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::task::errors::TaskIdError;
use crate::task::errors::TaskTitleError;
use crate::user::models::UserId;

/// Task entity, always owned by exactly one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub user_id: UserId,
    pub title: TaskTitle,
    pub description: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Task unique identifier type, assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub i64);

impl FromStr for TaskId {
    type Err = TaskIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(TaskId)
            .map_err(|_| TaskIdError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Task title value type
///
/// Trimmed, non-empty and at most 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTitle(String);

impl TaskTitle {
    const MAX_LENGTH: usize = 255;

    /// # Errors
    /// * `Empty` - Title is empty or whitespace only
    /// * `TooLong` - Title longer than 255 characters
    pub fn new(title: String) -> Result<Self, TaskTitleError> {
        let title = title.trim();
        let length = title.chars().count();

        if length == 0 {
            Err(TaskTitleError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(TaskTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(title.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Task fields known before storage assigns an identifier.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub user_id: UserId,
    pub title: TaskTitle,
    pub description: String,
}

/// Command to create a task for the calling user
#[derive(Debug)]
pub struct CreateTaskCommand {
    pub title: TaskTitle,
    pub description: String,
}

/// Command to update a task.
///
/// Absent fields keep their stored value.
#[derive(Debug, Default)]
pub struct UpdateTaskCommand {
    pub title: Option<TaskTitle>,
    pub description: Option<String>,
    pub done: Option<bool>,
}

impl UpdateTaskCommand {
    /// Apply the provided fields onto an existing task.
    pub fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(done) = self.done {
            task.done = done;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_trimmed() {
        let title = TaskTitle::new("  buy milk ".to_string()).unwrap();
        assert_eq!(title.as_str(), "buy milk");
    }

    #[test]
    fn test_title_rejects_blank() {
        assert_eq!(TaskTitle::new("   ".to_string()), Err(TaskTitleError::Empty));
    }

    #[test]
    fn test_title_too_long() {
        assert_eq!(
            TaskTitle::new("x".repeat(256)),
            Err(TaskTitleError::TooLong {
                max: 255,
                actual: 256
            })
        );
    }

    #[test]
    fn test_task_id_parse() {
        assert_eq!("17".parse::<TaskId>(), Ok(TaskId(17)));
        assert!("abc".parse::<TaskId>().is_err());
    }

    #[test]
    fn test_update_keeps_absent_fields() {
        let now = Utc::now();
        let mut task = Task {
            id: TaskId(1),
            user_id: UserId(1),
            title: TaskTitle::new("original".to_string()).unwrap(),
            description: "details".to_string(),
            done: false,
            created_at: now,
            updated_at: now,
        };

        UpdateTaskCommand {
            done: Some(true),
            ..Default::default()
        }
        .apply(&mut task);

        assert_eq!(task.title.as_str(), "original");
        assert_eq!(task.description, "details");
        assert!(task.done);
    }
}
