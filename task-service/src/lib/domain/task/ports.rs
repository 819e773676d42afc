use async_trait::async_trait;

use crate::domain::identity::Identity;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::NewTask;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::UpdateTaskCommand;
use crate::task::errors::TaskError;
use crate::user::models::UserId;

/// Port for task domain service operations.
///
/// Every operation is scoped to the authenticated caller.
#[async_trait]
pub trait TaskServicePort: Send + Sync + 'static {
    async fn create_task(
        &self,
        identity: &Identity,
        command: CreateTaskCommand,
    ) -> Result<Task, TaskError>;

    /// # Errors
    /// * `NotFound` - Task does not exist or belongs to another user
    async fn get_task(&self, identity: &Identity, id: &TaskId) -> Result<Task, TaskError>;

    async fn list_tasks(&self, identity: &Identity) -> Result<Vec<Task>, TaskError>;

    /// # Errors
    /// * `NotFound` - Task does not exist or belongs to another user
    async fn update_task(
        &self,
        identity: &Identity,
        id: &TaskId,
        command: UpdateTaskCommand,
    ) -> Result<Task, TaskError>;

    /// # Errors
    /// * `NotFound` - Task does not exist or belongs to another user
    async fn delete_task(&self, identity: &Identity, id: &TaskId) -> Result<(), TaskError>;
}

/// Persistence operations for tasks.
///
/// Lookups and mutations always filter on the owning user.
#[async_trait]
pub trait TaskRepository: Send + Sync + 'static {
    async fn create(&self, task: NewTask) -> Result<Task, TaskError>;

    async fn find_by_id(&self, id: &TaskId, user_id: &UserId) -> Result<Option<Task>, TaskError>;

    /// Tasks of a user, oldest first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Task>, TaskError>;

    /// # Errors
    /// * `NotFound` - No row matched id and owner
    async fn update(&self, task: Task) -> Result<Task, TaskError>;

    /// # Errors
    /// * `NotFound` - No row matched id and owner
    async fn delete(&self, id: &TaskId, user_id: &UserId) -> Result<(), TaskError>;
}
