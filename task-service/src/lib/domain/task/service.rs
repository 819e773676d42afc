use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::identity::Identity;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::NewTask;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::UpdateTaskCommand;
use crate::task::errors::TaskError;
use crate::task::ports::TaskRepository;
use crate::task::ports::TaskServicePort;

/// Domain service implementation for task operations.
pub struct TaskService<TR>
where
    TR: TaskRepository,
{
    repository: Arc<TR>,
}

impl<TR> TaskService<TR>
where
    TR: TaskRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }

    async fn owned_task(&self, identity: &Identity, id: &TaskId) -> Result<Task, TaskError> {
        self.repository
            .find_by_id(id, &identity.user_id)
            .await?
            .ok_or(TaskError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl<TR> TaskServicePort for TaskService<TR>
where
    TR: TaskRepository,
{
    async fn create_task(
        &self,
        identity: &Identity,
        command: CreateTaskCommand,
    ) -> Result<Task, TaskError> {
        let task = self
            .repository
            .create(NewTask {
                user_id: identity.user_id,
                title: command.title,
                description: command.description,
            })
            .await?;

        tracing::debug!(task_id = %task.id, user_id = %identity.user_id, "Task created");

        Ok(task)
    }

    async fn get_task(&self, identity: &Identity, id: &TaskId) -> Result<Task, TaskError> {
        self.owned_task(identity, id).await
    }

    async fn list_tasks(&self, identity: &Identity) -> Result<Vec<Task>, TaskError> {
        self.repository.list_by_user(&identity.user_id).await
    }

    async fn update_task(
        &self,
        identity: &Identity,
        id: &TaskId,
        command: UpdateTaskCommand,
    ) -> Result<Task, TaskError> {
        let mut task = self.owned_task(identity, id).await?;
        command.apply(&mut task);

        self.repository.update(task).await
    }

    async fn delete_task(&self, identity: &Identity, id: &TaskId) -> Result<(), TaskError> {
        self.repository.delete(id, &identity.user_id).await?;

        tracing::debug!(task_id = %id, user_id = %identity.user_id, "Task deleted");

        Ok(())
    }
}
