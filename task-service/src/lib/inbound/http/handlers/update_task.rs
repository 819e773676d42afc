use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::TaskData;
use crate::domain::identity::Identity;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::TaskTitle;
use crate::domain::task::models::UpdateTaskCommand;
use crate::domain::task::ports::TaskServicePort;
use crate::inbound::http::router::AppState;
use crate::task::errors::TaskError;

/// HTTP request body for updating a task (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub done: Option<bool>,
}

impl UpdateTaskRequest {
    fn try_into_command(self) -> Result<UpdateTaskCommand, TaskError> {
        // A blank title leaves the stored one in place
        let title = self
            .title
            .filter(|title| !title.trim().is_empty())
            .map(TaskTitle::new)
            .transpose()?;

        Ok(UpdateTaskCommand {
            title,
            description: self.description,
            done: self.done,
        })
    }
}

pub async fn update_task(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(task_id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<ApiSuccess<TaskData>, ApiError> {
    // Parse task ID and request at HTTP boundary - errors automatically converted
    let task_id: TaskId = task_id.parse().map_err(TaskError::from)?;
    let command = req.try_into_command()?;

    state
        .task_service
        .update_task(&identity, &task_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref task| ApiSuccess::new(StatusCode::OK, task.into()))
}
