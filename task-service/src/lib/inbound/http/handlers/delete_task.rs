use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::identity::Identity;
use crate::domain::task::models::TaskId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::task::errors::TaskError;
use crate::task::ports::TaskServicePort;

pub async fn delete_task(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(task_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let task_id: TaskId = task_id.parse().map_err(TaskError::from)?;

    state
        .task_service
        .delete_task(&identity, &task_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, ()))
}
