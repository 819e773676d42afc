use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::task::models::NewTask;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::TaskTitle;
use crate::domain::task::ports::TaskRepository;
use crate::task::errors::TaskError;
use crate::user::models::UserId;

const TASK_COLUMNS: &str = "id, user_id, title, description, done, created_at, updated_at";

pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct TaskRow {
    id: i64,
    user_id: i64,
    title: String,
    description: String,
    done: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TaskRow> for Task {
    type Error = TaskError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        Ok(Task {
            id: TaskId(row.id),
            user_id: UserId(row.user_id),
            title: TaskTitle::new(row.title)?,
            description: row.description,
            done: row.done,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn database_error(e: sqlx::Error) -> TaskError {
    TaskError::DatabaseError(e.to_string())
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, task: NewTask) -> Result<Task, TaskError> {
        sqlx::query_as::<_, TaskRow>(&format!(
            r#"
            INSERT INTO tasks (user_id, title, description)
            VALUES ($1, $2, $3)
            RETURNING {TASK_COLUMNS}
            "#
        ))
        .bind(task.user_id.0)
        .bind(task.title.as_str())
        .bind(&task.description)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?
        .try_into()
    }

    async fn find_by_id(&self, id: &TaskId, user_id: &UserId) -> Result<Option<Task>, TaskError> {
        sqlx::query_as::<_, TaskRow>(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1 AND user_id = $2"
        ))
        .bind(id.0)
        .bind(user_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .map(Task::try_from)
        .transpose()
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Task>, TaskError> {
        sqlx::query_as::<_, TaskRow>(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE user_id = $1 ORDER BY created_at, id"
        ))
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?
        .into_iter()
        .map(Task::try_from)
        .collect()
    }

    async fn update(&self, task: Task) -> Result<Task, TaskError> {
        sqlx::query_as::<_, TaskRow>(&format!(
            r#"
            UPDATE tasks
            SET title = $1, description = $2, done = $3, updated_at = NOW()
            WHERE id = $4 AND user_id = $5
            RETURNING {TASK_COLUMNS}
            "#
        ))
        .bind(task.title.as_str())
        .bind(&task.description)
        .bind(task.done)
        .bind(task.id.0)
        .bind(task.user_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(TaskError::NotFound(task.id.to_string()))?
        .try_into()
    }

    async fn delete(&self, id: &TaskId, user_id: &UserId) -> Result<(), TaskError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(id.0)
            .bind(user_id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(TaskError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
