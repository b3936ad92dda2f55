use chrono::Utc;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, NewTask, Pagination, Task, UpdateTask};
use crate::repository::TaskRepository;

/// Service layer for Task business logic
///
/// Validation always runs to completion before the repository is touched,
/// so a rejected request never causes a partial write.
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

// Manual impl: a derive would demand `R: Clone`
impl<R: TaskRepository> Clone for TaskService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new task with validation
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create_task(&self, input: CreateTask) -> TaskResult<Task> {
        input.validate()?;

        let new_task = NewTask {
            title: input.title,
            description: input.description,
            status: input.status,
            created_at: Utc::now(),
        };

        self.repository.insert(new_task).await
    }

    /// Get a task by ID
    #[instrument(skip(self), fields(task_id = id))]
    pub async fn get_task(&self, id: i32) -> TaskResult<Task> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    /// List a slice of tasks in creation order
    #[instrument(skip(self), fields(skip = page.skip, limit = page.limit))]
    pub async fn list_tasks(&self, page: Pagination) -> TaskResult<Vec<Task>> {
        page.validate()?;

        self.repository
            .list(page.offset(), page.row_limit())
            .await
    }

    /// Partially update a task
    #[instrument(skip(self, input), fields(task_id = id))]
    pub async fn update_task(&self, id: i32, input: UpdateTask) -> TaskResult<Task> {
        input.validate()?;

        let mut task = self.get_task(id).await?;
        task.apply_update(input);

        // The row may have been deleted since the lookup
        self.repository
            .replace(task)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    /// Delete a task
    #[instrument(skip(self), fields(task_id = id))]
    pub async fn delete_task(&self, id: i32) -> TaskResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(TaskError::NotFound(id));
        }

        Ok(())
    }
}
