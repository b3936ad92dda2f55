use async_trait::async_trait;

use crate::error::TaskResult;
use crate::models::{NewTask, Task};

/// Repository trait for Task persistence
///
/// Every method is a single statement against the store; none of them
/// retry. Implementations only need to be atomic per record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Store a new task and return it with its assigned id
    async fn insert(&self, input: NewTask) -> TaskResult<Task>;

    /// Get a task by ID
    async fn get_by_id(&self, id: i32) -> TaskResult<Option<Task>>;

    /// List tasks in creation order (ascending id), skipping `offset` and
    /// returning at most `limit`
    async fn list(&self, offset: u64, limit: u64) -> TaskResult<Vec<Task>>;

    /// Overwrite the stored record with the same id. `None` if it no longer
    /// exists.
    async fn replace(&self, task: Task) -> TaskResult<Option<Task>>;

    /// Delete a task by ID. `false` if nothing was deleted.
    async fn delete(&self, id: i32) -> TaskResult<bool>;
}
