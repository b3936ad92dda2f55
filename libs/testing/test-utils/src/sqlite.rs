//! SQLite test infrastructure
//!
//! Provides a `TestDatabase` helper backed by an in-memory SQLite database
//! with the workspace migrations applied.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// In-memory connection string. Each pool gets its own private database.
pub const MEMORY_URL: &str = "sqlite::memory:";

/// Test database wrapper
///
/// The pool is pinned to a single connection: an in-memory SQLite database
/// lives only as long as the connection that created it.
pub struct TestDatabase {
    pub connection: DatabaseConnection,
    pub connection_string: String,
}

impl TestDatabase {
    /// Create a new test database with migrations applied
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Use db.connection() to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        let mut options = ConnectOptions::new(MEMORY_URL);
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let connection = Database::connect(options)
            .await
            .expect("Failed to open in-memory SQLite database");

        Migrator::up(&connection, None)
            .await
            .expect("Failed to run migrations");

        tracing::debug!("Test database ready (SQLite in-memory)");

        Self {
            connection,
            connection_string: MEMORY_URL.to_string(),
        }
    }

    /// Get a cloned connection (useful for passing to repositories)
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}
