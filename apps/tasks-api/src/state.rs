//! Application state management.
//!
//! Shared state passed to the application-level handlers (`/ready`) and
//! used to wire the domain routers at startup.

use sea_orm::DatabaseConnection;

/// Shared application state.
///
/// Cloning is cheap: the connection is a handle onto a shared pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Database connection pool
    pub db: DatabaseConnection,
}
