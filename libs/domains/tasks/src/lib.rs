//! Tasks Domain
//!
//! Everything needed to serve task CRUD: the record and its payloads, the
//! persistence trait with a SeaORM implementation, the service, and the
//! HTTP handlers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP binding, extractors, OpenAPI
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, merge, not-found mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + SeaORM implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, enums
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{SeaOrmTaskRepository, TaskService, handlers};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("sqlite::memory:").await?;
//!
//! let repository = SeaOrmTaskRepository::new(db);
//! let service = TaskService::new(repository);
//! let tasks = axum::Router::new().nest("/tasks", handlers::router(service));
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use error::{TaskError, TaskResult};
pub use handlers::TasksApiDoc;
pub use models::{
    CreateTask, NewTask, Pagination, Task, TaskResponse, TaskStatus, UpdateTask,
};
pub use repository::TaskRepository;
pub use service::TaskService;
pub use store::SeaOrmTaskRepository;
