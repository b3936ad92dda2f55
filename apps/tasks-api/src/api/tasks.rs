//! Task routes backed by the SeaORM repository.

use axum::Router;
use domain_tasks::{SeaOrmTaskRepository, TaskService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = SeaOrmTaskRepository::new(state.db.clone());
    let service = TaskService::new(repository);

    handlers::router(service)
}
