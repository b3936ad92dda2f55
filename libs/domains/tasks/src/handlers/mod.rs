mod crud;

use axum::{Router, routing::get};
use axum_helpers::errors::responses::{
    InternalServerErrorResponse, InvalidIdResponse, NotFoundResponse, ValidationErrorResponse,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{CreateTask, TaskResponse, TaskStatus, UpdateTask};
use crate::repository::TaskRepository;
use crate::service::TaskService;

/// OpenAPI documentation for Tasks API
#[derive(OpenApi)]
#[openapi(
    paths(
        crud::list_tasks,
        crud::get_task,
        crud::create_task,
        crud::update_task,
        crud::delete_task,
    ),
    components(
        schemas(TaskResponse, CreateTask, UpdateTask, TaskStatus),
        responses(
            NotFoundResponse,
            ValidationErrorResponse,
            InvalidIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "tasks", description = "Task CRUD operations")
    )
)]
pub struct TasksApiDoc;

/// Create the tasks router. Mount it with `nest("/tasks", ...)`.
pub fn router<R: TaskRepository + 'static>(service: TaskService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(crud::list_tasks).post(crud::create_task))
        .route(
            "/{id}",
            get(crud::get_task)
                .put(crud::update_task)
                .delete(crud::delete_task),
        )
        .with_state(shared_service)
}
