use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_helpers::errors::responses::{
    InternalServerErrorResponse, InvalidIdResponse, NotFoundResponse, ValidationErrorResponse,
};
use axum_helpers::{IdPath, ValidatedJson, ValidatedQuery};
use std::sync::Arc;

use crate::error::TaskResult;
use crate::models::{CreateTask, Pagination, TaskResponse, UpdateTask};
use crate::repository::TaskRepository;
use crate::service::TaskService;

/// List tasks in creation order
#[utoipa::path(
    get,
    path = "",
    tag = "tasks",
    params(Pagination),
    responses(
        (status = 200, description = "Slice of tasks", body = Vec<TaskResponse>),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn list_tasks<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    ValidatedQuery(page): ValidatedQuery<Pagination>,
) -> TaskResult<Json<Vec<TaskResponse>>> {
    let tasks = service.list_tasks(page).await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task found", body = TaskResponse),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = InvalidIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn get_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    IdPath(id): IdPath,
) -> TaskResult<Json<TaskResponse>> {
    let task = service.get_task(id).await?;
    Ok(Json(task.into()))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "",
    tag = "tasks",
    request_body = CreateTask,
    responses(
        (status = 201, description = "Task created successfully", body = TaskResponse),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn create_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateTask>,
) -> TaskResult<impl IntoResponse> {
    let task = service.create_task(input).await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

/// Update a task. Fields left out of the body are not changed.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    request_body = UpdateTask,
    responses(
        (status = 200, description = "Task updated successfully", body = TaskResponse),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn update_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateTask>,
) -> TaskResult<Json<TaskResponse>> {
    let task = service.update_task(id, input).await?;
    Ok(Json(task.into()))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task deleted successfully"),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = InvalidIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn delete_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    IdPath(id): IdPath,
) -> TaskResult<StatusCode> {
    service.delete_task(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
