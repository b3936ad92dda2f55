use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(crate::api::root::root),
    components(
        schemas(axum_helpers::ErrorResponse, crate::api::root::RootResponse)
    ),
    info(
        title = "Task Management API",
        version = "1.0.0",
        description = "Create, list, fetch, update and delete tasks"
    ),
    nest(
        (path = "/tasks", api = domain_tasks::TasksApiDoc)
    )
)]
pub struct ApiDoc;
