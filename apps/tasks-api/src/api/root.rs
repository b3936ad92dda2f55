use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Landing document pointing at the API docs
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    pub message: &'static str,
    pub docs: &'static str,
    pub redoc: &'static str,
}

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses(
        (status = 200, description = "Service banner with documentation links", body = RootResponse)
    )
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to Task Management API",
        docs: "/swagger-ui",
        redoc: "/redoc",
    })
}
