//! Query string extractor with validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query extractor with automatic validation.
///
/// Same contract as [`ValidatedJson`](super::ValidatedJson) but for the
/// query string: unparsable values and rule violations are both 422.
///
/// # Example
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct Page {
///     #[validate(range(min = 0))]
///     #[serde(default)]
///     skip: i64,
/// }
///
/// async fn list(ValidatedQuery(page): ValidatedQuery<Page>) -> String {
///     page.skip.to_string()
/// }
/// ```
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state).await?;
        data.validate()?;
        Ok(ValidatedQuery(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Page {
        #[serde(default)]
        #[validate(range(min = 0))]
        skip: i64,
    }

    async fn status_of(uri: &str) -> StatusCode {
        Router::new()
            .route(
                "/",
                get(|ValidatedQuery(p): ValidatedQuery<Page>| async move { p.skip.to_string() }),
            )
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_defaults_and_valid_values() {
        assert_eq!(status_of("/").await, StatusCode::OK);
        assert_eq!(status_of("/?skip=3").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_negative_is_422() {
        assert_eq!(status_of("/?skip=-1").await, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_non_integer_is_422() {
        assert_eq!(status_of("/?skip=two").await, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
