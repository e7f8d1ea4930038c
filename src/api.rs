//! HTTP listing endpoint for `foo` records.
//!
//! `GET /foo?id=2&id=4&value=hello&page_size=10&page=0` answers a JSON array of records.
//! Input that cannot be decoded is answered with `400` and the decode error text; any other
//! failure is logged and answered with `500`.

use axum::{
    Json, Router,
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::error::FooStoreError;
use crate::filter::decode_query;
use crate::model::Foo;
use crate::queryer::Queryer;
use crate::store::FooStore;

/// Body sent with every `500` response.
pub const QUERY_FAILED: &str = "failed to perform query";

/// Routes for the listing endpoint, with request tracing.
pub fn router<Q>(store: FooStore<Q>) -> Router
where
    Q: Queryer + Clone + 'static,
{
    Router::new()
        .route("/foo", get(list_foo::<Q>))
        .route("/foo/", get(list_foo::<Q>))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

async fn list_foo<Q>(
    State(store): State<FooStore<Q>>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<Foo>>, ApiError>
where
    Q: Queryer + Clone + 'static,
{
    let opts = decode_query(query.as_deref().unwrap_or_default())?;
    let records = store.list(&opts).await?;
    Ok(Json(records))
}

/// How a failed request is answered.
#[derive(Debug)]
pub enum ApiError {
    /// The query string could not be decoded.
    BadRequest(String),
    /// The store failed; details stay in the log.
    Internal,
}

impl From<FooStoreError> for ApiError {
    fn from(err: FooStoreError) -> Self {
        if err.is_decode_error() {
            ApiError::BadRequest(err.to_string())
        } else {
            tracing::error!(error = %err, "listing foo records failed");
            ApiError::Internal
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, QUERY_FAILED).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_become_bad_requests() {
        let err = FooStoreError::decode("colour", "unrecognized key");
        let api: ApiError = err.into();
        assert!(matches!(api, ApiError::BadRequest(ref m) if m.contains("colour")));
        assert_eq!(api.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn other_errors_hide_details() {
        let api: ApiError = FooStoreError::ExecutionError("no such table: foo".into()).into();
        assert!(matches!(api, ApiError::Internal));
        assert_eq!(
            api.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
