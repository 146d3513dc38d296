use crate::modules::pizza::repository;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const DATABASE_ERROR_MESSAGE: &str = "Database error occurred.";

/// Every persistence failure collapses into one plain-text 500, unless
/// `strict-errors` is on and the database was never reachable.
pub fn database_error(err: repository::Error) -> Response {
    match err {
        #[cfg(feature = "strict-errors")]
        repository::Error::Unavailable => {
            (StatusCode::SERVICE_UNAVAILABLE, DATABASE_ERROR_MESSAGE).into_response()
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, DATABASE_ERROR_MESSAGE).into_response(),
    }
}

#[cfg(feature = "strict-errors")]
pub fn not_found() -> Response {
    use axum::Json;
    use serde_json::json;

    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Pizza not found" })),
    )
        .into_response()
}

#[cfg(feature = "strict-errors")]
pub fn invalid_payload(errors: validator::ValidationErrors) -> Response {
    use axum::Json;
    use serde_json::json;

    tracing::debug!("Rejected pizza payload: {}", errors);

    (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
}
