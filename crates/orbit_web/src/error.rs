use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use orbit_core::Error;

/// Core errors mapped onto HTTP statuses at the presentation boundary.
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            // The load-more trigger is hidden once the feed is exhausted, so
            // a NoMorePages here is a stale or misbehaving client.
            Error::NoMorePages | Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Fetch(_) | Error::InvalidDocument(_) | Error::InvalidArgument(_) => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
