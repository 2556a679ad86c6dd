//! HTTP rendering for axum.
//!
//! Every result type implements [`IntoResponse`]: the status code comes from
//! [`status_code`] and the body is the serialized result, except for
//! `Forbidden` and `NoContent`, which are body-less.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::outcome::{AsOutcome, Outcome};
use crate::paged::PagedResult;
use crate::result::Result;
use crate::status::ResultStatus;

/// HTTP status code for a result status.
pub fn status_code(status: ResultStatus) -> StatusCode {
    match status {
        ResultStatus::Success => StatusCode::OK,
        ResultStatus::NoContent => StatusCode::NO_CONTENT,
        ResultStatus::Failure | ResultStatus::Invalid | ResultStatus::ValidationError => {
            StatusCode::BAD_REQUEST
        }
        ResultStatus::Unauthorized => StatusCode::UNAUTHORIZED,
        ResultStatus::Forbidden => StatusCode::FORBIDDEN,
        ResultStatus::NotFound => StatusCode::NOT_FOUND,
        ResultStatus::Conflict => StatusCode::CONFLICT,
        ResultStatus::CriticalError => StatusCode::INTERNAL_SERVER_ERROR,
        ResultStatus::Unsupported => StatusCode::NOT_IMPLEMENTED,
        ResultStatus::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Render any serializable result with its mapped status code.
pub fn render<R>(result: &R) -> Response
where
    R: AsOutcome + Serialize,
{
    let status = status_code(result.status());

    if status.is_server_error() {
        tracing::error!(
            status = %result.status(),
            correlation_id = result.correlation_id().unwrap_or_default(),
            errors = ?result.error_messages(),
            "request failed"
        );
    }

    match result.status() {
        ResultStatus::Forbidden | ResultStatus::NoContent => status.into_response(),
        _ => (status, Json(result)).into_response(),
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        render(&self)
    }
}

impl<T: Serialize> IntoResponse for Result<T> {
    fn into_response(self) -> Response {
        render(&self)
    }
}

impl<T: Serialize> IntoResponse for PagedResult<T> {
    fn into_response(self) -> Response {
        render(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_table() {
        let expected = [
            (ResultStatus::Success, 200),
            (ResultStatus::NoContent, 204),
            (ResultStatus::Failure, 400),
            (ResultStatus::Invalid, 400),
            (ResultStatus::ValidationError, 400),
            (ResultStatus::Unauthorized, 401),
            (ResultStatus::Forbidden, 403),
            (ResultStatus::NotFound, 404),
            (ResultStatus::Conflict, 409),
            (ResultStatus::CriticalError, 500),
            (ResultStatus::Unsupported, 501),
            (ResultStatus::Unavailable, 503),
        ];

        for (status, code) in expected {
            assert_eq!(status_code(status).as_u16(), code, "{status}");
        }
    }

    #[test]
    fn test_not_found_response() {
        let response = Result::<String>::not_found("missing id").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_forbidden_is_body_less() {
        let response = Outcome::forbidden("nope").into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(response.headers().get("content-type").is_none());
    }
}
