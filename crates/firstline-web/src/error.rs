use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use firstline_core::FirstLineError;

#[expect(
    clippy::needless_pass_by_value,
    reason = "handlers naturally own error values from `Result` and pass them through"
)]
pub fn firstline_error_response(
    err: FirstLineError,
    operation: &str,
    topic: Option<String>,
) -> Response {
    let status = status_for_error(&err);
    let payload = err.to_payload(operation.to_string(), topic);
    (status, Json(payload)).into_response()
}

fn status_for_error(err: &FirstLineError) -> StatusCode {
    match err {
        FirstLineError::Validation(_) => StatusCode::BAD_REQUEST,
        FirstLineError::NotFound(_) => StatusCode::NOT_FOUND,
        FirstLineError::Json(_) | FirstLineError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
