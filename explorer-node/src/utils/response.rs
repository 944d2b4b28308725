use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use explorer_common::JsonEncoder;

use crate::errors::AppError;

/// Builds a JSON response whose body went through `encoder`, so timestamps
/// and key ordering follow the service-wide rules.
pub fn json_response<T>(
    encoder: &JsonEncoder,
    status: StatusCode,
    payload: &T,
) -> Result<Response, AppError>
where
    T: Serialize + ?Sized,
{
    let body = encoder.encode_serializable_to_vec(payload)?;
    Ok((
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response())
}
