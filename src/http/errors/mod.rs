use crate::result::error::LambdaError;
use lambda_http::Response;
use reqwest::StatusCode;

// Response bodies the platform caller expects, verbatim.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method Not Allowed";
pub const MISSING_BODY_MESSAGE: &str = "Missing request body";
pub const INVALID_STRUCTURE_MESSAGE: &str = "Invalid event structure";
pub const SERVER_ERROR_MESSAGE: &str = "Internal Server Error";

fn error_response(
    message: String,
    status_code: StatusCode,
    cause: Option<LambdaError>,
) -> Response<String> {
    if let Some(e) = cause {
        tracing::error!(error = ?e, "{:?}", e);
    }
    let mut response = Response::new(message);
    let status = response.status_mut();
    *status = status_code;

    response
}

pub fn method_not_allowed_response() -> Response<String> {
    error_response(
        METHOD_NOT_ALLOWED_MESSAGE.to_owned(),
        StatusCode::METHOD_NOT_ALLOWED,
        None,
    )
}

pub fn missing_body_response() -> Response<String> {
    error_response(
        MISSING_BODY_MESSAGE.to_owned(),
        StatusCode::BAD_REQUEST,
        None,
    )
}

pub fn invalid_structure_response() -> Response<String> {
    error_response(
        INVALID_STRUCTURE_MESSAGE.to_owned(),
        StatusCode::BAD_REQUEST,
        None,
    )
}

pub fn unknown_error_response(cause: LambdaError) -> Response<String> {
    error_response(
        SERVER_ERROR_MESSAGE.to_owned(),
        StatusCode::INTERNAL_SERVER_ERROR,
        Some(cause),
    )
}
