use crate::error::HandlerError;
use lambda_http::http::StatusCode;
use lambda_http::{Error, Response};
use serde::Serialize;

pub fn json_response(
    status: &StatusCode,
    body: &impl Serialize,
) -> Result<Response<String>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(serde_json::to_string(&body)?)
        .map_err(Box::new)?;

    Ok(response)
}

/// A 200 JSON response for a successful operation.
pub fn ok_response(body: &impl Serialize) -> Result<Response<String>, HandlerError> {
    json_response(&StatusCode::OK, body)
        .map_err(|e| HandlerError::internal("Error encoding response", e))
}
