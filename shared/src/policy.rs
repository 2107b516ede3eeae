use crate::error::HandlerError;
use crate::utils::json_response;
use lambda_http::http::StatusCode;
use lambda_http::{tracing, Error, Response};
use serde_json::json;

/// How a handler turns a [`HandlerError`] into a response.
///
/// The three handlers deliberately disagree here and clients depend on the
/// difference, so each keeps its own policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Not-found is a 404, everything else a 500 with an `error` body.
    Strict,
    /// Always 200. Only the body shape (`message` or `error`) tells outcomes apart.
    Lenient,
    /// A request that cannot be routed is a 400, not-found a 404, and every
    /// other failure, including an invalid body, a 500.
    Conventional,
}

const INVALID_REQUEST: &str = "Invalid request";

impl ErrorPolicy {
    pub fn respond(&self, err: &HandlerError) -> Result<Response<String>, Error> {
        tracing::error!("Request failed: {}", err);

        let message = err.to_string();
        match (self, err) {
            (ErrorPolicy::Strict, HandlerError::NotFound(_)) => {
                json_response(&StatusCode::NOT_FOUND, &json!({ "message": message }))
            }
            (ErrorPolicy::Strict, _) => json_response(
                &StatusCode::INTERNAL_SERVER_ERROR,
                &json!({ "error": message }),
            ),
            (ErrorPolicy::Lenient, HandlerError::NotFound(_) | HandlerError::Unsupported) => {
                json_response(&StatusCode::OK, &json!({ "message": message }))
            }
            (ErrorPolicy::Lenient, _) => json_response(&StatusCode::OK, &json!({ "error": message })),
            (ErrorPolicy::Conventional, HandlerError::Unsupported) => {
                json_response(&StatusCode::BAD_REQUEST, &json!({ "message": INVALID_REQUEST }))
            }
            (ErrorPolicy::Conventional, HandlerError::NotFound(_)) => {
                json_response(&StatusCode::NOT_FOUND, &json!({ "message": message }))
            }
            (ErrorPolicy::Conventional, _) => json_response(
                &StatusCode::INTERNAL_SERVER_ERROR,
                &json!({ "error": message }),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn render(policy: ErrorPolicy, err: HandlerError) -> (u16, Value) {
        let response = policy.respond(&err).unwrap();
        let body = serde_json::from_str(response.body()).unwrap();
        (response.status().as_u16(), body)
    }

    #[test]
    fn strict_only_uses_404_and_500() {
        assert_eq!(
            render(ErrorPolicy::Strict, HandlerError::NotFound("Product not found".into())),
            (404, json!({"message": "Product not found"}))
        );
        assert_eq!(
            render(ErrorPolicy::Strict, HandlerError::missing_field("productId")),
            (500, json!({"error": "Missing required field: productId"}))
        );
        assert_eq!(
            render(ErrorPolicy::Strict, HandlerError::Unsupported),
            (500, json!({"error": "Unsupported HTTP method or missing parameters"}))
        );
    }

    #[test]
    fn lenient_never_raises_the_status_code() {
        assert_eq!(
            render(ErrorPolicy::Lenient, HandlerError::NotFound("Product not found".into())),
            (200, json!({"message": "Product not found"}))
        );
        assert_eq!(
            render(ErrorPolicy::Lenient, HandlerError::MalformedInput),
            (200, json!({"error": "Invalid JSON in request body"}))
        );
        assert_eq!(
            render(ErrorPolicy::Lenient, HandlerError::Unsupported),
            (200, json!({"message": "Unsupported HTTP method or missing parameters"}))
        );
    }

    #[test]
    fn conventional_only_uses_400_for_unroutable_requests() {
        assert_eq!(
            render(ErrorPolicy::Conventional, HandlerError::Unsupported),
            (400, json!({"message": "Invalid request"}))
        );
        assert_eq!(
            render(ErrorPolicy::Conventional, HandlerError::missing_fields()),
            (500, json!({"error": "Missing required fields in payload"}))
        );
        assert_eq!(
            render(ErrorPolicy::Conventional, HandlerError::NotFound("Item not found".into())),
            (404, json!({"message": "Item not found"}))
        );
        assert_eq!(
            render(ErrorPolicy::Conventional, HandlerError::MalformedInput),
            (500, json!({"error": "Invalid JSON in request body"}))
        );
    }
}
