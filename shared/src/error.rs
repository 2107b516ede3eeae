use crate::codec::CodecError;

/// Every way a request can fail before a response is rendered.
///
/// Handlers never let one of these escape: the policy of the handler decides
/// which status code and body each kind becomes.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum HandlerError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Invalid JSON in request body")]
    MalformedInput,
    #[error("{0}")]
    Internal(String),
    #[error("Unsupported HTTP method or missing parameters")]
    Unsupported,
}

impl HandlerError {
    pub fn missing_field(name: &str) -> Self {
        HandlerError::Validation(format!("Missing required field: {}", name))
    }

    pub fn missing_fields() -> Self {
        HandlerError::Validation("Missing required fields in payload".to_string())
    }

    /// Wraps a store failure with the operation it interrupted.
    pub fn internal(context: &str, cause: impl std::fmt::Display) -> Self {
        HandlerError::Internal(format!("{}: {}", context, cause))
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(e: serde_json::Error) -> Self {
        match e.classify() {
            serde_json::error::Category::Data => HandlerError::missing_fields(),
            _ => HandlerError::MalformedInput,
        }
    }
}

impl From<CodecError> for HandlerError {
    fn from(e: CodecError) -> Self {
        HandlerError::Validation(e.to_string())
    }
}
