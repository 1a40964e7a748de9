use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Transport-level outcomes of the interaction endpoint that never reach a command.
///
/// Each variant is terminal for the request: no handler is invoked and no retry is
/// attempted.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InteractionError {
    /// The request used a method other than POST.
    #[error("Expected POST")]
    MethodNotAllowed,

    /// The Ed25519 signature did not verify against the application public key.
    #[error("Invalid request signature")]
    InvalidSignature,

    /// The authenticated body is not a decodable interaction.
    ///
    /// # Fields
    /// - Decoder message, logged at debug level only
    #[error("Malformed interaction payload: {0}")]
    MalformedPayload(String),

    /// The interaction type is neither a ping nor an application command.
    #[error("Unhandled interaction type {0}")]
    UnhandledType(u64),
}

/// Converts interaction errors into HTTP responses.
///
/// # Returns
/// - 405 Method Not Allowed - For `MethodNotAllowed`
/// - 401 Unauthorized - For `InvalidSignature`
/// - 400 Bad Request - For `MalformedPayload` and `UnhandledType`
impl IntoResponse for InteractionError {
    fn into_response(self) -> Response {
        match self {
            Self::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Expected POST").into_response(),
            Self::InvalidSignature => {
                (StatusCode::UNAUTHORIZED, "Invalid request signature").into_response()
            }
            Self::MalformedPayload(reason) => {
                tracing::debug!("Rejected malformed interaction: {}", reason);
                (StatusCode::BAD_REQUEST, "Malformed request").into_response()
            }
            Self::UnhandledType(kind) => {
                tracing::debug!("Rejected unhandled interaction type {}", kind);
                (StatusCode::BAD_REQUEST, "Unhandled request").into_response()
            }
        }
    }
}
