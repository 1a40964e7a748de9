use axum::{
    body::to_bytes,
    extract::{Request, State},
    http::{HeaderMap, Method},
    response::{IntoResponse, Response},
    Json,
};

use crate::server::{
    error::interaction::InteractionError,
    interaction::{
        model::{Interaction, InteractionKind},
        response::InteractionResponse,
        verify::verify,
        SIGNATURE_HEADER, TIMESTAMP_HEADER,
    },
    state::AppState,
};

/// Largest interaction body accepted. Discord payloads are a few kilobytes.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

/// Discord interaction webhook.
///
/// Runs every request through method check, signature verification, parsing and
/// routing. Only authenticated bodies are ever decoded.
///
/// # Returns
/// - 200 OK - `{"type":1}` for a ping, otherwise the command's reply or "Command not found."
/// - 400 Bad Request - Malformed authenticated body, or an unhandled interaction type
/// - 401 Unauthorized - Missing headers, a body over the size limit, or a signature that
///   does not verify
/// - 405 Method Not Allowed - Any method other than POST; the body is not read
pub async fn handle_interaction(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, InteractionError> {
    if request.method() != Method::POST {
        return Err(InteractionError::MethodNotAllowed);
    }

    let (parts, body) = request.into_parts();
    let (Some(signature), Some(timestamp)) = (
        header(&parts.headers, SIGNATURE_HEADER),
        header(&parts.headers, TIMESTAMP_HEADER),
    ) else {
        return Err(InteractionError::InvalidSignature);
    };

    // A body that is not read in full cannot be authenticated.
    let raw_body = to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| {
        tracing::debug!("Failed to read interaction body: {}", e);
        InteractionError::InvalidSignature
    })?;

    if !verify(&raw_body, signature, timestamp, &state.config.discord_public_key) {
        return Err(InteractionError::InvalidSignature);
    }

    let interaction = Interaction::parse(&raw_body)?;

    match interaction.kind {
        InteractionKind::Ping => Ok(Json(InteractionResponse::pong()).into_response()),
        InteractionKind::ApplicationCommand => {
            let Some(name) = interaction.command_name() else {
                return Err(InteractionError::MalformedPayload(
                    "application command without data".to_string(),
                ));
            };
            let Some(command) = state.registry.lookup(name) else {
                tracing::warn!("Received unknown command {:?}", name);
                return Ok(Json(InteractionResponse::message("Command not found.")).into_response());
            };

            tracing::debug!("Dispatching /{}", name);
            let response = command
                .handle(&interaction, &state.config, &state.context)
                .await;

            Ok(Json(response).into_response())
        }
        InteractionKind::Other(kind) => Err(InteractionError::UnhandledType(kind)),
    }
}
