use axum::{
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::server::{
    controller::{health::health, interaction::handle_interaction},
    state::AppState,
};

/// Builds the HTTP surface.
///
/// `/` accepts every method so that the interaction handler can answer non-POST
/// requests with 405 itself.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", any(handle_interaction))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
}
