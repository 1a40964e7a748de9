/// Liveness probe. Never touches the database or Discord.
pub async fn health() -> &'static str {
    "ok"
}
