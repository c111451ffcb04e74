use crate::errors::RelayError;
use crate::AppState;
use rocket::serde::json::Json;
use rocket::{get, State};
use serde_json::Value;

#[get("/")]
pub fn index() -> &'static str {
    "Welcome to the channel relay! Use /api/search?q=<name> or /api/channel?id=<channel id>."
}

#[get("/search?<q>")]
pub async fn search(q: Option<String>, state: &State<AppState>) -> Result<Json<Value>, RelayError> {
    let query = required_param(q, "q", "Query")?;
    state.youtube.search_channels(&query).await.map(Json)
}

#[get("/channel?<id>")]
pub async fn channel(
    id: Option<String>,
    state: &State<AppState>,
) -> Result<Json<Value>, RelayError> {
    let channel_id = required_param(id, "id", "Channel ID")?;
    state.youtube.channel_details(&channel_id).await.map(Json)
}

/// Rejects an absent or blank parameter before anything goes upstream.
fn required_param(value: Option<String>, name: &str, label: &str) -> Result<String, RelayError> {
    match value.as_deref().map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
        _ => Err(RelayError::Validation(format!(
            "{label} parameter \"{name}\" is required"
        ))),
    }
}
