use std::time::Instant;

use axum::{
    extract::{FromRequest, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use crate::{
    error::{AppError, AppResult},
    models::{Item, NewItem},
    AppState,
};

/// `Json` extractor whose rejections (bad syntax, wrong shape, missing
/// content type) all come back as 400 with a JSON error body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Payload<T>(pub T);

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_items(State(state): State<AppState>) -> AppResult<Json<Vec<Item>>> {
    let start = Instant::now();
    let items = state.items.list().await?;

    info!(
        count = items.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "Listed items"
    );

    Ok(Json(items))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_item(
    State(state): State<AppState>,
    Payload(payload): Payload<NewItem>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    if payload.had_client_id() {
        debug!("Ignoring client-supplied id");
    }

    let start = Instant::now();
    let id = state.items.create(&payload).await?;

    info!(
        id = %id,
        name = %payload.name,
        elapsed_ms = start.elapsed().as_millis(),
        "Created item"
    );

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Success!",
            "id": id,
        })),
    ))
}
