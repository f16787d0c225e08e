use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use crate::{
    error::{AppError, AppResult},
    models::{Item, ItemFields},
    AppState,
};

/// The `:id` segment is parsed leniently: a non-numeric segment can never
/// match a stored identifier, so it behaves as a lookup miss rather than a
/// distinct error class.
fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

fn not_found() -> AppError {
    AppError::NotFound("item not found".to_string())
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_items(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<Item>>)> {
    let items = state.store.read().await.list();

    info!(count = items.len(), "Listed items");

    Ok((StatusCode::OK, Json(items)))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let item = match parse_id(&raw_id) {
        Some(id) => state.store.read().await.get(id),
        None => None,
    };
    let item = item.ok_or_else(not_found)?;

    info!(id = item.id, "Fetched item");

    Ok((StatusCode::OK, Json(item)))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_item(
    State(state): State<AppState>,
    Json(fields): Json<ItemFields>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let item = state.store.write().await.create(fields);

    info!(id = item.id, name = %item.name, "Created item");

    Ok((StatusCode::CREATED, Json(item)))
}

// ── Update (upsert) ───────────────────────────────────────────────────────────

/// PUT replaces the whole record when `:id` exists. When it does not, the
/// request falls through to a create with a freshly assigned id; the path id
/// is not honored for the new record, and the 201 status is the only signal
/// that a new identity was minted.
pub async fn update_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(fields): Json<ItemFields>,
) -> AppResult<(StatusCode, Json<Item>)> {
    // Single write-lock acquisition keeps the check-then-act atomic.
    let mut store = state.store.write().await;

    if let Some(updated) = parse_id(&raw_id).and_then(|id| store.update(id, fields.clone())) {
        info!(id = updated.id, name = %updated.name, "Updated item");
        return Ok((StatusCode::OK, Json(updated)));
    }

    let created = store.create(fields);
    info!(id = created.id, name = %created.name, path_id = %raw_id, "Upserted item as a new record");
    Ok((StatusCode::CREATED, Json(created)))
}

// ── Delete ────────────────────────────────────────────────────────────────────

/// DELETE answers 204 whether or not the id existed; the absent case is
/// recorded at debug level only.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let removed = match parse_id(&raw_id) {
        Some(id) => state.store.write().await.remove(id),
        None => false,
    };

    if removed {
        info!(id = %raw_id, "Deleted item");
    } else {
        debug!(id = %raw_id, "Delete of absent item treated as success");
    }

    Ok(StatusCode::NO_CONTENT)
}
