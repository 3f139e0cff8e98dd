//! Notification handler

use axum::{extract::{State, Path}, Json};
use uuid::Uuid;

use crate::{AppState, AppResult};
use crate::models::Notification;

/// Drain queued notifications (oldest first)
pub async fn drain(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<Notification>>> {
    let page = state.sessions.get(id)?;
    Ok(Json(page.drain_notifications()))
}
