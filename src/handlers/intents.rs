//! Intent dispatch handler

use axum::{extract::{State, Path}, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::{AppState, AppResult};
use crate::controller::{Intent, PageState};
use crate::models::Notification;

#[derive(Debug, Serialize)]
pub struct DispatchResponse {
    pub state: PageState,
    /// Notifications raised by this intent (validation warnings)
    pub notifications: Vec<Notification>,
}

/// Apply one intent to a page
pub async fn dispatch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(intent): Json<Intent>,
) -> AppResult<Json<DispatchResponse>> {
    let page = state.sessions.get(id)?;
    let notifications = page.dispatch(intent);

    Ok(Json(DispatchResponse {
        state: page.snapshot(),
        notifications,
    }))
}
