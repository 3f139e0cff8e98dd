//! Session handlers (page mount / unmount)

use axum::{extract::{State, Path, Query}, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AppState, AppResult};
use crate::controller::PageState;
use crate::views::{tab_bar, TabEntry};

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub tabs: Vec<TabEntry>,
    pub state: PageState,
}

impl SessionResponse {
    fn new(id: Uuid, state: PageState) -> Self {
        Self {
            id,
            tabs: tab_bar(&state),
            state,
        }
    }
}

/// Mount a new page
pub async fn create(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<SessionResponse>)> {
    let page = state.sessions.create()?;
    Ok((
        StatusCode::CREATED,
        Json(SessionResponse::new(page.id(), page.snapshot())),
    ))
}

#[derive(Debug, Deserialize, Default)]
pub struct StateQuery {
    /// Hold the response until no audit is in flight
    #[serde(default)]
    pub wait: bool,
}

/// Current page state
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<StateQuery>,
) -> AppResult<Json<SessionResponse>> {
    let page = state.sessions.get(id)?;
    let snapshot = if query.wait {
        page.settled().await
    } else {
        page.snapshot()
    };
    Ok(Json(SessionResponse::new(id, snapshot)))
}

/// Unmount a page
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.sessions.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}
