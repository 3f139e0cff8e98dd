//! Tab view handler

use axum::{extract::{State, Path}, Json};
use uuid::Uuid;

use crate::{AppState, AppResult, AppError};
use crate::models::Tab;
use crate::views::{self, TabView};

/// Render one tab of a page
pub async fn get(
    State(state): State<AppState>,
    Path((id, tab)): Path<(Uuid, String)>,
) -> AppResult<Json<TabView>> {
    let tab: Tab = tab.parse().map_err(AppError::ValidationError)?;
    let page = state.sessions.get(id)?;

    Ok(Json(views::render(&page.snapshot(), tab)))
}
