//! Tab views
//!
//! Read-only view models built from a `PageState` snapshot. Views never
//! mutate state; the input tabs describe which intents they emit.

pub mod overview;
pub mod upload;
pub mod address;
pub mod results;
pub mod prediction;
pub mod technology;

use serde::Serialize;

use crate::controller::PageState;
use crate::models::Tab;

pub use overview::OverviewView;
pub use upload::UploadView;
pub use address::AddressView;
pub use results::ResultsView;
pub use prediction::PredictionView;
pub use technology::TechnologyView;

#[derive(Debug, Serialize)]
#[serde(tag = "tab", rename_all = "camelCase")]
pub enum TabView {
    Overview(OverviewView),
    Upload(UploadView),
    AuditAddress(AddressView),
    AuditResults(ResultsView),
    Prediction(PredictionView),
    Technology(TechnologyView),
}

/// Submit button of an input tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitButton {
    pub label: &'static str,
    pub disabled: bool,
    /// Intent the button posts
    pub intent: &'static str,
}

impl SubmitButton {
    fn new(state: &PageState, idle: &'static str, busy: &'static str, intent: &'static str) -> Self {
        Self {
            label: if state.is_loading { busy } else { idle },
            disabled: !state.can_submit(),
            intent,
        }
    }
}

/// Tab bar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabEntry {
    pub id: Tab,
    pub label: &'static str,
    pub active: bool,
}

pub fn tab_bar(state: &PageState) -> Vec<TabEntry> {
    Tab::ALL
        .into_iter()
        .map(|tab| TabEntry {
            id: tab,
            label: tab.label(),
            active: tab == state.active_tab,
        })
        .collect()
}

pub fn render(state: &PageState, tab: Tab) -> TabView {
    match tab {
        Tab::Overview => TabView::Overview(OverviewView::build()),
        Tab::Upload => TabView::Upload(UploadView::build(state)),
        Tab::AuditAddress => TabView::AuditAddress(AddressView::build(state)),
        Tab::AuditResults => TabView::AuditResults(ResultsView::build(state)),
        Tab::Prediction => TabView::Prediction(PredictionView::build(state)),
        Tab::Technology => TabView::Technology(TechnologyView::build()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_bar_marks_active() {
        let state = PageState {
            active_tab: Tab::Prediction,
            ..PageState::default()
        };
        let bar = tab_bar(&state);
        assert_eq!(bar.len(), 6);
        let active: Vec<Tab> = bar.iter().filter(|e| e.active).map(|e| e.id).collect();
        assert_eq!(active, [Tab::Prediction]);
    }

    #[test]
    fn test_render_tags_each_tab() {
        let state = PageState::default();
        for tab in Tab::ALL {
            let json = serde_json::to_value(render(&state, tab)).unwrap();
            assert_eq!(json["tab"], tab.as_str());
        }
    }
}
