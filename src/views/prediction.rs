//! Prediction tab

use serde::Serialize;

use crate::controller::PageState;
use crate::models::PredictedRisk;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PredictionView {
    Loading,
    Empty { message: &'static str },
    Ready { risks: Vec<PredictedRisk> },
}

impl PredictionView {
    pub fn build(state: &PageState) -> Self {
        if state.is_loading {
            return PredictionView::Loading;
        }

        match &state.audit_result {
            Some(result) => PredictionView::Ready {
                risks: result.predicted_risks.clone(),
            },
            None => PredictionView::Empty {
                message: "Run an audit to see predicted vulnerabilities.",
            },
        }
    }
}
