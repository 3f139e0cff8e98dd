//! Upload Code tab

use serde::Serialize;

use crate::controller::PageState;
use super::SubmitButton;

#[derive(Debug, Clone, Serialize)]
pub struct UploadView {
    pub contract_code: String,
    pub file_name: Option<String>,
    pub placeholder: &'static str,
    pub line_count: usize,
    pub submit: SubmitButton,
}

impl UploadView {
    pub fn build(state: &PageState) -> Self {
        Self {
            contract_code: state.contract_code.clone(),
            file_name: Some(state.file_name.clone()).filter(|name| !name.is_empty()),
            placeholder: "Paste your Solidity smart contract code here...",
            line_count: state.contract_code.lines().count(),
            submit: SubmitButton::new(
                state,
                "Start AI Audit",
                "Auditing... Please Wait",
                "submitCode",
            ),
        }
    }
}
