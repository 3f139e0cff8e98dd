//! Page state
//!
//! Everything the page shows lives in one immutable snapshot. The reducer
//! produces a new snapshot for every accepted transition.

use serde::Serialize;

use crate::models::{AuditResult, AuditSource, Tab};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageState {
    pub active_tab: Tab,
    pub contract_code: String,
    pub contract_address: String,
    pub file_name: String,
    /// Source of the most recent accepted submission
    pub audit_source: Option<AuditSource>,
    pub audit_result: Option<AuditResult>,
    /// In-flight flag. Submissions are ignored while set.
    pub is_loading: bool,
    /// Id of the most recent accepted submission, 0 before the first one
    pub request_id: u64,
}

impl PageState {
    pub fn can_submit(&self) -> bool {
        !self.is_loading
    }
}
