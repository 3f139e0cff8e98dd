//! Tab model

use serde::{Deserialize, Serialize};

/// The six fixed destinations of the tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tab {
    #[default]
    Overview,
    Upload,
    AuditAddress,
    AuditResults,
    Prediction,
    Technology,
}

impl Tab {
    /// Tab bar order
    pub const ALL: [Tab; 6] = [
        Tab::Overview,
        Tab::Upload,
        Tab::AuditAddress,
        Tab::AuditResults,
        Tab::Prediction,
        Tab::Technology,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Upload => "upload",
            Tab::AuditAddress => "auditAddress",
            Tab::AuditResults => "auditResults",
            Tab::Prediction => "prediction",
            Tab::Technology => "technology",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Upload => "Upload Code",
            Tab::AuditAddress => "Audit Address",
            Tab::AuditResults => "Audit Results",
            Tab::Prediction => "Prediction",
            Tab::Technology => "Technology",
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| format!("Unknown tab: {}", s))
    }
}
