//! Audit Results tab

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::controller::PageState;
use crate::models::{AuditResult, AuditSource, Finding, Severity, SourceLine};

#[derive(Debug, Clone, Serialize)]
pub struct FindingRow {
    pub id: String,
    pub severity: Severity,
    pub color: &'static str,
    pub category: String,
    pub line: SourceLine,
    /// Confidence as a whole percentage
    pub confidence_pct: u32,
    pub description: String,
}

impl From<&Finding> for FindingRow {
    fn from(f: &Finding) -> Self {
        Self {
            id: f.id.clone(),
            severity: f.severity,
            color: f.severity.color(),
            category: f.category.clone(),
            line: f.line,
            confidence_pct: (f.confidence * 100.0).round() as u32,
            description: f.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeverityCount {
    pub severity: Severity,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub audit_source: AuditSource,
    pub source_label: String,
    pub timestamp: DateTime<Utc>,
    pub summary: String,
    pub score: u32,
    pub severity_counts: Vec<SeverityCount>,
    pub findings: Vec<FindingRow>,
    pub recommendations: Vec<String>,
}

impl ReportView {
    fn from_result(result: &AuditResult) -> Self {
        Self {
            audit_source: result.source,
            source_label: result.source_label.clone(),
            timestamp: result.timestamp,
            summary: result.summary.clone(),
            score: result.score,
            severity_counts: Severity::ALL
                .into_iter()
                .map(|severity| SeverityCount {
                    severity,
                    count: result.count_by_severity(severity),
                })
                .collect(),
            findings: result.findings.iter().map(FindingRow::from).collect(),
            recommendations: result.recommendations.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResultsView {
    Loading { message: String },
    Empty { message: &'static str },
    Ready(ReportView),
}

impl ResultsView {
    pub fn build(state: &PageState) -> Self {
        if state.is_loading {
            let target = match state.audit_source {
                Some(AuditSource::Address) => "contract address",
                _ => "smart contract",
            };
            return ResultsView::Loading {
                message: format!("Analyzing {}... This may take a moment.", target),
            };
        }

        match &state.audit_result {
            Some(result) => ResultsView::Ready(ReportView::from_result(result)),
            None => ResultsView::Empty {
                message: "No audit results yet. Upload code or enter an address to start an audit.",
            },
        }
    }
}
