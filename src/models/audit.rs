//! Audit model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Where an audit request came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditSource {
    Code,
    Address,
}

impl AuditSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditSource::Code => "code",
            AuditSource::Address => "address",
        }
    }
}

impl std::fmt::Display for AuditSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated audit request.
///
/// Only built through `logic::validate`, so the payload is never empty and an
/// address payload always matches the 40-hex-digit pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum AuditRequest {
    Code {
        payload: String,
        display_name: Option<String>,
    },
    Address {
        payload: String,
    },
}

impl AuditRequest {
    pub fn source(&self) -> AuditSource {
        match self {
            AuditRequest::Code { .. } => AuditSource::Code,
            AuditRequest::Address { .. } => AuditSource::Address,
        }
    }

    pub fn payload(&self) -> &str {
        match self {
            AuditRequest::Code { payload, .. } => payload,
            AuditRequest::Address { payload } => payload,
        }
    }

    /// Label shown at the top of the results tab
    pub fn source_label(&self) -> String {
        match self {
            AuditRequest::Code { display_name, .. } => display_name
                .clone()
                .unwrap_or_else(|| "PastedCode.sol".to_string()),
            AuditRequest::Address { payload } => format!("Contract at {}", payload),
        }
    }

    /// What the completion notification calls the audited thing
    pub fn subject(&self) -> String {
        match self {
            AuditRequest::Code { display_name, .. } => display_name
                .clone()
                .unwrap_or_else(|| "pasted code".to_string()),
            AuditRequest::Address { payload } => payload.clone(),
        }
    }
}

/// Finding severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::High, Severity::Medium, Severity::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    /// Points deducted from the security score
    pub fn weight(&self) -> u32 {
        match self {
            Severity::High => 20,
            Severity::Medium => 10,
            Severity::Low => 5,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Severity::High => "#ef4444",   // Red
            Severity::Medium => "#f59e0b", // Yellow
            Severity::Low => "#3b82f6",    // Blue
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Source line of a finding. Address audits have no source, so no line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLine {
    At(u32),
    NotApplicable,
}

impl Serialize for SourceLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SourceLine::At(line) => serializer.serialize_u32(*line),
            SourceLine::NotApplicable => serializer.serialize_str("N/A"),
        }
    }
}

impl std::fmt::Display for SourceLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceLine::At(line) => write!(f, "{}", line),
            SourceLine::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// A single reported vulnerability
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub id: String,
    pub severity: Severity,
    pub category: String,
    pub line: SourceLine,
    /// 0.0 - 1.0
    pub confidence: f32,
    pub description: String,
}

/// Forward-looking risk, distinct from a concrete finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictedRisk {
    pub category: String,
    pub likelihood: String,
    pub impact: String,
    pub notes: String,
}

/// Aggregate output of one audit request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditResult {
    pub source: AuditSource,
    pub source_label: String,
    pub timestamp: DateTime<Utc>,
    pub findings: Vec<Finding>,
    pub score: u32,
    pub summary: String,
    pub recommendations: Vec<String>,
    pub predicted_risks: Vec<PredictedRisk>,
}

impl AuditResult {
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.findings.iter().filter(|f| f.severity == severity).count()
    }
}
