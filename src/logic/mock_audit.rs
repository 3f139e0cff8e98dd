//! Mock Audit
//!
//! Builds the fixed result every audit returns. The finding set does not
//! depend on the submitted code or address; only the source label and the
//! line column change with the request source.

use chrono::{DateTime, Utc};

use crate::models::{
    AuditRequest, AuditResult, AuditSource, Finding, PredictedRisk, Severity, SourceLine,
};

const MAX_SCORE: u32 = 100;

/// (id, severity, category, line in code audits, confidence, description)
const MOCK_FINDINGS: [(&str, Severity, &str, u32, f32, &str); 3] = [
    (
        "VULN001",
        Severity::High,
        "Reentrancy",
        42,
        0.95,
        "Potential reentrancy vulnerability in the withdraw function.",
    ),
    (
        "VULN002",
        Severity::Medium,
        "Integer Overflow",
        101,
        0.78,
        "Possible integer overflow when calculating rewards.",
    ),
    (
        "VULN003",
        Severity::Low,
        "Gas Limit Issue",
        77,
        0.60,
        "Function may exceed gas limit with large inputs.",
    ),
];

const RECOMMENDATIONS: [&str; 3] = [
    "Implement checks-effects-interactions pattern to prevent reentrancy.",
    "Use SafeMath libraries for arithmetic operations.",
    "Optimize gas usage in loops and complex functions.",
];

/// `100 - sum of severity weights`, floored at 0
pub fn security_score(findings: &[Finding]) -> u32 {
    let deducted: u32 = findings.iter().map(|f| f.severity.weight()).sum();
    MAX_SCORE.saturating_sub(deducted)
}

pub fn mock_findings(source: AuditSource) -> Vec<Finding> {
    MOCK_FINDINGS
        .iter()
        .map(|&(id, severity, category, line, confidence, description)| Finding {
            id: id.to_string(),
            severity,
            category: category.to_string(),
            line: match source {
                AuditSource::Code => SourceLine::At(line),
                AuditSource::Address => SourceLine::NotApplicable,
            },
            confidence,
            description: description.to_string(),
        })
        .collect()
}

pub fn mock_predictions() -> Vec<PredictedRisk> {
    vec![PredictedRisk {
        category: "Oracle Manipulation".to_string(),
        likelihood: "Medium".to_string(),
        impact: "High".to_string(),
        notes: "Based on external calls and data dependencies.".to_string(),
    }]
}

pub fn summary(findings: usize, score: u32) -> String {
    format!(
        "Found {} potential vulnerabilities. Overall security score: {}/{}.",
        findings, score, MAX_SCORE
    )
}

/// Build the audit result for a validated request
pub fn synthesize(request: &AuditRequest, timestamp: DateTime<Utc>) -> AuditResult {
    let source = request.source();
    let findings = mock_findings(source);
    let score = security_score(&findings);

    AuditResult {
        source,
        source_label: request.source_label(),
        timestamp,
        summary: summary(findings.len(), score),
        score,
        findings,
        recommendations: RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
        predicted_risks: mock_predictions(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::validate::{address_request, code_request};

    #[test]
    fn test_fixed_score_is_65() {
        let findings = mock_findings(AuditSource::Code);
        assert_eq!(security_score(&findings), 65);
    }

    #[test]
    fn test_score_floors_at_zero() {
        let high = mock_findings(AuditSource::Code).remove(0);
        let findings = vec![high; 6]; // 120 points
        assert_eq!(security_score(&findings), 0);
        assert_eq!(security_score(&[]), 100);
    }

    #[test]
    fn test_code_result() {
        let request = code_request("pragma solidity ^0.8.0;", "Vault.sol").unwrap();
        let result = synthesize(&request, Utc::now());

        assert_eq!(result.source, AuditSource::Code);
        assert_eq!(result.source_label, "Vault.sol");
        assert_eq!(result.findings.len(), 3);
        assert_eq!(result.predicted_risks.len(), 1);
        assert_eq!(result.recommendations.len(), 3);
        assert_eq!(result.score, 65);
        assert_eq!(
            result.summary,
            "Found 3 potential vulnerabilities. Overall security score: 65/100."
        );

        let lines: Vec<SourceLine> = result.findings.iter().map(|f| f.line).collect();
        assert_eq!(lines, [SourceLine::At(42), SourceLine::At(101), SourceLine::At(77)]);
    }

    #[test]
    fn test_address_result_has_no_lines() {
        let request = address_request("0x1234567890123456789012345678901234567890").unwrap();
        let result = synthesize(&request, Utc::now());

        assert_eq!(
            result.source_label,
            "Contract at 0x1234567890123456789012345678901234567890"
        );
        assert!(result.findings.iter().all(|f| f.line == SourceLine::NotApplicable));

        let json = serde_json::to_value(&result.findings[0]).unwrap();
        assert_eq!(json["line"], "N/A");
        assert_eq!(json["severity"], "High");
    }

    #[test]
    fn test_result_ignores_input_content() {
        let now = Utc::now();
        let a = synthesize(&code_request("contract A {}", "").unwrap(), now);
        let b = synthesize(&code_request("contract B { uint x; }", "").unwrap(), now);
        assert_eq!(a, b);
    }

    #[test]
    fn test_severity_order_and_confidence() {
        let findings = mock_findings(AuditSource::Code);
        let severities: Vec<Severity> = findings.iter().map(|f| f.severity).collect();
        assert_eq!(severities, Severity::ALL);
        assert!(findings.iter().all(|f| (0.0..=1.0).contains(&f.confidence)));
        assert_eq!(findings[0].category, "Reentrancy");
        assert_eq!(mock_predictions()[0].category, "Oracle Manipulation");
    }
}
