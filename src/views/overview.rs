//! Overview tab

use serde::Serialize;

use crate::models::Tab;

#[derive(Debug, Clone, Serialize)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    /// Tab the card links to
    pub target: Tab,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverviewView {
    pub badge: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub features: Vec<FeatureCard>,
    /// "Get started" button target
    pub call_to_action: Tab,
}

impl OverviewView {
    pub fn build() -> Self {
        Self {
            badge: "Smart Contract Security Auditor",
            headline: "AI-Powered Vulnerability Prediction",
            tagline: "Leverage advanced AI to audit your smart contracts, identify vulnerabilities, \
                      and predict potential security risks before deployment.",
            features: vec![
                FeatureCard {
                    title: "Code Audit",
                    description: "Upload or paste Solidity source for a full vulnerability scan.",
                    target: Tab::Upload,
                },
                FeatureCard {
                    title: "Address Audit",
                    description: "Audit a deployed contract straight from its address.",
                    target: Tab::AuditAddress,
                },
                FeatureCard {
                    title: "Risk Prediction",
                    description: "Forecast attack vectors that are likely to surface after deployment.",
                    target: Tab::Prediction,
                },
            ],
            call_to_action: Tab::Upload,
        }
    }
}
