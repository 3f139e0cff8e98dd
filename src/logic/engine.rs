//! Audit Engine
//!
//! The seam a real analysis backend would plug into. Today only the mock
//! engine exists: it waits out a fixed delay and returns the fixed result.

use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::models::{AuditRequest, AuditResult};
use super::mock_audit;

#[async_trait]
pub trait AuditEngine: Send + Sync {
    /// Run one audit. Returns `None` if `cancel` fired first.
    async fn audit(&self, request: &AuditRequest, cancel: &CancellationToken) -> Option<AuditResult>;
}

/// Simulated backend with a fixed latency
#[derive(Debug, Clone)]
pub struct MockAuditEngine {
    delay: Duration,
}

impl MockAuditEngine {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockAuditEngine {
    fn default() -> Self {
        Self::new(Duration::from_millis(2500))
    }
}

#[async_trait]
impl AuditEngine for MockAuditEngine {
    async fn audit(&self, request: &AuditRequest, cancel: &CancellationToken) -> Option<AuditResult> {
        tracing::debug!(
            "Mock audit of {} ({} bytes) started, completing in {:?}",
            request.source(),
            request.payload().len(),
            self.delay
        );

        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("Mock audit cancelled");
                None
            }
            _ = tokio::time::sleep(self.delay) => {
                Some(mock_audit::synthesize(request, chrono::Utc::now()))
            }
        }
    }
}
