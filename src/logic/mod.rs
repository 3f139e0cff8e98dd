//! Audit logic: validation, mock result synthesis, and the engine seam

pub mod validate;
pub mod mock_audit;
pub mod engine;

pub use engine::{AuditEngine, MockAuditEngine};
