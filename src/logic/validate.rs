//! Submission validation
//!
//! Client-side checks run before an audit starts. A rejected submission
//! never touches page state; it only produces a notification.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::{AuditRequest, Notification};

/// Ethereum-style address: `0x` followed by exactly 40 hex digits
static ADDRESS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("address pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("no contract code provided")]
    MissingCode,

    #[error("no contract address provided")]
    MissingAddress,

    #[error("malformed contract address")]
    InvalidAddress,
}

impl SubmitError {
    /// Warning toast shown for this rejection
    pub fn notification(&self) -> Notification {
        match self {
            SubmitError::MissingCode => Notification::destructive(
                "No Code Provided",
                "Please upload or paste smart contract code to audit.",
            ),
            SubmitError::MissingAddress => Notification::destructive(
                "No Address Provided",
                "Please enter a smart contract address to audit.",
            ),
            SubmitError::InvalidAddress => Notification::destructive(
                "Invalid Address",
                "Please enter a valid Ethereum-style address.",
            ),
        }
    }
}

pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_PATTERN.is_match(address)
}

/// Build a code request. An empty file name counts as no file name.
pub fn code_request(code: &str, file_name: &str) -> Result<AuditRequest, SubmitError> {
    if code.is_empty() {
        return Err(SubmitError::MissingCode);
    }

    let display_name = if file_name.is_empty() {
        None
    } else {
        Some(file_name.to_string())
    };

    Ok(AuditRequest::Code {
        payload: code.to_string(),
        display_name,
    })
}

pub fn address_request(address: &str) -> Result<AuditRequest, SubmitError> {
    if address.is_empty() {
        return Err(SubmitError::MissingAddress);
    }
    if !is_valid_address(address) {
        return Err(SubmitError::InvalidAddress);
    }

    Ok(AuditRequest::Address {
        payload: address.to_string(),
    })
}
