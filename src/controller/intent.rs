//! Intents emitted by the tab views, and the effects the reducer asks for

use serde::Deserialize;

use crate::models::{AuditRequest, AuditResult, Notification, Tab};

/// User intent, posted as JSON. Tags and fields are both camelCase:
/// `{"type": "uploadFile", "fileName": "Token.sol", "contents": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Intent {
    SelectTab { tab: Tab },
    EditCode { code: String },
    SetFileName { file_name: String },
    /// File picker: fills the code buffer and the file name together
    UploadFile { file_name: String, contents: String },
    EditAddress { address: String },
    SubmitCode,
    SubmitAddress,
}

/// Everything the reducer consumes
#[derive(Debug, Clone)]
pub enum Message {
    Intent(Intent),
    AuditCompleted {
        request_id: u64,
        request: AuditRequest,
        result: Box<AuditResult>,
    },
}

impl From<Intent> for Message {
    fn from(intent: Intent) -> Self {
        Message::Intent(intent)
    }
}

/// Side effects requested by a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Notify(Notification),
    StartAudit { request_id: u64, request: AuditRequest },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_intent_json_is_camel_case() {
        let intent: Intent = serde_json::from_value(json!({
            "type": "uploadFile",
            "fileName": "Token.sol",
            "contents": "contract Token {}",
        }))
        .unwrap();
        assert_eq!(
            intent,
            Intent::UploadFile {
                file_name: "Token.sol".to_string(),
                contents: "contract Token {}".to_string(),
            }
        );

        let intent: Intent = serde_json::from_value(json!({"type": "setFileName", "fileName": "A.sol"})).unwrap();
        assert_eq!(intent, Intent::SetFileName { file_name: "A.sol".to_string() });

        let snake = serde_json::from_value::<Intent>(json!({"type": "setFileName", "file_name": "A.sol"}));
        assert!(snake.is_err());
    }

    #[test]
    fn test_unit_intents() {
        let intent: Intent = serde_json::from_value(json!({"type": "submitAddress"})).unwrap();
        assert_eq!(intent, Intent::SubmitAddress);
        let intent: Intent = serde_json::from_value(json!({"type": "selectTab", "tab": "auditResults"})).unwrap();
        assert_eq!(intent, Intent::SelectTab { tab: Tab::AuditResults });
    }
}
