//! Diagnostic messages emitted by the renderer.

use serde::{Deserialize, Serialize};

/// Severity of a renderer diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Something was dropped or approximated; the output is still usable
    Warning,
    /// Something could not be converted
    Error,
}

/// A single free-text diagnostic produced during one conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticMessage {
    /// Message severity
    #[serde(rename = "type")]
    pub kind: MessageKind,

    /// Message text as emitted by the renderer
    #[serde(rename = "message")]
    pub text: String,
}

impl DiagnosticMessage {
    /// Create a warning.
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Warning,
            text: text.into(),
        }
    }

    /// Create an error.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    /// Check if this is a warning.
    pub fn is_warning(&self) -> bool {
        self.kind == MessageKind::Warning
    }

    /// Check if this is an error.
    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

/// Split messages into warning texts and error texts, keeping order.
pub fn split_messages(messages: &[DiagnosticMessage]) -> (Vec<String>, Vec<String>) {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    for message in messages {
        match message.kind {
            MessageKind::Warning => warnings.push(message.text.clone()),
            MessageKind::Error => errors.push(message.text.clone()),
        }
    }

    (warnings, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_messages() {
        let messages = vec![
            DiagnosticMessage::warning("w1"),
            DiagnosticMessage::error("e1"),
            DiagnosticMessage::warning("w2"),
        ];

        let (warnings, errors) = split_messages(&messages);
        assert_eq!(warnings, vec!["w1", "w2"]);
        assert_eq!(errors, vec!["e1"]);
    }

    #[test]
    fn test_message_json_shape() {
        let json = r#"{"type": "warning", "message": "An unrecognised element was ignored: w:tblPrEx"}"#;
        let message: DiagnosticMessage = serde_json::from_str(json).unwrap();

        assert!(message.is_warning());
        assert!(message.text.contains("w:tblPrEx"));
    }
}
