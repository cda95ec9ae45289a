//! Structured error types for the Facture engine.
//!
//! There are only two real error sources: the record JSON fails to parse at
//! the input boundary, or a caller names a template id that is not in the
//! catalog. Rendering itself is pure computation and cannot fail.

use thiserror::Error;

/// The unified error type returned by all public Facture API functions.
#[derive(Debug, Error)]
pub enum FactureError {
    /// JSON input failed to parse as an invoice record.
    #[error("failed to parse invoice record: {source}{hint}")]
    Parse {
        source: serde_json::Error,
        /// Pre-rendered hint text (starts with a newline) or empty.
        hint: String,
    },

    /// A template id outside the ten catalog entries was requested.
    #[error("unknown template id `{0}` (run with --list-templates for the catalog)")]
    UnknownTemplate(String),
}

impl From<serde_json::Error> for FactureError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "\n  Hint: check for trailing commas, missing quotes, or unescaped characters."
            }
            serde_json::error::Category::Data => {
                "\n  Hint: the JSON is valid but doesn't match the invoice record schema. Check field names and types."
            }
            serde_json::error::Category::Eof => {
                "\n  Hint: unexpected end of input — is the JSON truncated?"
            }
            serde_json::error::Category::Io => "",
        };
        FactureError::Parse {
            source: e,
            hint: hint.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_carries_hint() {
        let err: FactureError = serde_json::from_str::<serde_json::Value>("{ bad")
            .unwrap_err()
            .into();
        let msg = err.to_string();
        assert!(msg.contains("failed to parse invoice record"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_unknown_template_message() {
        let err = FactureError::UnknownTemplate("funky".to_string());
        assert!(err.to_string().contains("`funky`"));
    }
}
