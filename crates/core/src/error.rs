//! Error model for the material-inward workflow.

use thiserror::Error;

/// Result type used across the workflow crates.
pub type InwardResult<T> = Result<T, InwardError>;

/// Workflow-level error.
///
/// Malformed vendor payloads are deliberately absent from this taxonomy: every
/// parse failure inside the extractor degrades to "fewer vendor references"
/// and never surfaces as an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InwardError {
    /// One or more fields failed validation. Messages are surfaced verbatim,
    /// joined in the order they were collected. Nothing is written.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// A stock item could not be located during a quantity adjustment.
    #[error("stock item not found: {item_code}")]
    NotFound { item_code: String },

    /// A row-store collaborator call failed. Reported per-call; never retried
    /// automatically.
    #[error("store request failed: {0}")]
    Transport(String),
}

impl InwardError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(vec![msg.into()])
    }

    pub fn validation_all(messages: Vec<String>) -> Self {
        Self::Validation(messages)
    }

    pub fn not_found(item_code: impl Into<String>) -> Self {
        Self::NotFound {
            item_code: item_code.into(),
        }
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_joined_verbatim() {
        let err = InwardError::validation_all(vec![
            "date is required".to_string(),
            "quantity must be a positive number".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "validation failed: date is required; quantity must be a positive number"
        );
    }

    #[test]
    fn not_found_names_the_item_code() {
        let err = InwardError::not_found("AB001");
        assert_eq!(err.to_string(), "stock item not found: AB001");
    }
}
