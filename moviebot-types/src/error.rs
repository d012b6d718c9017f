/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Error types shared by the backend contract and client-side validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of a failed backend response.
///
/// The backend reports failures as `{ "detail": ... }`. `detail` is usually a
/// human-readable string, but request validation failures carry a structured
/// list, so it is kept as raw JSON and only surfaced when it is a string.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The human-readable detail, if the backend sent one.
    pub fn message(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(|d| d.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Input rejected on the client before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Chat input was empty after trimming.
    #[error("message is empty")]
    EmptyMessage,

    /// A history entry arrived without a `role`.
    #[error("history entry {index} has no role")]
    MissingRole { index: usize },

    /// A required form field was blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Registration password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_exposes_string_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"user exists"}"#).unwrap();
        assert_eq!(body.message(), Some("user exists"));
    }

    #[test]
    fn error_body_ignores_structured_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":[{"loc":["body"],"msg":"field required"}]}"#)
                .unwrap();
        assert_eq!(body.message(), None);
    }

    #[test]
    fn error_body_tolerates_missing_detail() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message(), None);

        let blank: ErrorBody = serde_json::from_str(r#"{"detail":"   "}"#).unwrap();
        assert_eq!(blank.message(), None);
    }
}
