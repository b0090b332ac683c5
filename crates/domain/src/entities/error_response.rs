//! Error body returned by the service on non-success status codes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured error payload
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Short summary of the problem
    #[serde(default)]
    pub title: String,
    /// HTTP status code
    #[serde(default)]
    pub status: i32,
    /// Namespaced vendor error code, e.g. `E605001`
    #[serde(default)]
    pub code: String,
    /// Human-readable cause
    #[serde(default)]
    pub cause: String,
    /// Suggested action to fix the problem
    #[serde(default)]
    pub action: String,
    /// Identifier to quote when contacting support
    #[serde(default)]
    pub correlation_id: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.status)?;
        if !self.code.is_empty() {
            write!(f, " [{}]", self.code)?;
        }
        if !self.cause.is_empty() {
            write!(f, ": {}", self.cause)?;
        }
        Ok(())
    }
}
