//! Data Transfer Objects for catalog endpoints.
//!
//! Successful responses need no wrapper: `POST /ports` answers with the
//! accepted ids and `GET /ports` with `PortEntry` values, both as bare JSON
//! arrays.

use serde::{Deserialize, Serialize};

/// Error body returned by every failing catalog endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error_message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error_message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_snake_case_key() {
        let json = serde_json::to_string(&ErrorResponse::new("boom")).unwrap();
        assert_eq!(json, r#"{"error_message":"boom"}"#);
    }
}
