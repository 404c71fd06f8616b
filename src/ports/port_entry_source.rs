//! Port Entry Source - Interface for reading catalog entries from an upload.
//!
//! An entry source yields unvalidated [`PortEntry`] values one at a time, in
//! document order. Validation happens later, when an entry becomes a `Port`.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

/// Structural failures while reading a catalog document.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("incorrect json token {token}, expected {expected}")]
    UnexpectedToken {
        token: String,
        expected: &'static str,
    },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("invalid json string: {0}")]
    InvalidString(#[source] serde_json::Error),

    #[error("failed to decode port {id}: {source}")]
    InvalidEntry {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Port for sequential catalog entry reading
#[async_trait]
pub trait PortEntrySource: Send {
    /// Pull the next entry.
    ///
    /// Returns `Ok(None)` once the document is exhausted. Not restartable:
    /// after an error the source only yields `Ok(None)`.
    async fn next_entry(&mut self) -> Result<Option<PortEntry>, DecodeError>;
}

/// One catalog entry as it appears in a document, with its key merged in as
/// `id`.
///
/// Every attribute is optional in the document; absent and `null` values
/// become empty. No validation happens here, an entry without a `code` is
/// decoded fine and rejected later when it is turned into a `Port`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub alias: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub regions: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub coordinates: Vec<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub province: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timezone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub unlocs: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
