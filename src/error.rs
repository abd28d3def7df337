//! Error kinds raised by the catalog engine.
//!
//! Recoverable problems (a bad connection string, an empty `<>` marker) are
//! collected next to the output of the call that found them. Precondition
//! violations and rejected payloads are returned as `Err`.

/// Errors produced while decoding or transforming catalog records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChartError {
    /// A connection string could not be turned into a usable index pair.
    /// The connection is skipped; the rest of the figure is still built.
    #[error("Malformed connection \"{raw}\": {reason}")]
    MalformedConnection { raw: String, reason: String },

    /// The caller broke a precondition (e.g. empty star list for a mean).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An empty `<>` marker at the given byte offset. Dropped from the narrative.
    #[error("Empty cross-reference marker at byte {offset}")]
    MalformedMarker { offset: usize },

    /// The data source could not deliver a payload.
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// A payload failed decoding or validation at the boundary.
    #[error("Decode error: {0}")]
    Decode(String),
}

pub type ChartResult<T> = std::result::Result<T, ChartError>;

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        ChartError::Decode(err.to_string())
    }
}
