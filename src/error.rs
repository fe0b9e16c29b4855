//! Error taxonomy shared by the catalog, the controller and the host adapters.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// No daily entry can be computed from a catalog with zero rows.
    #[error("catalog has no entries")]
    EmptyCatalog,
    #[error("clipboard write failed: {0}")]
    ClipboardWrite(String),
    #[error("speech synthesis is not available on this host")]
    SpeechUnsupported,
    #[error("speech playback failed: {0}")]
    SpeechPlayback(String),
    #[error("random source failed: {0}")]
    Entropy(String),
    #[error("catalog encoding failed: {0}")]
    Encode(String),
    #[error("invalid widget config: {0}")]
    Config(String),
    #[error("dom error: {0}")]
    Dom(String),
}

pub type Result<T, E = WidgetError> = std::result::Result<T, E>;
