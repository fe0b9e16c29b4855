//! Contracts for the two host collaborators: clipboard and speech synthesis.
//! Both are optional; the controller takes `Option<&impl Trait>` and degrades
//! to a notice when one is missing.

use crate::error::Result;

/// Writes text to the system clipboard. Synchronous, best effort.
pub trait ClipboardWriter {
    fn write(&self, text: &str) -> Result<()>;
}

/// Playback parameters handed to the synthesizer with every request.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeechOptions {
    /// BCP-47 tag. Hosts without a Taiwanese voice usually fall back to Mandarin.
    pub language_hint: String,
    pub rate: f32,
}

/// Identity of one speech request. Completions carrying an older ticket than
/// the controller's latest are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpeechTicket(pub(crate) u64);

impl SpeechTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// How a speech request ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpeechOutcome {
    Finished,
    Failed(String),
}

/// Text-to-speech engine.
///
/// `speak` only starts playback. The implementation must later report the
/// outcome for `ticket` back to the owning controller through
/// [`ViewController::complete_speech`](crate::ViewController::complete_speech).
pub trait SpeechSynthesizer {
    /// Stop every queued or playing utterance.
    fn cancel_all(&self);
    fn speak(&self, text: &str, options: &SpeechOptions, ticket: SpeechTicket) -> Result<()>;
}
