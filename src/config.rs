//! Runtime widget configuration.

use crate::host::SpeechOptions;

pub const DEFAULT_LANGUAGE_HINT: &str = "zh-TW";
pub const DEFAULT_SPEECH_RATE: f32 = 0.8;
pub const DEFAULT_ATTRIBUTION: &str = "來自「台語・疊字每日」";
pub const DEFAULT_MEANING_DELIMITER: char = '，';
pub const DEFAULT_MOUNT_ID: &str = "taigi-daily";

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WidgetConfig {
    pub language_hint: String,
    /// Slightly slower than normal speech so learners can follow.
    pub speech_rate: f32,
    /// Last line of every share text.
    pub attribution: String,
    /// Separator used to cut the short meaning shown on the card.
    pub meaning_delimiter: char,
    /// Id of the element the widget mounts into (created if missing).
    pub mount_id: String,
    /// Log at debug level instead of info.
    pub verbose: bool,
    /// Use the host's speech synthesizer when it has one.
    pub speech_enabled: bool,
    /// Also raise notices as `alert()` dialogs; the notice line is always updated.
    pub alert_notices: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            language_hint: DEFAULT_LANGUAGE_HINT.to_string(),
            speech_rate: DEFAULT_SPEECH_RATE,
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            meaning_delimiter: DEFAULT_MEANING_DELIMITER,
            mount_id: DEFAULT_MOUNT_ID.to_string(),
            verbose: false,
            speech_enabled: true,
            alert_notices: true,
        }
    }
}

impl WidgetConfig {
    pub fn speech_options(&self) -> SpeechOptions {
        SpeechOptions {
            language_hint: self.language_hint.clone(),
            rate: self.speech_rate,
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }

    /// Parse a (possibly partial) JSON object; absent keys keep their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| crate::error::WidgetError::Config(e.to_string()))?;
        if !(config.speech_rate.is_finite() && config.speech_rate > 0.0) {
            return Err(crate::error::WidgetError::Config(format!(
                "speech_rate must be positive, got {}",
                config.speech_rate
            )));
        }
        Ok(config)
    }
}
