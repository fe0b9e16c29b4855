//! View controller: owns the session's [`ViewState`] and applies the user
//! transitions to it.
//!
//! Every transition either succeeds or hands back a [`Notice`]; nothing
//! escapes as a raw error, so the UI glue only ever has text to show.

use chrono::Datelike;

use crate::catalog::{Catalog, WordEntry};
use crate::config::WidgetConfig;
use crate::daily::daily_index;
use crate::error::WidgetError;
use crate::host::{ClipboardWriter, SpeechOutcome, SpeechSynthesizer, SpeechTicket};
use crate::random::IndexSource;

pub const SHARE_COPIED: &str = "內容已複製到剪貼簿，分享給朋友做伙學台語！";

/// Display context of the card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// The date-derived entry.
    #[default]
    Daily,
    /// Any entry reached through random browsing.
    Browse,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Daily => "daily",
            Mode::Browse => "browse",
        }
    }
}

/// Session-local display state. Only [`ViewController`] mutates it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    current: Option<usize>,
    mode: Mode,
    info_expanded: bool,
    speaking: bool,
}

impl ViewState {
    /// Catalog index on display; `None` is the empty-catalog placeholder.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }
    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn info_expanded(&self) -> bool {
        self.info_expanded
    }
    pub fn speaking(&self) -> bool {
        self.speaking
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// User-visible message produced by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    cause: Option<WidgetError>,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
            cause: None,
        }
    }

    /// The error this notice was raised for, if any.
    pub fn cause(&self) -> Option<&WidgetError> {
        self.cause.as_ref()
    }
}

impl From<WidgetError> for Notice {
    fn from(err: WidgetError) -> Self {
        let message = match &err {
            WidgetError::EmptyCatalog => "目前沒有可顯示的詞。",
            WidgetError::ClipboardWrite(_) => "複製失敗，請手動複製內容。",
            WidgetError::SpeechUnsupported => "您的瀏覽器不支援語音播放。",
            WidgetError::SpeechPlayback(_) => "語音播放失敗，請稍後再試。",
            WidgetError::Entropy(_) => "隨機選詞失敗，請再試一次。",
            WidgetError::Encode(_) | WidgetError::Config(_) | WidgetError::Dom(_) => {
                "小工具載入失敗。"
            }
        };
        Self {
            level: NoticeLevel::Warning,
            message: message.to_string(),
            cause: Some(err),
        }
    }
}

/// Share snippet for `entry`: word, romanization, meaning, sentence, then the
/// attribution line.
pub fn share_text(entry: &WordEntry, attribution: &str) -> String {
    format!(
        "【{}】({})\n意思：{}\n例句：{}\n{}",
        entry.word, entry.romaji, entry.context.meaning, entry.context.sentence, attribution
    )
}

pub struct ViewController<'a> {
    catalog: Catalog<'a>,
    config: WidgetConfig,
    state: ViewState,
    // Generation of the newest speech request; completions for older ones are stale.
    speech_generation: u64,
}

impl<'a> ViewController<'a> {
    /// Starts a session on `today`'s entry in daily mode. An empty catalog
    /// leaves the placeholder (`current = None`) in place.
    pub fn new<D: Datelike>(catalog: Catalog<'a>, config: WidgetConfig, today: &D) -> Self {
        let mut controller = Self {
            catalog,
            config,
            state: ViewState::default(),
            speech_generation: 0,
        };
        if let Err(notice) = controller.select_today(today) {
            log::warn!("no daily entry: {}", notice.message);
        }
        controller
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn current(&self) -> Option<&'a WordEntry> {
        self.state.current.and_then(|i| self.catalog.get(i))
    }

    /// Show the date-derived entry and switch to daily mode.
    pub fn select_today<D: Datelike>(&mut self, today: &D) -> Result<&'a WordEntry, Notice> {
        let index = daily_index(&self.catalog, today)?;
        self.show(index, Mode::Daily)
    }

    /// Show a uniformly random entry (repeats allowed) and switch to browse mode.
    pub fn select_random<R: IndexSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&'a WordEntry, Notice> {
        let len = self.catalog.require_entries()?;
        let index = rng.pick(len)?;
        self.show(index, Mode::Browse)
    }

    /// Flip the info panel; returns the new value.
    pub fn toggle_info(&mut self) -> bool {
        self.state.info_expanded = !self.state.info_expanded;
        self.state.info_expanded
    }

    /// Speak the current word, superseding any request still in flight.
    ///
    /// A missing synthesizer short-circuits with the "not supported" notice
    /// and leaves `speaking` untouched.
    pub fn request_speech<S: SpeechSynthesizer + ?Sized>(
        &mut self,
        synth: Option<&S>,
    ) -> Result<SpeechTicket, Notice> {
        let Some(synth) = synth else {
            return Err(WidgetError::SpeechUnsupported.into());
        };
        let entry = self.current().ok_or(WidgetError::EmptyCatalog)?;

        synth.cancel_all();
        self.speech_generation += 1;
        let ticket = SpeechTicket(self.speech_generation);
        self.state.speaking = true;

        if let Err(err) = synth.speak(entry.word, &self.config.speech_options(), ticket) {
            log::warn!("speech request {} rejected: {err}", ticket.generation());
            self.state.speaking = false;
            return Err(err.into());
        }
        log::debug!("speech request {} started for {}", ticket.generation(), entry.id);
        Ok(ticket)
    }

    /// Report the end of a speech request. Stale tickets are ignored; a
    /// failure of the live one yields a notice.
    pub fn complete_speech(&mut self, ticket: SpeechTicket, outcome: SpeechOutcome) -> Option<Notice> {
        if ticket.generation() != self.speech_generation {
            log::debug!(
                "ignoring stale speech completion {} (latest {})",
                ticket.generation(),
                self.speech_generation
            );
            return None;
        }
        self.state.speaking = false;
        match outcome {
            SpeechOutcome::Finished => None,
            SpeechOutcome::Failed(reason) => {
                log::warn!("speech request {} failed: {reason}", ticket.generation());
                Some(WidgetError::SpeechPlayback(reason).into())
            }
        }
    }

    /// Share snippet for the current entry; `None` on the placeholder.
    pub fn share_text(&self) -> Option<String> {
        self.current()
            .map(|entry| share_text(entry, &self.config.attribution))
    }

    /// Copy the share snippet. Always returns something to show the user.
    pub fn share<C: ClipboardWriter + ?Sized>(&self, clipboard: Option<&C>) -> Notice {
        let Some(text) = self.share_text() else {
            return WidgetError::EmptyCatalog.into();
        };
        let written = match clipboard {
            Some(clipboard) => clipboard.write(&text),
            None => Err(WidgetError::ClipboardWrite("clipboard unavailable".into())),
        };
        match written {
            Ok(()) => Notice::info(SHARE_COPIED),
            Err(err) => {
                log::warn!("share failed: {err}");
                err.into()
            }
        }
    }

    fn show(&mut self, index: usize, mode: Mode) -> Result<&'a WordEntry, Notice> {
        let entry = self.catalog.get(index).ok_or(WidgetError::EmptyCatalog)?;
        self.state.current = Some(index);
        self.state.mode = mode;
        log::info!("{} entry {} ({}) at index {index}", mode.as_str(), entry.id, entry.word);
        Ok(entry)
    }
}
