//! Pure derivation of what the card shows from the controller state. The DOM
//! layer in `web.rs` only copies these fields into elements.

use chrono::Datelike;

use crate::controller::{Mode, ViewController};

pub const DAILY_LABEL: &str = "今日・台語";
pub const BROWSE_LABEL: &str = "探索・台語";
pub const INFO_TITLE: &str = "每日一得";
pub const SHARE_LABEL: &str = "推廣台語";
pub const FOOTER_LABEL: &str = "Daily Taiwanese Words";
pub const SPEAK_TOOLTIP: &str = "點擊播放（需裝置支援台語語音，否則可能為國語發音）";
pub const PLACEHOLDER_TEXT: &str = "目前沒有可顯示的詞。";

/// Text color picked from the entry's `is_dark` flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Foreground {
    /// Light text over a dark card.
    Light,
    /// Dark text over a light card.
    Dark,
}

impl Foreground {
    pub fn text_color(self) -> &'static str {
        match self {
            Foreground::Light => "rgba(255, 255, 255, 0.95)",
            Foreground::Dark => "#292524",
        }
    }

    pub fn border_color(self) -> &'static str {
        match self {
            Foreground::Light => "rgba(255, 255, 255, 0.3)",
            Foreground::Dark => "rgba(41, 37, 36, 0.2)",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub mode_label: &'static str,
    pub day_of_month: u32,
    pub word: &'static str,
    pub romaji: &'static str,
    pub category: &'static str,
    pub background: &'static str,
    pub foreground: Foreground,
    pub short_meaning: &'static str,
    pub sentence: String,
    pub meaning_line: String,
    pub desc: &'static str,
    pub info_expanded: bool,
    pub speaking: bool,
    /// Highlight for the "today" button.
    pub daily_active: bool,
}

impl CardView {
    /// `None` while the controller shows the empty-catalog placeholder.
    pub fn build<D: Datelike>(controller: &ViewController<'_>, today: &D) -> Option<Self> {
        let entry = controller.current()?;
        let state = controller.state();
        let mode = state.mode();
        Some(Self {
            mode_label: match mode {
                Mode::Daily => DAILY_LABEL,
                Mode::Browse => BROWSE_LABEL,
            },
            day_of_month: today.day(),
            word: entry.word,
            romaji: entry.romaji,
            category: entry.category,
            background: entry.color_hex,
            foreground: if entry.is_dark {
                Foreground::Light
            } else {
                Foreground::Dark
            },
            short_meaning: entry.short_meaning(controller.config().meaning_delimiter),
            sentence: format!("「{}」", entry.context.sentence),
            meaning_line: format!("釋義：{}", entry.context.meaning),
            desc: entry.desc,
            info_expanded: state.info_expanded(),
            speaking: state.speaking(),
            daily_active: mode == Mode::Daily,
        })
    }
}
