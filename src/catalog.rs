//! Word catalog: the immutable table of reduplicated adjectives.
//!
//! Entries are plain `'static` data. `is_dark` is asserted per entry next to
//! its color rather than computed from it, so borderline colors keep the
//! contrast the entry author picked.

mod words;

pub use words::WORDS;

use crate::error::{Result, WidgetError};

/// Example sentence plus gloss for one entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WordContext {
    pub sentence: &'static str,
    pub meaning: &'static str,
}

/// One catalog row. Never displayed by `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WordEntry {
    pub id: &'static str,
    pub word: &'static str,
    pub romaji: &'static str,
    pub color_hex: &'static str,
    pub is_dark: bool,
    pub category: &'static str,
    pub context: WordContext,
    pub desc: &'static str,
}

impl WordEntry {
    /// Leading clause of the meaning, cut at the first `delimiter`.
    pub fn short_meaning(&self, delimiter: char) -> &'static str {
        self.context
            .meaning
            .split(delimiter)
            .next()
            .unwrap_or(self.context.meaning)
    }
}

/// Ordered, read-only view over a table of entries.
#[derive(Clone, Copy, Debug)]
pub struct Catalog<'a> {
    entries: &'a [WordEntry],
}

impl Catalog<'static> {
    /// The built-in table shipped with the widget.
    pub fn builtin() -> Self {
        Self::new(WORDS)
    }
}

impl<'a> Catalog<'a> {
    pub fn new(entries: &'a [WordEntry]) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a WordEntry> {
        self.entries.get(index)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Length as a non-zero count, or `EmptyCatalog`.
    pub(crate) fn require_entries(&self) -> Result<usize> {
        match self.entries.len() {
            0 => Err(WidgetError::EmptyCatalog),
            n => Ok(n),
        }
    }

    #[cfg(feature = "serde_json")]
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self.entries).map_err(|e| WidgetError::Encode(e.to_string()))
    }
}
