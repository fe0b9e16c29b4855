//! Random index sources for browse mode.

use crate::error::{Result, WidgetError};

/// Picks an index in `[0, upper)`. An `upper` of zero is `EmptyCatalog`.
pub trait IndexSource {
    fn pick(&mut self, upper: usize) -> Result<usize>;
}

/// Uniform picks backed by the platform entropy source (`crypto.getRandomValues`
/// in the browser).
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl IndexSource for OsRandom {
    fn pick(&mut self, upper: usize) -> Result<usize> {
        if upper == 0 {
            return Err(WidgetError::EmptyCatalog);
        }
        let upper = upper as u64;
        // Reject the tail of the u64 range that would bias small indices.
        let zone = u64::MAX - (u64::MAX % upper);
        loop {
            let mut buf = [0u8; 8];
            getrandom::getrandom(&mut buf).map_err(|e| WidgetError::Entropy(e.to_string()))?;
            let v = u64::from_le_bytes(buf);
            if v < zone {
                return Ok((v % upper) as usize);
            }
        }
    }
}

/// Replays a fixed list of indices (wrapping each modulo `upper`). Handy for
/// scripted demos and deterministic tests.
#[derive(Debug, Clone)]
pub struct Scripted {
    picks: Vec<usize>,
    next: usize,
}

impl Scripted {
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        Self { picks: picks.into(), next: 0 }
    }
}

impl IndexSource for Scripted {
    fn pick(&mut self, upper: usize) -> Result<usize> {
        if upper == 0 {
            return Err(WidgetError::EmptyCatalog);
        }
        let raw = self
            .picks
            .get(self.next % self.picks.len().max(1))
            .copied()
            .unwrap_or(0);
        self.next += 1;
        Ok(raw % upper)
    }
}
