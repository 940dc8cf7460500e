//! Scorecard
//!
//! Best stroke count per level. Serializable so the host can store it wherever
//! it keeps save data; this crate does no storage itself.

use serde::{Deserialize, Serialize};

use crate::error::GolfResult;

/// Highest level count a card will grow to
pub const MAX_LEVELS: usize = 256;

/// Best strokes per level index (`None` = not completed yet)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Scorecard {
    pub best: Vec<Option<u32>>,
}

impl Scorecard {
    /// Empty card sized for `level_count` levels
    pub fn new(level_count: usize) -> Self {
        Self {
            best: vec![None; level_count],
        }
    }

    /// Record a finished level. Returns true if it beat the previous best.
    ///
    /// Indices at or past `MAX_LEVELS` are ignored.
    pub fn record(&mut self, level_index: usize, strokes: u32) -> bool {
        if level_index >= MAX_LEVELS {
            log::warn!("Ignoring score for out-of-range level index {}", level_index);
            return false;
        }
        if level_index >= self.best.len() {
            self.best.resize(level_index + 1, None);
        }

        let slot = &mut self.best[level_index];
        let improved = slot.is_none_or(|best| strokes < best);
        if improved {
            *slot = Some(strokes);
            log::info!("New best for level {}: {}", level_index + 1, strokes);
        }
        improved
    }

    pub fn best(&self, level_index: usize) -> Option<u32> {
        self.best.get(level_index).copied().flatten()
    }

    /// Number of levels with a recorded score
    pub fn completed(&self) -> usize {
        self.best.iter().filter(|b| b.is_some()).count()
    }

    /// Sum of best scores over completed levels
    pub fn total(&self) -> u32 {
        self.best.iter().flatten().sum()
    }

    /// Best score relative to par (negative is under par)
    pub fn relative_to_par(&self, level_index: usize, par: u32) -> Option<i64> {
        self.best(level_index)
            .map(|strokes| i64::from(strokes) - i64::from(par))
    }

    pub fn to_json(&self) -> GolfResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> GolfResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
