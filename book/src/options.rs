use anyhow::Result;
use common::{Config, ConfigLoader};

/// Tuning knobs for the consumers of the book: the expansion trade-off and
/// the move-selection thresholds.
#[derive(Clone, Debug, PartialEq)]
pub struct BookOptions {
    /// Weight of value regret against depth in expansion priorities.
    pub alpha: f32,
    /// Exploration bonus per log-visit in move selection.
    pub count_weight: f32,
    /// Minimum visits before the book recommends a move.
    pub min_count: u32,
}

impl Default for BookOptions {
    fn default() -> Self {
        Self {
            alpha: 50.0,
            count_weight: 0.02,
            min_count: 5,
        }
    }
}

impl Config for BookOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            alpha: config
                .get("book_alpha")
                .and_then(|v| v.as_f32())
                .unwrap_or(defaults.alpha),
            count_weight: config
                .get("book_count_weight")
                .and_then(|v| v.as_f32())
                .unwrap_or(defaults.count_weight),
            min_count: config
                .get("book_min_count")
                .and_then(|v| v.as_usize())
                .unwrap_or(defaults.min_count as usize) as u32,
        })
    }
}
