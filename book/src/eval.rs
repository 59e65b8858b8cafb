use std::fmt::{self, Display, Formatter};

use log::warn;

use crate::error::BookError;

/// Sentinel magnitude marking a proven result in the persisted value field.
/// Probabilistic evaluations live in [0, 1].
pub const PROVEN_MAGNITUDE: f32 = 10_000.0;

/// Evaluation of a position from the perspective of the player to move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Eval {
    Win,
    Loss,
    Estimate(f32),
}

impl Eval {
    /// Classifies a persisted value. A value that is neither a proven-result
    /// sentinel nor inside [0, 1] means the record is damaged.
    pub fn from_f32(value: f32) -> Result<Self, BookError> {
        if value == PROVEN_MAGNITUDE {
            Ok(Eval::Win)
        } else if value == -PROVEN_MAGNITUDE {
            Ok(Eval::Loss)
        } else if (0.0..=1.0).contains(&value) {
            Ok(Eval::Estimate(value))
        } else {
            warn!("evaluation {} is neither a proven result nor in [0, 1]", value);
            Err(BookError::Corrupt(format!(
                "evaluation out of range: {}",
                value
            )))
        }
    }

    /// Sentinel encoding. Proven results dominate every estimate, so this is
    /// also the total order used when comparing evaluations.
    pub fn as_f32(self) -> f32 {
        match self {
            Eval::Win => PROVEN_MAGNITUDE,
            Eval::Loss => -PROVEN_MAGNITUDE,
            Eval::Estimate(p) => p,
        }
    }

    /// The same evaluation seen by the other player. A proven win for one
    /// side is a proven loss for the other.
    pub fn invert(self) -> Self {
        match self {
            Eval::Win => Eval::Loss,
            Eval::Loss => Eval::Win,
            Eval::Estimate(p) => Eval::Estimate(1.0 - p),
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Eval::Estimate(_))
    }

    pub fn is_win(self) -> bool {
        self == Eval::Win
    }

    pub fn is_loss(self) -> bool {
        self == Eval::Loss
    }
}

impl Display for Eval {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Eval::Win => write!(f, "W"),
            Eval::Loss => write!(f, "L"),
            Eval::Estimate(p) => write!(f, "{:.3}", p),
        }
    }
}
