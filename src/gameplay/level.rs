/// AI difficulty tiers. Easy plays random legal moves, Normal and Hard score
/// heuristically, Expert and Master run the adversarial search.
#[derive(
    Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[value(rename_all = "PascalCase")]
pub enum Level {
    Easy,
    #[default]
    Normal,
    Hard,
    Expert,
    Master,
}

impl Level {
    /// weight applied to the heuristic score components
    pub fn multiplier(&self) -> Utility {
        match self {
            Level::Easy => 0.5,
            Level::Normal => 1.0,
            Level::Hard => 2.0,
            Level::Expert => 3.0,
            Level::Master => 4.0,
        }
    }

    /// intrinsic search depth of the minimax tiers
    pub fn depth(&self) -> Option<usize> {
        match self {
            Level::Expert => Some(1),
            Level::Master => Some(2),
            _ => None,
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Level::Easy => write!(f, "Easy"),
            Level::Normal => write!(f, "Normal"),
            Level::Hard => write!(f, "Hard"),
            Level::Expert => write!(f, "Expert"),
            Level::Master => write!(f, "Master"),
        }
    }
}

use crate::Utility;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers_increase_with_tier() {
        assert!(Level::Easy.multiplier() < Level::Normal.multiplier());
        assert!(Level::Normal.multiplier() < Level::Hard.multiplier());
        assert!(Level::Hard.multiplier() < Level::Master.multiplier());
    }

    #[test]
    fn only_search_tiers_carry_depth() {
        assert!(Level::Normal.depth() == None);
        assert!(Level::Expert.depth() == Some(1));
        assert!(Level::Master.depth() == Some(2));
    }
}
