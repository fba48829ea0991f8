/// AI personality traits modulating the heuristic weights and the bluff
/// frequency. Random suppresses bluffing entirely so that mode stays
/// deterministic about always producing a play.
#[derive(
    Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Personality {
    Aggressive,
    Defensive,
    #[default]
    Balanced,
    Random,
}

impl Personality {
    pub fn bluff_chance(&self) -> f64 {
        match self {
            Personality::Aggressive => 0.05,
            Personality::Defensive => 0.3,
            Personality::Balanced => 0.0,
            Personality::Random => 0.1,
        }
    }
    pub fn rank_weight(&self) -> Utility {
        match self {
            Personality::Aggressive => 1.5,
            Personality::Defensive => 0.7,
            _ => 1.0,
        }
    }
    pub fn finish_weight(&self) -> Utility {
        match self {
            Personality::Aggressive => 1.2,
            Personality::Defensive => 0.8,
            _ => 1.0,
        }
    }
}

impl Display for Personality {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Personality::Aggressive => write!(f, "aggressive"),
            Personality::Defensive => write!(f, "defensive"),
            Personality::Balanced => write!(f, "balanced"),
            Personality::Random => write!(f, "random"),
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
    fn balanced_never_bluffs() {
        assert!(Personality::Balanced.bluff_chance() == 0.0);
        assert!(Personality::Defensive.bluff_chance() > Personality::Aggressive.bluff_chance());
    }

    #[test]
    fn weights_skew_by_temperament() {
        assert!(Personality::Aggressive.rank_weight() > 1.0);
        assert!(Personality::Defensive.rank_weight() < 1.0);
        assert!(Personality::Balanced.rank_weight() == 1.0);
        assert!(Personality::Random.finish_weight() == 1.0);
    }
}
