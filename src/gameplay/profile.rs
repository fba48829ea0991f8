use super::level::Level;
use super::personality::Personality;
use crate::Utility;

/// Game-wide AI tuning. Per-player overrides merge over this via
/// `Game::profile`.
#[derive(Debug, Clone, Copy)]
pub struct AiConfig {
    pub level: Level,
    pub personality: Personality,
    pub lookahead: bool,
    pub depth: usize,
    pub bluff_chance: f64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            level: Level::Normal,
            personality: Personality::Balanced,
            lookahead: false,
            depth: 1,
            bluff_chance: 0.0,
        }
    }
}

/// The effective AI configuration for one player, resolved in one place
/// instead of option-field fallthrough sprinkled across call sites.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub level: Level,
    pub personality: Personality,
    pub lookahead: bool,
    pub depth: usize,
}

impl Profile {
    pub fn multiplier(&self) -> Utility {
        self.level.multiplier()
    }

    /// difficulty-free profile used for human hints
    pub fn neutral() -> Self {
        Self {
            level: Level::Normal,
            personality: Personality::Balanced,
            lookahead: false,
            depth: 1,
        }
    }
}
