use super::game::Game;
use super::level::Level;
use super::player::Player;
use super::profile::Profile;
use crate::Utility;
use crate::cards::card::Card;
use crate::rules::combo::Combo;

/// Heuristic move score, compared lexicographically: combo-type priority,
/// then the win-immediately bonus, then top-rank value, then the low-card
/// penalty (Hard tier only).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Score([Utility; 4]);

impl Score {
    pub fn new(base: Utility, finish: Utility, rank: Utility, low: Utility) -> Self {
        Self([base, finish, rank, low])
    }

    /// flattened value, used by the one-ply lookahead
    pub fn total(&self) -> Utility {
        self.0.iter().sum()
    }
}

impl Game {
    /// Score one candidate move for `player` under an already-resolved
    /// profile. `lookahead` gates the recursive one-ply reply evaluation so
    /// the recursion stops after a single level.
    pub fn score_move(
        &self,
        player: &Player,
        mv: &[Card],
        profile: Profile,
        lookahead: bool,
    ) -> Score {
        let base = Combo::detect(mv, &self.rules)
            .map(|c| c.priority())
            .unwrap_or(0) as Utility;
        let top = mv
            .iter()
            .map(|c| u8::from(c.rank()))
            .max()
            .unwrap_or(0) as Utility;
        let remaining = player
            .hand
            .iter()
            .copied()
            .filter(|c| !mv.contains(c))
            .collect::<Vec<Card>>();
        let finish: Utility = if remaining.is_empty() { 1.0 } else { 0.0 };
        let diff = profile.multiplier();

        let mut low: Utility = 0.0;
        if profile.level == Level::Hard {
            low = -remaining
                .iter()
                .map(|c| u8::from(c.rank()) as Utility)
                .sum::<Utility>();
            if profile.lookahead && lookahead {
                let mut ghost = Player::new(&player.name, false);
                ghost.hand = remaining;
                let replies = self.generate_valid_moves(&ghost, Some(mv));
                let best = replies
                    .iter()
                    .map(|reply| self.score_move(&ghost, reply, profile, false))
                    .fold(None::<Score>, |best, s| match best {
                        Some(b) if b >= s => Some(b),
                        _ => Some(s),
                    });
                if let Some(best) = best {
                    low += best.total() / 10.0;
                }
            }
        }

        Score::new(
            base,
            finish * diff * profile.personality.finish_weight(),
            top * diff * profile.personality.rank_weight(),
            low,
        )
    }
}
