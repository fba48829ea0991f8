use super::game::Game;
use crate::Utility;
use crate::cards::card::Card;
use rand::seq::IndexedRandom;

/// remaining depth beyond which minimax hands off to random rollouts
pub const MC_THRESHOLD: usize = 3;

/// playouts per Monte-Carlo leaf evaluation
const MC_SAMPLES: usize = 10;

impl Game {
    /// Choose a move for the seat to act by depth-limited minimax over
    /// forked game states. Always maximizes for `current_idx`.
    pub(crate) fn minimax_decision(&self, depth: usize, mc_threshold: usize) -> Vec<Card> {
        let maximizer = self.current_idx;
        let moves =
            self.generate_valid_moves(&self.players[maximizer], self.current_combo.as_deref());
        let mut best: Option<(Vec<Card>, Utility)> = None;
        for mv in moves {
            let mut fork = self.fork();
            fork.process_play(fork.current_idx, &mv);
            fork.next_turn();
            let value = fork.minimax(depth.saturating_sub(1), maximizer, mc_threshold);
            if best.as_ref().map_or(true, |(_, b)| value > *b) {
                best = Some((mv, value));
            }
        }
        best.map(|(mv, _)| mv).unwrap_or_default()
    }

    /// Evaluation is the maximizer's negated hand size, so emptying the
    /// hand is worth 0 and everything else is worse. Opponent turns
    /// minimize; a turn with no legal move recurses through a forced pass.
    pub(crate) fn minimax(&self, depth: usize, maximizer: usize, mc_threshold: usize) -> Utility {
        if depth > mc_threshold {
            return self.monte_carlo_eval(maximizer, MC_SAMPLES);
        }
        if depth == 0 || self.players.iter().any(|p| p.hand.is_empty()) {
            return -(self.players[maximizer].hand.len() as Utility);
        }

        let actor = self.current_idx;
        let moves = self.generate_valid_moves(&self.players[actor], self.current_combo.as_deref());
        if moves.is_empty() {
            let mut fork = self.fork();
            fork.process_pass(fork.current_idx);
            fork.next_turn();
            return fork.minimax(depth - 1, maximizer, mc_threshold);
        }

        let mut best: Option<Utility> = None;
        for mv in moves {
            let mut fork = self.fork();
            fork.process_play(fork.current_idx, &mv);
            fork.next_turn();
            let value = fork.minimax(depth - 1, maximizer, mc_threshold);
            best = Some(match best {
                None => value,
                Some(b) if actor == maximizer => b.max(value),
                Some(b) => b.min(value),
            });
        }
        best.expect("non-empty move list")
    }

    /// Approximate a state's value by random playouts to completion.
    fn monte_carlo_eval(&self, maximizer: usize, samples: usize) -> Utility {
        let mut rng = rand::rng();
        let mut total: Utility = 0.0;
        for _ in 0..samples {
            let mut rollout = self.fork();
            loop {
                if rollout.players.iter().any(|p| p.hand.is_empty()) {
                    break;
                }
                let actor = rollout.current_idx;
                let moves = rollout
                    .generate_valid_moves(&rollout.players[actor], rollout.current_combo.as_deref());
                match moves.choose(&mut rng) {
                    Some(mv) => {
                        if rollout.process_play(actor, mv) {
                            break;
                        }
                    }
                    None => rollout.process_pass(actor),
                }
                rollout.next_turn();
            }
            total += -(rollout.players[maximizer].hand.len() as Utility);
        }
        total / samples as Utility
    }
}
