pub struct Robot;

impl Robot {
    /// Choose a move for the current AI player. No legal move means a pass;
    /// with a legal move available the personality may still bluff one.
    pub fn decide(game: &Game) -> Vec<Card> {
        let idx = game.current_idx;
        let player = &game.players[idx];
        let current = game.current_combo.as_deref();
        let moves = game.generate_valid_moves(player, current);
        if moves.is_empty() {
            return Vec::new();
        }

        let profile = game.profile(player);
        let mut rng = rand::rng();
        if profile.personality != Personality::Random
            && rng.random::<f64>() < game.ai.bluff_chance
        {
            log::debug!("{} bluffs a pass", player.name);
            return Vec::new();
        }

        if profile.level == Level::Easy || profile.personality == Personality::Random {
            return moves.choose(&mut rng).cloned().expect("non-empty moves");
        }

        if profile.level.depth().is_some() {
            return game.minimax_decision(profile.depth, MC_THRESHOLD);
        }

        let mut best: Option<(Vec<Card>, Score)> = None;
        for mv in moves {
            let score = game.score_move(player, &mv, profile, true);
            if best.as_ref().map_or(true, |(_, b)| score > *b) {
                best = Some((mv, score));
            }
        }
        best.map(|(mv, _)| mv).unwrap_or_default()
    }
}

use crate::cards::card::Card;
use crate::gameplay::game::Game;
use crate::gameplay::level::Level;
use crate::gameplay::personality::Personality;
use crate::gameplay::score::Score;
use crate::gameplay::search::MC_THRESHOLD;
use rand::Rng;
use rand::seq::IndexedRandom;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;
    use crate::cards::suit::Suit;
    use crate::rules::rules::Rules;

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    fn rigged() -> Game {
        let mut game = Game::new(Rules::default());
        game.first_turn = false;
        game.current_idx = 1;
        game.players[1].hand = vec![
            card(Suit::Spade, Rank::Five),
            card(Suit::Heart, Rank::Five),
            card(Suit::Club, Rank::Nine),
        ];
        game.snapshots = vec![game.to_json()];
        game
    }

    #[test]
    fn no_legal_move_means_pass() {
        let mut game = rigged();
        game.current_combo = Some(vec![card(Suit::Club, Rank::Two)]);
        assert!(Robot::decide(&game).is_empty());
    }

    #[test]
    fn certain_bluff_always_passes() {
        let mut game = rigged();
        game.set_personality(Personality::Defensive);
        game.ai.bluff_chance = 1.0;
        assert!(Robot::decide(&game).is_empty());
    }

    #[test]
    fn random_personality_never_bluffs() {
        let mut game = rigged();
        game.set_personality(Personality::Random);
        game.ai.bluff_chance = 1.0;
        assert!(!Robot::decide(&game).is_empty());
    }

    #[test]
    fn heuristic_tiers_play_the_best_scoring_move() {
        // pair of fives outranks any single under the heuristic
        let game = rigged();
        let mv = Robot::decide(&game);
        assert!(mv.len() == 2);
        assert!(mv.iter().all(|c| c.rank() == Rank::Five));
    }

    #[test]
    fn easy_tier_still_plays_legally() {
        let mut game = rigged();
        game.set_ai_level(Level::Easy);
        let mv = Robot::decide(&game);
        assert!(game.is_valid(&game.players[1], &mv, None).is_ok());
        assert!(!mv.is_empty());
    }

    #[test]
    fn search_tiers_route_through_minimax() {
        let mut game = rigged();
        game.set_ai_level(Level::Expert);
        let mv = Robot::decide(&game);
        assert!(game.is_valid(&game.players[1], &mv, None).is_ok());
    }
}
