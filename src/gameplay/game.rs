use super::level::Level;
use super::personality::Personality;
use super::player::AI_NAMES;
use super::player::Player;
use super::profile::AiConfig;
use super::profile::Profile;
use crate::cards;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::rules::combo::Combo;
use crate::rules::rejection::Rejection;
use crate::rules::rules::Rules;
use colored::Colorize;
use rand::seq::IndexedRandom;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// snapshot schema version; bumped whenever the serialized layout changes
const SCHEMA_VERSION: u32 = 1;

/// one resolved play on the pile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Play {
    pub player: usize,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Play,
    Pass,
}

/// structured per-round replay record
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub action: Action,
    pub player: usize,
    pub cards: Vec<Card>,
}

/// The aggregate root: players, pile, turn pointer, round bookkeeping,
/// undo snapshots, and the rule toggles everything else consults.
///
/// The serialized form carries exactly the fields a save file or undo
/// snapshot needs; replay maps, the undo stack itself, and AI tuning are
/// runtime-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    version: u32,
    pub players: Vec<Player>,
    pub pile: Vec<Play>,
    pub current_idx: usize,
    pub start_idx: usize,
    pub first_turn: bool,
    pub pass_count: usize,
    pub current_combo: Option<Vec<Card>>,
    pub history: Vec<(u32, String)>,
    pub current_round: u32,
    pub scores: BTreeMap<String, u32>,
    #[serde(flatten)]
    pub rules: Rules,
    #[serde(skip)]
    pub move_log: BTreeMap<u32, Vec<Record>>,
    #[serde(skip)]
    pub round_states: BTreeMap<u32, String>,
    #[serde(skip)]
    pub snapshots: Vec<String>,
    #[serde(skip)]
    pub ai: AiConfig,
    /// set on search forks, which keep no undo stack
    #[serde(skip)]
    ephemeral: bool,
}

impl Game {
    /// one human at index 0, three AI opponents with distinct names
    pub fn new(rules: Rules) -> Self {
        let mut rng = rand::rng();
        let mut players = vec![Player::new("Player", true)];
        players.extend(
            AI_NAMES
                .choose_multiple(&mut rng, 3)
                .map(|name| Player::new(name, false)),
        );
        let scores = players.iter().map(|p| (p.name.clone(), 0)).collect();
        Self {
            version: SCHEMA_VERSION,
            players,
            pile: Vec::new(),
            current_idx: 0,
            start_idx: 0,
            first_turn: true,
            pass_count: 0,
            current_combo: None,
            history: Vec::new(),
            current_round: 1,
            scores,
            rules,
            move_log: BTreeMap::new(),
            round_states: BTreeMap::new(),
            snapshots: Vec::new(),
            ai: AiConfig::default(),
            ephemeral: false,
        }
    }

    /// Shuffle, deal and determine the starting player. Scores persist
    /// across setups; everything round-scoped starts over.
    pub fn setup(&mut self) {
        self.history.clear();
        self.move_log.clear();
        self.round_states.clear();
        self.pile.clear();
        self.current_combo = None;
        self.pass_count = 0;
        self.current_round = 1;
        self.first_turn = true;

        let mut deck = Deck::new(self.rules.flip_suit_rank);
        deck.shuffle();
        let hands = deck.deal(self.players.len());
        let rules = self.rules;
        for (player, hand) in self.players.iter_mut().zip(hands) {
            player.hand = hand;
            player.sort_hand(&rules);
            for bomb in player.find_bombs() {
                log::debug!("{} holds a dealt bomb {}", player.name, cards::show(&bomb));
            }
        }

        // whoever holds the opening-suit 3 leads
        let opening = self.rules.opening_card();
        for (i, player) in self.players.iter().enumerate() {
            if player.hand.contains(&opening) {
                self.current_idx = i;
                self.start_idx = i;
                log::info!("{} starts (holds {})", player.name, opening);
                break;
            }
        }

        self.round_states.insert(self.current_round, self.to_json());
        self.snapshots = vec![self.to_json()];
    }

    /// effective AI configuration for one player: per-player overrides
    /// merged over the game-wide settings
    pub fn profile(&self, player: &Player) -> Profile {
        Profile {
            level: player.ai_level.unwrap_or(self.ai.level),
            personality: player.ai_personality.unwrap_or(self.ai.personality),
            lookahead: self.ai.lookahead,
            depth: self.ai.depth,
        }
    }

    pub fn set_ai_level(&mut self, level: Level) {
        self.ai.level = level;
        if let Some(depth) = level.depth() {
            self.ai.depth = depth;
        }
    }

    pub fn set_personality(&mut self, personality: Personality) {
        self.ai.personality = personality;
        self.ai.bluff_chance = personality.bluff_chance();
    }

    pub fn set_player_ai_level(&mut self, idx: usize, level: Level) {
        self.players[idx].ai_level = Some(level);
    }

    pub fn set_player_personality(&mut self, idx: usize, personality: Option<Personality>) {
        self.players[idx].ai_personality = personality;
    }

    /// Validate `cards` against the pile. Empty `cards` is a pass, illegal
    /// only for the opening player's unexercised opening obligation.
    pub fn is_valid(
        &self,
        player: &Player,
        cards: &[Card],
        current: Option<&[Card]>,
    ) -> Result<(), Rejection> {
        let opening = self.rules.opening_card();
        let opener = player.name == self.players[self.start_idx].name;

        if cards.is_empty() {
            if self.first_turn && opener {
                return Err(Rejection::MustOpen(opening));
            }
            return Ok(());
        }

        let combo = Combo::detect(cards, &self.rules).ok_or(Rejection::InvalidCombo)?;

        if self.first_turn && opener && !cards.contains(&opening) {
            return Err(Rejection::MustOpen(opening));
        }

        let Some(current) = current else {
            return Ok(());
        };
        let prev = Combo::detect(current, &self.rules);

        if combo == Combo::Bomb && prev != Some(Combo::Bomb) {
            return match self.rules.bomb_override {
                true => Ok(()),
                false => Err(Rejection::DoesNotBeat),
            };
        }

        if combo == Combo::Bomb && prev == Some(Combo::Bomb) {
            if !self.rules.bomb_hierarchy {
                return Err(Rejection::DoesNotBeat);
            }
            let new = cards.iter().map(|c| c.rank()).max();
            let cur = current.iter().map(|c| c.rank()).max();
            return match new > cur {
                true => Ok(()),
                false => Err(Rejection::DoesNotBeat),
            };
        }

        if Some(combo) == prev {
            let new = cards.iter().map(|&c| self.rules.value(c)).max();
            let cur = current.iter().map(|&c| self.rules.value(c)).max();
            if combo == Combo::Sequence && self.rules.chain_cutting {
                if cards.len() >= current.len() && new > cur {
                    return Ok(());
                }
            } else if cards.len() == current.len() && new > cur {
                return Ok(());
            }
        }

        Err(Rejection::DoesNotBeat)
    }

    /// Apply a pre-validated play. Returns true iff the hand emptied (win).
    /// Panics if a card is not actually held; validate before mutating.
    pub fn process_play(&mut self, idx: usize, played: &[Card]) -> bool {
        if self.first_turn && idx == self.start_idx {
            self.first_turn = false;
        }
        self.pass_count = 0;

        let name = self.players[idx].name.clone();
        let line = format!("{} plays {}", name, cards::show(played));
        self.history.push((self.current_round, line.clone()));
        self.move_log
            .entry(self.current_round)
            .or_default()
            .push(Record {
                action: Action::Play,
                player: idx,
                cards: played.to_vec(),
            });

        let hand = &mut self.players[idx].hand;
        for card in played {
            let at = hand
                .iter()
                .position(|c| c == card)
                .unwrap_or_else(|| panic!("Card {} not in hand", card));
            hand.remove(at);
        }
        self.pile.push(Play {
            player: idx,
            cards: played.to_vec(),
        });
        self.current_combo = Some(played.to_vec());
        log::info!("{}", line);

        let won = self.players[idx].hand.is_empty();
        if won {
            log::info!("{}", format!("{} wins!", name).bright_green());
            *self.scores.entry(name).or_insert(0) += 1;
        }

        if !self.ephemeral {
            self.snapshots.push(self.to_json());
        }
        won
    }

    /// Record a pass; resets the pile when every other active player has
    /// passed on the standing combo.
    pub fn process_pass(&mut self, idx: usize) {
        self.pass_count += 1;
        let name = self.players[idx].name.clone();
        self.history
            .push((self.current_round, format!("{} passes", name)));
        self.move_log
            .entry(self.current_round)
            .or_default()
            .push(Record {
                action: Action::Pass,
                player: idx,
                cards: Vec::new(),
            });
        log::info!("{} passes", name);

        let active = self.players.iter().filter(|p| !p.hand.is_empty()).count();
        if self.current_combo.is_some() && self.pass_count >= active.saturating_sub(1) {
            self.reset_pile();
        }

        if !self.ephemeral {
            self.snapshots.push(self.to_json());
        }
    }

    /// Clear the pile after everyone has passed and open the next round.
    pub fn reset_pile(&mut self) {
        log::info!("All passed. Resetting pile.");
        self.summary_round();
        self.pile.clear();
        self.current_combo = None;
        self.pass_count = 0;
        self.current_round += 1;
        self.round_states.insert(self.current_round, self.to_json());
        self.move_log.entry(self.current_round).or_default();
    }

    fn summary_round(&self) {
        log::info!("{}", "-- Round Summary --".cyan());
        for play in &self.pile {
            log::info!(
                " {}: {}",
                self.players[play.player].name,
                cards::show(&play.cards)
            );
        }
        if let Some(last) = self.pile.last() {
            let winner = &self.players[last.player].name;
            log::info!("{} won the round with {}", winner, cards::show(&last.cards));
            log::info!("{} will start the next round", winner);
        }
        self.display_overview();
    }

    /// Advance the turn pointer. Eliminated players are skipped by the
    /// caller (`handle_turn`), not here.
    pub fn next_turn(&mut self) {
        self.current_idx = (self.current_idx + 1) % self.players.len();
    }

    /// Validate and process a pass for the current player.
    pub fn handle_pass(&mut self) -> bool {
        let idx = self.current_idx;
        if let Err(reason) =
            self.is_valid(&self.players[idx], &[], self.current_combo.as_deref())
        {
            log::info!("Invalid pass: {}", reason);
            return false;
        }
        self.process_pass(idx);
        self.next_turn();
        false
    }

    /// Process the current player's turn. Returns true when the game has
    /// been won. Invalid AI moves degrade to a pass; humans are re-prompted
    /// inside their own input loop before the move ever reaches here.
    pub fn handle_turn(&mut self) -> bool {
        let idx = self.current_idx;
        if self.players[idx].hand.is_empty() {
            self.next_turn();
            return false;
        }

        log::info!("{}", format!("-- {}'s turn --", self.players[idx].name).cyan());
        self.display_pile();
        self.display_overview();

        let mut cards = if self.players[idx].is_human {
            Human::decide(self)
        } else {
            Robot::decide(self)
        };

        if let Err(reason) =
            self.is_valid(&self.players[idx], &cards, self.current_combo.as_deref())
        {
            if !self.players[idx].is_human {
                log::info!("Invalid AI move ({}), passing", reason);
            }
            cards = Vec::new();
        }

        if cards.is_empty() {
            self.process_pass(idx);
        } else if self.process_play(idx, &cards) {
            return true;
        }

        self.next_turn();
        false
    }

    /// Run the blocking loop until a player wins.
    pub fn play(&mut self) {
        self.setup();
        while !self.handle_turn() {}
    }

    /// Revert to the previous snapshot. False when there is nothing to undo.
    pub fn undo_last(&mut self) -> bool {
        if self.snapshots.len() <= 1 {
            return false;
        }
        self.snapshots.pop();
        let prev = self.snapshots.last().cloned().expect("non-empty undo stack");
        self.from_json(&prev).expect("snapshots are well formed");
        true
    }

    /// best neutral-heuristic suggestion for the human, difficulty-blind
    pub fn hint(&self, current: Option<&[Card]>) -> Vec<Card> {
        let player = &self.players[0];
        let moves = self.generate_valid_moves(player, current);
        let profile = Profile::neutral();
        let mut best: Option<(Vec<Card>, super::score::Score)> = None;
        for mv in moves {
            let score = self.score_move(player, &mv, profile, true);
            if best.as_ref().map_or(true, |(_, b)| score > *b) {
                best = Some((mv, score));
            }
        }
        best.map(|(mv, _)| mv).unwrap_or_default()
    }

    /// players sorted by fewest cards remaining
    pub fn get_rankings(&self) -> Vec<(String, usize)> {
        let mut rankings = self
            .players
            .iter()
            .map(|p| (p.name.clone(), p.hand.len()))
            .collect::<Vec<(String, usize)>>();
        rankings.sort_by_key(|r| r.1);
        rankings
    }

    /// each player's most recent played combo, from the replay log
    pub fn get_last_hands(&self) -> Vec<(String, Vec<Card>)> {
        let mut last = BTreeMap::<usize, Vec<Card>>::new();
        for records in self.move_log.values() {
            for record in records {
                if record.action == Action::Play {
                    last.insert(record.player, record.cards.clone());
                }
            }
        }
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.clone(), last.get(&i).cloned().unwrap_or_default()))
            .collect()
    }

    pub fn display_pile(&self) {
        match self.pile.last() {
            None => log::info!("Pile: empty"),
            Some(play) => {
                let shape = match Combo::detect(&play.cards, &self.rules) {
                    Some(combo) => combo.to_string(),
                    None => "none".to_string(),
                };
                log::info!(
                    "Pile: {} -> {} ({})",
                    self.players[play.player].name,
                    cards::show(&play.cards),
                    shape
                );
            }
        }
    }

    pub fn display_hand(&self, player: &Player) {
        log::info!("{}'s hand:", player.name);
        for (i, card) in player.hand.iter().enumerate() {
            log::info!(" {}:{}", i + 1, card);
        }
    }

    pub fn display_overview(&self) {
        log::info!("Opponents' cards:");
        for player in &self.players[1..] {
            log::info!(" {}: {}", player.name, player.hand.len());
        }
    }

    /// Search clone: same observable state, no replay/undo bookkeeping.
    /// Ephemeral games never capture snapshots.
    pub(crate) fn fork(&self) -> Self {
        let mut fork = self.clone();
        fork.snapshots.clear();
        fork.move_log.clear();
        fork.round_states.clear();
        fork.ephemeral = true;
        fork
    }

    // serialization ----------------------------------------------------

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize game state")
    }

    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("serialize game state")
    }

    /// Restore from a snapshot string. Replay maps reset; the undo stack
    /// and AI tuning are untouched so undo keeps working after a load.
    pub fn from_json(&mut self, s: &str) -> Result<(), serde_json::Error> {
        self.absorb(serde_json::from_str(s)?)
    }

    pub fn from_value(&mut self, v: serde_json::Value) -> Result<(), serde_json::Error> {
        self.absorb(serde_json::from_value(v)?)
    }

    fn absorb(&mut self, loaded: Game) -> Result<(), serde_json::Error> {
        use serde::de::Error;
        if loaded.version != SCHEMA_VERSION {
            return Err(serde_json::Error::custom(format!(
                "unsupported snapshot version {}",
                loaded.version
            )));
        }
        let Game {
            version: _,
            players,
            pile,
            current_idx,
            start_idx,
            first_turn,
            pass_count,
            current_combo,
            history,
            current_round,
            scores,
            rules,
            ..
        } = loaded;
        self.players = players;
        self.pile = pile;
        self.current_idx = current_idx;
        self.start_idx = start_idx;
        self.first_turn = first_turn;
        self.pass_count = pass_count;
        self.current_combo = current_combo;
        self.history = history;
        self.current_round = current_round;
        self.scores = scores;
        self.rules = rules;
        self.move_log.clear();
        self.round_states.clear();
        Ok(())
    }
}

use crate::players::human::Human;
use crate::players::robot::Robot;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;
    use crate::cards::suit::Suit;

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    /// a mid-game position with known hands and no opening obligation
    fn rigged(hands: Vec<Vec<Card>>) -> Game {
        let mut game = Game::new(Rules::default());
        for (player, hand) in game.players.iter_mut().zip(hands) {
            player.hand = hand;
        }
        game.first_turn = false;
        game.snapshots = vec![game.to_json()];
        game
    }

    #[test]
    fn opening_player_cannot_pass_or_dodge_the_three() {
        let mut game = Game::new(Rules::default());
        game.setup();
        let opener = game.start_idx;
        let opening = game.rules.opening_card();
        assert!(game.players[opener].hand.contains(&opening));
        assert!(
            game.is_valid(&game.players[opener], &[], None)
                == Err(Rejection::MustOpen(opening))
        );
        let other = game
            .players[opener]
            .hand
            .iter()
            .copied()
            .find(|c| *c != opening)
            .expect("thirteen cards");
        assert!(
            game.is_valid(&game.players[opener], &[other], None)
                == Err(Rejection::MustOpen(opening))
        );
        assert!(game.is_valid(&game.players[opener], &[opening], None) == Ok(()));
        // everyone else may pass freely
        let bystander = (opener + 1) % 4;
        assert!(game.is_valid(&game.players[bystander], &[], None) == Ok(()));
    }

    #[test]
    fn bomb_out_wins_immediately() {
        let bomb = vec![
            card(Suit::Spade, Rank::Three),
            card(Suit::Heart, Rank::Three),
            card(Suit::Diamond, Rank::Three),
            card(Suit::Club, Rank::Three),
        ];
        let filler = vec![card(Suit::Spade, Rank::King)];
        let mut game = rigged(vec![
            bomb.clone(),
            filler.clone(),
            filler.clone(),
            filler.clone(),
        ]);
        let moves = game.generate_valid_moves(&game.players[0], None);
        assert!(moves.iter().any(|m| m.len() == 4));
        assert!(game.is_valid(&game.players[0], &bomb, None) == Ok(()));
        assert!(game.process_play(0, &bomb));
        assert!(game.players[0].hand.is_empty());
        assert!(game.scores["Player"] == 1);
    }

    #[test]
    fn pair_must_strictly_beat_pair() {
        let game = rigged(vec![
            vec![
                card(Suit::Spade, Rank::Five),
                card(Suit::Heart, Rank::Five),
                card(Suit::Spade, Rank::Four),
                card(Suit::Heart, Rank::Four),
            ],
            vec![],
            vec![],
            vec![],
        ]);
        // the standing pair holds the higher suits, so an equal-rank reply
        // from the lower suits must lose the tie-break
        let current = [card(Suit::Diamond, Rank::Four), card(Suit::Club, Rank::Four)];
        let fives = [card(Suit::Spade, Rank::Five), card(Suit::Heart, Rank::Five)];
        let fours = [card(Suit::Spade, Rank::Four), card(Suit::Heart, Rank::Four)];
        let single = [card(Suit::Spade, Rank::Five)];
        assert!(game.is_valid(&game.players[0], &fives, Some(&current)) == Ok(()));
        assert!(
            game.is_valid(&game.players[0], &fours, Some(&current))
                == Err(Rejection::DoesNotBeat)
        );
        // a lone 5 is a legal single but the wrong shape against a pair
        assert!(
            game.is_valid(&game.players[0], &single, Some(&current))
                == Err(Rejection::DoesNotBeat)
        );
    }

    #[test]
    fn equal_rank_pair_beats_on_suit() {
        let game = rigged(vec![vec![], vec![], vec![], vec![]]);
        let current = [card(Suit::Spade, Rank::Nine), card(Suit::Heart, Rank::Nine)];
        let higher = [card(Suit::Diamond, Rank::Nine), card(Suit::Club, Rank::Nine)];
        assert!(game.is_valid(&game.players[0], &higher, Some(&current)) == Ok(()));
    }

    #[test]
    fn bomb_override_toggle_gates_bombs() {
        let mut game = rigged(vec![vec![], vec![], vec![], vec![]]);
        let bomb = [
            card(Suit::Spade, Rank::Six),
            card(Suit::Heart, Rank::Six),
            card(Suit::Diamond, Rank::Six),
            card(Suit::Club, Rank::Six),
        ];
        let current = [card(Suit::Spade, Rank::Two)];
        assert!(game.is_valid(&game.players[0], &bomb, Some(&current)) == Ok(()));
        game.rules.bomb_override = false;
        assert!(
            game.is_valid(&game.players[0], &bomb, Some(&current))
                == Err(Rejection::DoesNotBeat)
        );
    }

    #[test]
    fn bomb_hierarchy_compares_top_rank_only() {
        let mut game = rigged(vec![vec![], vec![], vec![], vec![]]);
        let low = [
            card(Suit::Spade, Rank::Six),
            card(Suit::Heart, Rank::Six),
            card(Suit::Diamond, Rank::Six),
            card(Suit::Club, Rank::Six),
        ];
        let high = [
            card(Suit::Spade, Rank::Ten),
            card(Suit::Heart, Rank::Ten),
            card(Suit::Diamond, Rank::Ten),
            card(Suit::Club, Rank::Ten),
        ];
        assert!(game.is_valid(&game.players[0], &high, Some(&low)) == Ok(()));
        assert!(
            game.is_valid(&game.players[0], &low, Some(&high))
                == Err(Rejection::DoesNotBeat)
        );
        game.rules.bomb_hierarchy = false;
        assert!(
            game.is_valid(&game.players[0], &high, Some(&low))
                == Err(Rejection::DoesNotBeat)
        );
    }

    #[test]
    fn chain_cutting_lets_longer_sequences_through() {
        let mut game = rigged(vec![vec![], vec![], vec![], vec![]]);
        let current = [
            card(Suit::Spade, Rank::Four),
            card(Suit::Heart, Rank::Five),
            card(Suit::Club, Rank::Six),
        ];
        let longer = [
            card(Suit::Heart, Rank::Four),
            card(Suit::Spade, Rank::Five),
            card(Suit::Diamond, Rank::Six),
            card(Suit::Spade, Rank::Seven),
        ];
        assert!(
            game.is_valid(&game.players[0], &longer, Some(&current))
                == Err(Rejection::DoesNotBeat)
        );
        game.rules.chain_cutting = true;
        assert!(game.is_valid(&game.players[0], &longer, Some(&current)) == Ok(()));
        // same-length sequences stay legal with the toggle on
        let same = [
            card(Suit::Heart, Rank::Five),
            card(Suit::Spade, Rank::Six),
            card(Suit::Diamond, Rank::Seven),
        ];
        assert!(game.is_valid(&game.players[0], &same, Some(&current)) == Ok(()));
    }

    #[test]
    fn garbage_is_an_invalid_combo() {
        let game = rigged(vec![vec![], vec![], vec![], vec![]]);
        let garbage = [card(Suit::Spade, Rank::Four), card(Suit::Heart, Rank::Nine)];
        assert!(
            game.is_valid(&game.players[0], &garbage, None) == Err(Rejection::InvalidCombo)
        );
    }

    #[test]
    fn three_passes_reset_the_pile() {
        let mut game = rigged(vec![
            vec![card(Suit::Spade, Rank::Nine), card(Suit::Spade, Rank::Four)],
            vec![card(Suit::Heart, Rank::Three)],
            vec![card(Suit::Heart, Rank::Four)],
            vec![card(Suit::Heart, Rank::Five)],
        ]);
        game.process_play(0, &[card(Suit::Spade, Rank::Nine)]);
        game.next_turn();
        assert!(game.current_round == 1);
        for idx in [1, 2] {
            game.process_pass(idx);
            game.next_turn();
            assert!(game.current_combo.is_some());
        }
        game.process_pass(3);
        assert!(game.pile.is_empty());
        assert!(game.current_combo.is_none());
        assert!(game.pass_count == 0);
        assert!(game.current_round == 2);
        assert!(game.round_states.contains_key(&2));
    }

    #[test]
    fn json_round_trip_is_byte_identical() {
        let mut game = Game::new(Rules {
            chain_cutting: true,
            ..Rules::default()
        });
        game.setup();
        // push the state somewhere non-trivial
        let idx = game.current_idx;
        let opening = game.rules.opening_card();
        game.process_play(idx, &[opening]);
        game.next_turn();
        game.process_pass(game.current_idx);

        let json = game.to_json();
        let mut restored = Game::new(Rules::default());
        restored.from_json(&json).expect("well-formed snapshot");
        assert!(restored.to_json() == json);
    }

    #[test]
    fn from_json_rejects_unknown_version() {
        let game = rigged(vec![vec![], vec![], vec![], vec![]]);
        let json = game.to_json().replace("\"version\":1", "\"version\":99");
        let mut other = Game::new(Rules::default());
        assert!(other.from_json(&json).is_err());
    }

    #[test]
    fn undo_walks_back_to_the_deal() {
        let mut game = Game::new(Rules::default());
        game.setup();
        let initial = game.to_json();
        let idx = game.current_idx;
        let opening = game.rules.opening_card();
        game.process_play(idx, &[opening]);
        game.next_turn();
        game.process_pass(game.current_idx);
        game.next_turn();
        assert!(game.to_json() != initial);
        assert!(game.undo_last());
        assert!(game.undo_last());
        assert!(game.to_json() == initial);
        assert!(!game.undo_last());
    }

    #[test]
    fn rankings_sort_by_cards_left() {
        let mut game = rigged(vec![
            vec![card(Suit::Spade, Rank::Nine), card(Suit::Spade, Rank::Four)],
            vec![card(Suit::Heart, Rank::Three)],
            vec![],
            vec![card(Suit::Heart, Rank::Five)],
        ]);
        game.players[2].hand.clear();
        let rankings = game.get_rankings();
        assert!(rankings[0].1 == 0);
        assert!(rankings[3].1 == 2);
        assert!(rankings[3].0 == "Player");
    }

    #[test]
    fn last_hands_track_the_replay_log() {
        let mut game = rigged(vec![
            vec![card(Suit::Spade, Rank::Nine), card(Suit::Spade, Rank::Four)],
            vec![card(Suit::Heart, Rank::Three)],
            vec![card(Suit::Heart, Rank::Four)],
            vec![card(Suit::Heart, Rank::Five)],
        ]);
        game.process_play(0, &[card(Suit::Spade, Rank::Four)]);
        game.next_turn();
        game.process_pass(1);
        let last = game.get_last_hands();
        assert!(last[0].1 == vec![card(Suit::Spade, Rank::Four)]);
        assert!(last[1].1.is_empty());
    }

    #[test]
    fn forks_capture_no_snapshots() {
        let mut game = rigged(vec![
            vec![card(Suit::Spade, Rank::Nine), card(Suit::Spade, Rank::Four)],
            vec![card(Suit::Heart, Rank::Three)],
            vec![card(Suit::Heart, Rank::Four)],
            vec![card(Suit::Heart, Rank::Five)],
        ]);
        let mut fork = game.fork();
        fork.process_play(0, &[card(Suit::Spade, Rank::Nine)]);
        fork.next_turn();
        fork.process_pass(1);
        assert!(fork.snapshots.is_empty());
        // the real game still records every action
        game.process_play(0, &[card(Suit::Spade, Rank::Nine)]);
        assert!(game.snapshots.len() == 2);
    }

    #[test]
    fn playing_a_card_you_do_not_hold_panics() {
        let mut game = rigged(vec![
            vec![card(Suit::Spade, Rank::Nine)],
            vec![],
            vec![],
            vec![],
        ]);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            game.process_play(0, &[card(Suit::Club, Rank::Two)]);
        }));
        assert!(result.is_err());
    }

    #[test]
    fn deal_conserves_all_fifty_two_cards() {
        let mut game = Game::new(Rules::default());
        game.setup();
        let held = game
            .players
            .iter()
            .flat_map(|p| p.hand.iter().copied())
            .collect::<std::collections::HashSet<Card>>();
        assert!(held.len() == 52);
        assert!(game.players.iter().all(|p| p.hand.len() == 13));
    }
}
