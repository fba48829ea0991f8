use super::level::Level;
use super::personality::Personality;
use crate::cards::card::Card;
use crate::rules::rules::Rules;
use serde::{Deserialize, Serialize};

/// pool the three AI opponents draw their names from
pub const AI_NAMES: [&str; 10] = [
    "Linh", "Phong", "Bao", "Trang", "My", "Tuan", "Nam", "Duy", "Ha", "Minh",
];

/// A human or AI participant. The hand order is display order only; legality
/// never depends on it. The optional fields override the game-wide AI
/// configuration for this player alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub is_human: bool,
    pub hand: Vec<Card>,
    pub ai_level: Option<Level>,
    pub ai_personality: Option<Personality>,
}

impl Player {
    pub fn new(name: &str, is_human: bool) -> Self {
        Self {
            name: name.to_string(),
            is_human,
            hand: Vec::new(),
            ai_level: None,
            ai_personality: None,
        }
    }

    /// sort by rank then suit under the game's suit order
    pub fn sort_hand(&mut self, rules: &Rules) {
        self.hand
            .sort_by_key(|c| (u8::from(c.rank()), rules.suit_index(c.suit())));
    }

    /// all four-of-a-kind sets currently held
    pub fn find_bombs(&self) -> Vec<Vec<Card>> {
        let mut counts = BTreeMap::<u8, Vec<Card>>::new();
        for &card in &self.hand {
            counts.entry(u8::from(card.rank())).or_default().push(card);
        }
        counts
            .into_values()
            .filter(|cards| cards.len() == 4)
            .collect()
    }
}

use std::collections::BTreeMap;
