use crate::cards::card::Card;
use crate::cards::suit::Suit;
use serde::{Deserialize, Serialize};

/// House-rule toggles. Every toggle is instance-scoped so two games with
/// different rules can coexist; legality and classification consult nothing
/// else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// permit rank 2 inside sequences
    pub allow_2_in_sequence: bool,
    /// reverse suit order; the opening card becomes 3♥
    pub flip_suit_rank: bool,
    /// a bomb beats any non-bomb combination
    pub bomb_override: bool,
    /// a longer sequence may beat a shorter one
    pub chain_cutting: bool,
    /// bombs beat each other by top rank; off rejects bomb-vs-bomb outright
    pub bomb_hierarchy: bool,
    /// sequences must be single-suited (legacy variant)
    pub suited_sequences: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            allow_2_in_sequence: false,
            flip_suit_rank: false,
            bomb_override: true,
            chain_cutting: false,
            bomb_hierarchy: true,
            suited_sequences: false,
        }
    }
}

impl Rules {
    pub fn opening_suit(&self) -> Suit {
        Suit::opening(self.flip_suit_rank)
    }
    pub fn opening_card(&self) -> Card {
        Card::opening(self.flip_suit_rank)
    }
    pub fn suit_index(&self, suit: Suit) -> u8 {
        suit.index(self.flip_suit_rank)
    }
    /// beat-order value of a card: rank first, suit as tie-break
    pub fn value(&self, card: Card) -> (u8, u8) {
        (u8::from(card.rank()), self.suit_index(card.suit()))
    }
}
