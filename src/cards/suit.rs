#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    #[default]
    Spade = 0,
    Heart = 1,
    Diamond = 2,
    Club = 3,
}

impl Suit {
    pub const fn all() -> [Suit; 4] {
        [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club]
    }

    /// tie-break value used when comparing plays. flipping reverses the order.
    pub fn index(&self, flip: bool) -> u8 {
        if flip {
            3 - *self as u8
        } else {
            *self as u8
        }
    }

    /// the suit whose 3 opens the game
    pub fn opening(flip: bool) -> Suit {
        if flip { Suit::Heart } else { Suit::Spade }
    }

    pub const fn symbol(&self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
        }
    }
    pub fn from_symbol(c: char) -> Option<Suit> {
        match c {
            '♠' => Some(Suit::Spade),
            '♥' => Some(Suit::Heart),
            '♦' => Some(Suit::Diamond),
            '♣' => Some(Suit::Club),
            _ => None,
        }
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Spade,
            1 => Suit::Heart,
            2 => Suit::Diamond,
            3 => Suit::Club,
            _ => panic!("Invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

use serde::{Deserialize, Serialize};
