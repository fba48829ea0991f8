use super::rules::Rules;
use crate::cards::card::Card;
use crate::cards::rank::Rank;

/// The legally-shaped card sets. Priority orders how the classifier and the
/// AI heuristic rank the shapes against each other.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Combo {
    Single,
    Pair,
    Triple,
    Sequence,
    Bomb,
}

impl Combo {
    pub const fn priority(&self) -> u8 {
        match self {
            Combo::Single => 1,
            Combo::Pair => 2,
            Combo::Triple => 3,
            Combo::Sequence => 4,
            Combo::Bomb => 5,
        }
    }

    /// classify a card set, highest-priority shape first. a four-of-a-kind
    /// must come back as a bomb, never as anything weaker it also resembles.
    pub fn detect(cards: &[Card], rules: &Rules) -> Option<Combo> {
        if is_bomb(cards) {
            Some(Combo::Bomb)
        } else if is_sequence(cards, rules) {
            Some(Combo::Sequence)
        } else if is_triple(cards) {
            Some(Combo::Triple)
        } else if is_pair(cards) {
            Some(Combo::Pair)
        } else if is_single(cards) {
            Some(Combo::Single)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Combo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Combo::Single => "single",
                Combo::Pair => "pair",
                Combo::Triple => "triple",
                Combo::Sequence => "sequence",
                Combo::Bomb => "bomb",
            }
        )
    }
}

pub fn is_single(cards: &[Card]) -> bool {
    cards.len() == 1
}

pub fn is_pair(cards: &[Card]) -> bool {
    cards.len() == 2 && uniform(cards)
}

pub fn is_triple(cards: &[Card]) -> bool {
    cards.len() == 3 && uniform(cards)
}

pub fn is_bomb(cards: &[Card]) -> bool {
    cards.len() == 4 && uniform(cards)
}

/// ≥3 distinct strictly-consecutive ranks. Rank 2 is excluded from runs
/// unless the house rule allows it; the suited variant additionally requires
/// one suit throughout.
pub fn is_sequence(cards: &[Card], rules: &Rules) -> bool {
    if cards.len() < 3 {
        return false;
    }
    if !rules.allow_2_in_sequence && cards.iter().any(|c| c.rank() == Rank::Two) {
        return false;
    }
    if rules.suited_sequences && cards.iter().any(|c| c.suit() != cards[0].suit()) {
        return false;
    }
    let mut idx = cards.iter().map(|c| u8::from(c.rank())).collect::<Vec<u8>>();
    idx.sort_unstable();
    idx.windows(2).all(|w| w[1] == w[0] + 1)
}

fn uniform(cards: &[Card]) -> bool {
    cards.iter().all(|c| c.rank() == cards[0].rank())
}
