/// Why a proposed move is illegal. The display strings are part of the
/// engine contract; front-ends surface them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// the round-opening player must lead with the opening-suit 3
    MustOpen(Card),
    /// the cards do not form any known combination
    InvalidCombo,
    /// a well-formed combination that fails to beat the pile
    DoesNotBeat,
}

impl Display for Rejection {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Rejection::MustOpen(card) => write!(f, "Must include {} first", card),
            Rejection::InvalidCombo => write!(f, "Invalid combo"),
            Rejection::DoesNotBeat => write!(f, "Does not beat current"),
        }
    }
}

impl std::error::Error for Rejection {}

use crate::cards::card::Card;
use std::fmt::{Display, Formatter, Result};
