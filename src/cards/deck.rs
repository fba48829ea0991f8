use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use rand::seq::SliceRandom;

/// A standard 52-card deck. Built in canonical order (suits by their
/// effective index, ranks ascending) so seeded shuffles reproduce games.
#[derive(Debug, Clone)]
pub struct Deck(Vec<Card>);

impl Deck {
    pub fn new(flip: bool) -> Self {
        let mut suits = Suit::all();
        suits.sort_by_key(|s| s.index(flip));
        Self(
            suits
                .iter()
                .flat_map(|&s| Rank::all().into_iter().map(move |r| Card::new(s, r)))
                .collect(),
        )
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub fn shuffle(&mut self) {
        self.0.shuffle(&mut rand::rng());
    }

    /// partition into n equal hands, in deal order
    pub fn deal(&self, n: usize) -> Vec<Vec<Card>> {
        let size = self.0.len() / n;
        (0..n)
            .map(|i| self.0[i * size..(i + 1) * size].to_vec())
            .collect()
    }
}
