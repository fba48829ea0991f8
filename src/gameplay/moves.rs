use super::game::Game;
use super::player::Player;
use crate::cards::card::Card;
use crate::cards::rank::Rank;
use std::collections::BTreeMap;

impl Game {
    /// Every playable move for `player` against `current`. Candidate
    /// generation is bounded (rank groups and consecutive-rank runs, never
    /// the full subset lattice); legality stays single-sourced in
    /// `is_valid`, which every candidate passes through.
    pub fn generate_valid_moves(
        &self,
        player: &Player,
        current: Option<&[Card]>,
    ) -> Vec<Vec<Card>> {
        let mut moves = Vec::new();

        // singles
        for &card in &player.hand {
            if self.is_valid(player, &[card], current).is_ok() {
                moves.push(vec![card]);
            }
        }

        // pairs, triples and bombs from same-rank groups
        let mut by_rank = BTreeMap::<u8, Vec<Card>>::new();
        for &card in &player.hand {
            by_rank.entry(u8::from(card.rank())).or_default().push(card);
        }
        for group in by_rank.values() {
            for size in [2, 3] {
                if group.len() >= size {
                    for candidate in choose(group, size) {
                        if self.is_valid(player, &candidate, current).is_ok() {
                            moves.push(candidate);
                        }
                    }
                }
            }
            if group.len() == 4 {
                if self.is_valid(player, group, current).is_ok() {
                    moves.push(group.clone());
                }
            }
        }

        // sequences: extend each run of consecutive ranks, emitting the
        // cartesian product across rank buckets for every prefix >= 3
        let ranks = by_rank.keys().copied().collect::<Vec<u8>>();
        for i in 0..ranks.len() {
            let mut run = vec![ranks[i]];
            for j in i + 1..ranks.len() {
                if ranks[j] != run[run.len() - 1] + 1 {
                    break;
                }
                run.push(ranks[j]);
                if run.len() < 3 {
                    continue;
                }
                if !self.rules.allow_2_in_sequence && run.contains(&u8::from(Rank::Two)) {
                    continue;
                }
                let buckets = run
                    .iter()
                    .map(|r| by_rank[r].as_slice())
                    .collect::<Vec<&[Card]>>();
                for candidate in product(&buckets) {
                    if self.is_valid(player, &candidate, current).is_ok() {
                        moves.push(candidate);
                    }
                }
            }
        }

        moves
    }
}

/// all k-subsets of a same-rank group (k is at most 3 here)
fn choose(cards: &[Card], k: usize) -> Vec<Vec<Card>> {
    let mut out = Vec::new();
    let mut picked = Vec::with_capacity(k);
    descend(cards, k, 0, &mut picked, &mut out);
    out
}

fn descend(cards: &[Card], k: usize, from: usize, picked: &mut Vec<Card>, out: &mut Vec<Vec<Card>>) {
    if picked.len() == k {
        out.push(picked.clone());
        return;
    }
    for i in from..cards.len() {
        picked.push(cards[i]);
        descend(cards, k, i + 1, picked, out);
        picked.pop();
    }
}

/// cartesian product: one card from each rank bucket
fn product(buckets: &[&[Card]]) -> Vec<Vec<Card>> {
    buckets.iter().fold(vec![Vec::new()], |acc, bucket| {
        acc.iter()
            .flat_map(|prefix| {
                bucket.iter().map(move |&card| {
                    let mut next = prefix.clone();
                    next.push(card);
                    next
                })
            })
            .collect()
    })
}
