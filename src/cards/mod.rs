pub mod card;
pub mod deck;
pub mod rank;
pub mod suit;

/// render a card list the way the action log and history show it
pub fn show(cards: &[card::Card]) -> String {
    format!(
        "[{}]",
        cards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>()
            .join(" ")
    )
}
