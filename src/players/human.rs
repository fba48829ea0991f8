pub struct Human;

/// one parsed line of terminal input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(Vec<Card>),
    Pass,
    Hint,
    Help,
    Quit,
    Error(String),
}

impl Human {
    /// Prompt the human player until they produce a pass or a legal play.
    /// An unusable terminal degrades to a pass instead of crashing.
    pub fn decide(game: &Game) -> Vec<Card> {
        let player = &game.players[game.current_idx];
        let current = game.current_combo.as_deref();
        let opener = game.first_turn && game.current_idx == game.start_idx;
        let opening = game.rules.opening_card();
        game.display_hand(player);

        let mut failures = 0;
        loop {
            let line: String = match Input::new()
                .with_prompt("Enter cards or 'pass','hint','help','quit'")
                .allow_empty(true)
                .interact_text()
            {
                Ok(line) => line,
                Err(_) => {
                    log::info!("Input unsupported; defaulting to pass");
                    return Vec::new();
                }
            };
            match Self::parse_input(&line, &player.hand) {
                Command::Quit => {
                    log::info!("Exiting.");
                    std::process::exit(0);
                }
                Command::Help => {
                    log::info!("Commands: pass, hint, quit, or list card numbers/notation");
                }
                Command::Hint => {
                    log::info!("Hint: {}", cards::show(&game.hint(current)));
                }
                Command::Pass => {
                    if !opener {
                        return Vec::new();
                    }
                    log::info!(
                        "You must play a combo including {} on your first turn; cannot pass.",
                        opening
                    );
                    failures += 1;
                }
                Command::Error(msg) => {
                    log::info!("{}", msg);
                    if opener {
                        failures += 1;
                    }
                }
                Command::Play(cards) => match game.is_valid(player, &cards, current) {
                    Ok(()) => return cards,
                    Err(reason) => {
                        log::info!("Invalid: {}", reason);
                        if opener {
                            failures += 1;
                        }
                    }
                },
            }
            if opener && failures == 3 {
                log::info!(
                    "Reminder: your opening play must contain {}. Example: '{}'",
                    opening,
                    opening
                );
            }
        }
    }

    /// Parse a line into a command. Cards are given either in
    /// `<rank><symbol>` notation (e.g. `3♠`, `10♥`) or as 1-based indices
    /// into the hand listing; the two forms mix freely.
    pub fn parse_input(line: &str, hand: &[Card]) -> Command {
        match line.trim().to_lowercase().as_str() {
            "pass" => return Command::Pass,
            "hint" => return Command::Hint,
            "help" => return Command::Help,
            "quit" => return Command::Quit,
            _ => {}
        }

        let mut picked = Vec::new();
        for token in line.split_whitespace() {
            let card = match token.chars().last().and_then(Suit::from_symbol) {
                Some(suit) => {
                    let label = &token[..token.len() - suit.symbol().len_utf8()];
                    let rank = Rank::from_label(label);
                    match hand
                        .iter()
                        .copied()
                        .find(|c| Some(c.rank()) == rank && c.suit() == suit)
                    {
                        Some(card) => card,
                        None => return Command::Error(format!("Card {} not in hand", token)),
                    }
                }
                None => match token.parse::<usize>() {
                    Ok(i) if i >= 1 && i <= hand.len() => hand[i - 1],
                    _ => return Command::Error("Invalid index".to_string()),
                },
            };
            if picked.contains(&card) {
                return Command::Error("Duplicate card".to_string());
            }
            picked.push(card);
        }
        Command::Play(picked)
    }
}

use crate::cards;
use crate::cards::card::Card;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;
use crate::gameplay::game::Game;
use dialoguer::Input;
