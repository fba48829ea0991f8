use clap::Parser;
use tienlen::gameplay::game::Game;
use tienlen::gameplay::level::Level;
use tienlen::gameplay::personality::Personality;
use tienlen::rules::rules::Rules;

#[derive(Parser)]
#[command(version, about = "Play Tiến Lên in the terminal")]
struct Args {
    /// AI difficulty level
    #[arg(long, value_enum, default_value_t = Level::Normal)]
    ai: Level,
    /// AI personality style
    #[arg(long, value_enum, default_value_t = Personality::Balanced)]
    personality: Personality,
    /// enable AI lookahead when scoring moves
    #[arg(long)]
    lookahead: bool,
    /// search depth for Expert/Master AI
    #[arg(long)]
    depth: Option<usize>,
    /// permit rank 2 inside sequences
    #[arg(long)]
    allow_2_in_sequence: bool,
    /// reverse suit order and open on 3♥
    #[arg(long)]
    flip_suit_rank: bool,
    /// forbid bombs from beating non-bomb combos
    #[arg(long)]
    no_bomb_override: bool,
    /// let longer sequences cut shorter ones
    #[arg(long)]
    chain_cutting: bool,
    /// reject bomb-vs-bomb plays outright
    #[arg(long)]
    no_bomb_hierarchy: bool,
    /// require sequences to be single-suited
    #[arg(long)]
    suited_sequences: bool,
}

fn main() {
    tienlen::log();
    let args = Args::parse();
    let rules = Rules {
        allow_2_in_sequence: args.allow_2_in_sequence,
        flip_suit_rank: args.flip_suit_rank,
        bomb_override: !args.no_bomb_override,
        chain_cutting: args.chain_cutting,
        bomb_hierarchy: !args.no_bomb_hierarchy,
        suited_sequences: args.suited_sequences,
    };
    let mut game = Game::new(rules);
    game.set_ai_level(args.ai);
    game.set_personality(args.personality);
    game.ai.lookahead = args.lookahead;
    if let Some(depth) = args.depth {
        game.ai.depth = depth;
    }
    game.play();
    for (name, left) in game.get_rankings() {
        log::info!("{}: {} cards left", name, left);
    }
}
