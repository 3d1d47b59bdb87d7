use backend::Backend;
use board::GameOutcome;
use clap::{Parser, ValueEnum};
use monke::MonkePlayer;
use players::Player;
use terminal_ui::TerminalUIPlayer;

/// Who's making the moves for one side
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    /// Someone typing moves into this terminal
    Human,
    /// Random moves
    Random,
}

/// Play a game of chess in the terminal
#[derive(Debug, Parser)]
struct Args {
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    white: PlayerKind,
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    black: PlayerKind,
    /// Seed for the random players, so games can be replayed
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many moves (counting each side's separately)
    #[arg(long)]
    max_half_moves: Option<usize>,
}

fn make_player(kind: PlayerKind, name: &str, seed: Option<u64>) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(TerminalUIPlayer::new(name)),
        PlayerKind::Random => Box::new(seed.map_or_else(MonkePlayer::new, MonkePlayer::with_seed)),
    }
}

fn main() {
    let args = Args::parse();
    let white = make_player(args.white, "Player 1", args.seed);
    let black = make_player(args.black, "Player 2", args.seed.map(|seed| seed.wrapping_add(1)));
    let mut backend = Backend::new(white, black);
    let outcome = backend.play_game(args.max_half_moves);
    println!("{}", terminal_ui::render(backend.board()));
    match outcome {
        GameOutcome::Won(color) => println!("Checkmate! {} wins", backend.player_name(color)),
        GameOutcome::InProgress => println!(
            "Stopping after {} moves without a winner",
            backend.half_moves()
        ),
    }
}
