#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use salvo::{
    cli::{describe_turn, render_board, ConsoleSource, MAX_CONSOLE_BOARD},
    init_logging, Game, GameConfig, Side, Strategy,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer on this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = salvo::BOARD_SIZE, value_parser = board_size)]
        size: usize,
    },
    /// Watch the computer play against itself.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = salvo::BOARD_SIZE, value_parser = board_size)]
        size: usize,
    },
}

#[cfg(feature = "std")]
fn board_size(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if n == 0 || n > MAX_CONSOLE_BOARD {
        return Err(format!("board size must be between 1 and {}", MAX_CONSOLE_BOARD));
    }
    Ok(n)
}

#[cfg(feature = "std")]
fn match_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (player, seed, size, human) = match cli.command {
        Commands::Play { seed, size } => (
            Strategy::manual(ConsoleSource::stdio()),
            seed,
            size,
            true,
        ),
        Commands::Auto { seed, size } => (Strategy::automated(), seed, size, false),
    };
    let config = GameConfig::default().with_board_size(size);
    let mut game = Game::with_rng(config, player, Strategy::automated(), match_rng(seed))
        .map_err(|e| anyhow::anyhow!(e))?;

    if human {
        println!("Welcome to Salvo! Place your ships.");
    }
    game.setup().map_err(|e| anyhow::anyhow!(e))?;

    while game.winner().is_none() {
        let report = game.play_turn().map_err(|e| anyhow::anyhow!(e))?;
        println!("{}", describe_turn(&report));
        if !human && report.side == Side::Opponent {
            println!("--------------------------------------------");
        }
    }

    println!("\nYour board:\n{}", render_board(game.board(Side::Player).grid(), true));
    println!(
        "Computer's board:\n{}",
        render_board(game.board(Side::Opponent).grid(), true)
    );
    println!(
        "Score: you {} - computer {} after {} turns",
        game.score(Side::Player),
        game.score(Side::Opponent),
        game.turns_played()
    );
    match game.winner() {
        Some(Side::Player) => println!("Congratulations! You sank the whole fleet."),
        Some(Side::Opponent) => println!("The computer wins. All your ships are sunk."),
        None => {}
    }
    Ok(())
}
