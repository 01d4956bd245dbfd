use salvo::{Game, GameConfig, Side, Strategy};
use serde::Serialize;

#[derive(Serialize)]
struct Summary {
    seed: u64,
    config: GameConfig,
    winner: Side,
    turns: usize,
    player_score: usize,
    opponent_score: usize,
}

fn main() -> anyhow::Result<()> {
    salvo::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let config = GameConfig::default();
    let mut game = Game::new(
        config.clone(),
        Strategy::automated(),
        Strategy::automated(),
        seed,
    )
    .map_err(|e| anyhow::anyhow!(e))?;
    let winner = game.run().map_err(|e| anyhow::anyhow!(e))?;

    let summary = Summary {
        seed,
        config,
        winner,
        turns: game.turns_played(),
        player_score: game.score(Side::Player),
        opponent_score: game.score(Side::Opponent),
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
