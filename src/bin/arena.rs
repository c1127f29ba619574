use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use connect_four_search::ai::{Agent, Algorithm, RandomAgent, SearchAgent};
use connect_four_search::arena::run_match;
use connect_four_search::config::AppConfig;
use connect_four_search::game::{Board, Player};

/// Pit search agents against each other, or analyse a single position.
#[derive(Parser)]
#[command(name = "arena", about = "Headless Connect Four matches between search agents")]
struct Cli {
    /// First agent: minimax, alphabeta, expectimax or random
    #[arg(long, default_value = "alphabeta")]
    a: String,

    /// Second agent: minimax, alphabeta, expectimax or random
    #[arg(long, default_value = "random")]
    b: String,

    /// Search depth (defaults to the configured depth)
    #[arg(long)]
    depth: Option<usize>,

    /// Number of games to play
    #[arg(long)]
    games: Option<usize>,

    /// Seed for random agents
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Print match statistics as JSON
    #[arg(long)]
    json: bool,

    /// Analyse a position instead of playing: rows top first, separated by
    /// '/', using '.', 'X' and 'O'
    #[arg(long)]
    position: Option<String>,

    /// Player to move in --position (1 or 2)
    #[arg(long, default_value_t = 1)]
    player: u8,

    /// Print a default configuration file and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(games) = cli.games {
        config.arena.games = games;
    }
    if cli.seed.is_some() {
        config.arena.seed = cli.seed;
    }
    config.validate()?;

    if let Some(position) = &cli.position {
        return analyse(&config, position, cli.player);
    }

    let mut a = build_agent(&cli.a, &config, 0)?;
    let mut b = build_agent(&cli.b, &config, 1)?;
    let board = config.board.empty_board();
    let stats = run_match(a.as_mut(), b.as_mut(), config.arena.games, &board)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("-------------------------------------------");
        println!("{} vs {} ({} games)", stats.agent_a, stats.agent_b, stats.games);
        println!(
            "A wins: {} | B wins: {} | draws: {} | A win rate: {:.1}% | draw rate: {:.1}% | avg_len: {:.1}",
            stats.a_wins,
            stats.b_wins,
            stats.draws,
            stats.a_win_rate() * 100.0,
            stats.draw_rate() * 100.0,
            stats.average_game_length()
        );
    }
    Ok(())
}

fn build_agent(spec: &str, config: &AppConfig, offset: u64) -> Result<Box<dyn Agent>> {
    if spec.eq_ignore_ascii_case("random") {
        let agent = match config.arena.seed {
            Some(seed) => RandomAgent::seeded(seed.wrapping_add(offset)),
            None => RandomAgent::new(),
        };
        return Ok(Box::new(agent));
    }
    let algorithm: Algorithm = spec.parse()?;
    let agent = SearchAgent::with_heuristic(
        algorithm,
        config.search.depth,
        config.search.heuristic(),
    );
    log::info!(
        "agent '{}': {} searching {} plies",
        spec,
        agent.algorithm().name(),
        agent.depth()
    );
    Ok(Box::new(agent))
}

fn analyse(config: &AppConfig, position: &str, player: u8) -> Result<()> {
    let rows: Vec<&str> = position.split('/').collect();
    let board = Board::from_rows(&rows).context("parsing --position")?;
    let player = match player {
        1 => Player::One,
        2 => Player::Two,
        other => bail!("unknown player {} (expected 1 or 2)", other),
    };

    print!("{board}");
    let heuristic = config.search.heuristic();
    for algorithm in Algorithm::ALL {
        let report = algorithm.search(&heuristic, player, &board, config.search.depth);
        match report.column {
            Some(col) => println!(
                "{:<20} column {} (value {:.2}, {} nodes)",
                algorithm.name(),
                col,
                report.value,
                report.nodes
            ),
            None => println!("{:<20} no move available", algorithm.name()),
        }
    }
    Ok(())
}
