//! Agent Battle
//!
//! Headless front end for the battle engine: runs a battle to completion or
//! one round per Enter key, printing the log as it grows.

use battle_core::{BattleConfig, BattleSession, RandomSource, RoundRecord, SessionSnapshot, TurnOrder};
use clap::Parser;
use serde::Serialize;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the battle
#[derive(Parser, Debug)]
#[command(name = "agent_battle")]
#[command(about = "Turn-based battle between two autonomous agents")]
struct Args {
    /// Path to a TOML config file (defaults to battle.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Name of the agent in the first slot
    #[arg(long)]
    first: Option<String>,

    /// Name of the agent in the second slot
    #[arg(long)]
    second: Option<String>,

    /// Starting health for both agents
    #[arg(long)]
    health: Option<i32>,

    /// Acting order: fixed or randomized
    #[arg(long)]
    order: Option<TurnOrder>,

    /// Log each turn's perception and decision
    #[arg(long)]
    narrate: bool,

    /// Stop after this many rounds even if nobody has fallen
    #[arg(long, default_value_t = 1000)]
    max_rounds: u32,

    /// Advance one round per Enter key; q quits
    #[arg(long)]
    interactive: bool,

    /// Print the final snapshot and round records as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct BattleReport<'a> {
    snapshot: SessionSnapshot,
    rounds: &'a [RoundRecord],
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;
    let mut session = BattleSession::from_config(&config);

    if args.interactive {
        run_interactive(&mut session, args.max_rounds)?;
    } else {
        session.run_to_completion(args.max_rounds);
        if !args.json {
            for line in session.log() {
                println!("{}", line);
            }
        }
    }

    if args.json {
        let report = BattleReport {
            snapshot: session.snapshot(),
            rounds: session.rounds(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_status(&session.snapshot());
    }

    Ok(())
}

/// Merge the config file with command line overrides.
fn build_config(args: &Args) -> Result<BattleConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => BattleConfig::from_file(path)?,
        None => BattleConfig::load_or_default(),
    };

    if let Some(name) = &args.first {
        config.first.name = name.clone();
    }
    if let Some(name) = &args.second {
        config.second.name = name.clone();
    }
    if let Some(health) = args.health {
        config.first.health = health;
        config.second.health = health;
    }
    if let Some(order) = args.order {
        config.resolution.turn_order = order;
    }
    if args.narrate {
        config.resolution.narrate_reasoning = true;
    }
    if args.seed.is_some() {
        config.resolution.seed = args.seed;
    }

    Ok(config)
}

fn run_interactive<R: RandomSource>(session: &mut BattleSession<R>, max_rounds: u32) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut printed = 0;

    println!("Press Enter to fight the next round, q to quit.");
    print_status(&session.snapshot());

    for line in stdin.lock().lines() {
        if line?.trim().eq_ignore_ascii_case("q") {
            break;
        }
        if session.round_number() > max_rounds && !session.battle_over() {
            println!("Round limit of {} reached.", max_rounds);
            break;
        }

        session.advance();
        for entry in &session.log()[printed..] {
            println!("{}", entry);
        }
        printed = session.log().len();
        print_status(&session.snapshot());
        stdout.flush()?;
    }

    Ok(())
}

fn print_status(snapshot: &SessionSnapshot) {
    println!(
        "{} (HP: {})  vs  {} (HP: {})",
        snapshot.first.name, snapshot.first.health, snapshot.second.name, snapshot.second.health
    );
    if let Some(winner) = &snapshot.winner {
        println!("Winner: {} after {} rounds", winner, snapshot.rounds_fought());
    }
}
