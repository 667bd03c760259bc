//! Interactive game of draughts against the computer in the terminal.

use std::io;

use anyhow::Context;
use checkers::checkers::core::Player;
use checkers::checkers::position::Position;
use checkers::search::{Difficulty, DEFAULT_TABLE_CAPACITY};
use checkers::{Config, Engine};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Difficulty level: 1 (easy), 2 (medium) or 3 (hard). Asked at the start
    /// of the game when omitted.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    difficulty: Option<u8>,

    /// Side played by the human. Dark moves first.
    #[arg(long, value_enum, default_value_t = Side::Dark)]
    human: Side,

    /// Number of positions kept in the transposition table during a search.
    #[arg(long, default_value_t = DEFAULT_TABLE_CAPACITY)]
    table_capacity: usize,

    /// Starting position in the compact layout notation, e.g.
    /// "8/8/8/8/4l3/3d4/8/8 d".
    #[arg(long)]
    position: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum Side {
    Dark,
    Light,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::Dark => Self::Dark,
            Side::Light => Self::Light,
        }
    }
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .target(env_logger::Target::Stderr)
    .init();

    checkers::print_engine_info();
    checkers::print_binary_info();

    if let Err(e) = run(&args) {
        log::error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let position = match &args.position {
        Some(layout) => Position::from_layout(layout).context("parsing --position")?,
        None => Position::starting(),
    };
    let config = Config {
        difficulty: args.difficulty.map(Difficulty::from),
        human: args.human.into(),
        table_capacity: args.table_capacity,
    };
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    Engine::new(&mut input, &mut output, config)
        .with_position(position)
        .game_loop()
}
