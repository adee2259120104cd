use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use cabin_quest::GameState;
use cabin_quest::engine::{Output, OutputBlock};
use tracing::error;
use tracing_subscriber::EnvFilter;

const DEFAULT_WORLD: &str = "worlds/cabin.toml";

fn flush_output(out: Output) {
    for block in out.blocks {
        match block {
            OutputBlock::Title(t) => println!("\n{t}"),
            OutputBlock::Text(line) => println!("{line}"),
            OutputBlock::Exits(exits) => println!("{exits}"),
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let world_path: PathBuf = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_WORLD));

    let loaded = match cabin_quest::load_world_from_file(&world_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!(path = %world_path.display(), "could not load world");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Welcome to {}!", loaded.world.name);
    if !loaded.world.desc.trim().is_empty() {
        println!("{}", loaded.world.desc.trim());
    }
    println!();
    println!("Type 'look' to look around, 'quit' to leave.");

    let mut game = GameState::new(loaded);
    match game.initialize() {
        Ok(out) => flush_output(out),
        Err(e) => {
            error!(error = %e, "start location cannot be rendered");
            return ExitCode::FAILURE;
        }
    }

    match run(&mut game) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("console error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(game: &mut GameState) -> io::Result<()> {
    let stdin = io::stdin();

    loop {
        print!("\nWhat next? ");
        io::stdout().flush()?;

        let mut input = String::new();
        if stdin.read_line(&mut input)? == 0 {
            println!("\nYou'll be back!");
            return Ok(());
        }

        let (out, quit) = game.step(input.trim());
        flush_output(out);

        if quit {
            return Ok(());
        }
    }
}
