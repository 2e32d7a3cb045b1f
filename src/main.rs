use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, warn};
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};

use argus::evaluator::StateEvaluator;
use argus::input::KeyCommand;
use argus::store::{SignalSnapshot, SignalStore};
use argus::types::EvaluationResult;
use argus::Config;

#[derive(Parser)]
#[command(name = "argus")]
#[command(about = "Device health evaluation from VPN, heartbeat and shutdown signals", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch signal changes interactively and print the evaluated state
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Watch => watch().await?,
    }

    Ok(())
}

async fn watch() -> Result<()> {
    let config = Config::from_env();
    let mut store = SignalStore::from_config(&config);

    // new devices report their state before any event arrives
    let snapshot = store.snapshot();
    render(&snapshot, &StateEvaluator::evaluate(&snapshot))?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(key) = line.trim().chars().next() else {
            continue;
        };
        debug!("input: {key}");

        match KeyCommand::parse(key) {
            Ok(KeyCommand::Quit) => break,
            Ok(command) => {
                let (snapshot, result) = command.apply(&mut store);
                render(&snapshot, &result)?;
            }
            Err(err) => warn!("{err}"),
        }
    }

    Ok(())
}

fn render(snapshot: &SignalSnapshot, result: &EvaluationResult) -> Result<()> {
    println!("================");
    let state = json!({
        "state": result,
        "signals": snapshot,
    });
    println!("{}", serde_json::to_string_pretty(&state)?);

    Ok(())
}
