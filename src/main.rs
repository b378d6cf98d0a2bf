use anyhow::{Context, Result};
use beaver_search::{search_with, SearchConfig, SearchOutcome, DEFAULT_PROGRESS_INTERVAL};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "beaver-search",
    about = "Search for the Busy Beaver value of an (n-state, k-symbol) Turing machine class"
)]
struct Cli {
    /// Number of states n.
    #[arg(long, default_value_t = 2)]
    states: u32,
    /// Number of tape symbols k (including blank).
    #[arg(long, default_value_t = 3)]
    symbols: u32,
    /// Log a milestone every this many machines (0 disables).
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    progress_interval: u64,
    /// Abort once the frontier would hold more than this many machines.
    #[arg(long)]
    max_frontier: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config =
        SearchConfig::new(cli.states, cli.symbols).with_progress_interval(cli.progress_interval);
    if let Some(limit) = cli.max_frontier {
        config = config.with_max_frontier(limit);
    }

    println!("Searching for BB({}, {})", cli.states, cli.symbols);
    let outcome = search_with(config)
        .with_context(|| format!("search for BB({}, {}) failed", cli.states, cli.symbols))?;

    print_outcome(&outcome, cli.states, cli.symbols);
    Ok(())
}

fn print_outcome(outcome: &SearchOutcome, states: u32, symbols: u32) {
    println!("-----result-----");
    println!("steps_number: {}", outcome.best_steps);
    println!(
        "rounds: {}\tmachines_spawned: {}",
        outcome.rounds.len(),
        outcome.machines_spawned
    );

    match &outcome.best_machine {
        Some(machine) => {
            println!("machine_transition_function: {}", machine.transitions());
            println!(
                "machine_standard_format: {}",
                machine.transitions().standard_format(states, symbols)
            );
            println!("machine_tape: {}", machine.tape_string());
        }
        None => println!("No halting machine found."),
    }
}
