use anyhow::{Context, Result};

use hoops_core::cli::{interpret, Cli};
use hoops_core::{report, SimulationConfig, Tournament};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute(&cli)
}

fn execute(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => SimulationConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SimulationConfig::default(),
    };

    let tournament = Tournament::load(&cli.groups, config)
        .with_context(|| format!("Failed to load groups {}", cli.groups.display()))?;
    log::info!(
        "Loaded {} groups from {}",
        tournament.groups().len(),
        cli.groups.display()
    );

    let result = tournament.simulate(cli.seed)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::render(&result));
    }
    Ok(())
}
