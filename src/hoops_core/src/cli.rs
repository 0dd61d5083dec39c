use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Simulate a group stage + knockout basketball tournament")]
pub struct Cli {
    /// Groups file: group name -> [{"Team", "ISOCode", "FIBARanking"}]
    #[arg(short, long, default_value = "groups.json")]
    pub groups: PathBuf,

    /// TOML file overriding tournament format and scoring
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for a reproducible run
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Print the result as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn interpret() -> Cli {
    Cli::parse()
}
