use clap::Parser;

/// podium: interactive client for the competition record store
#[derive(Debug, Parser)]
#[command(name = "podium", about = "Athletic-competition record store", version)]
pub struct Args {
    /// Config file path.
    #[arg(short, long, default_value = "podium.toml")]
    pub config: String,

    /// Database file (overrides config).
    #[arg(long)]
    pub db: Option<String>,
}
