use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "campus")]
#[command(
    author,
    version,
    about = "A GraphQL API server for managing students and departments"
)]
pub struct Cli {
    /// Port to listen on (overrides config file)
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Path to config file
    #[arg(long, default_value = "campus.yml")]
    pub config: PathBuf,

    /// Path to the data directory (overrides config)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Path to the static documentation directory (overrides config)
    #[arg(long)]
    pub docs: Option<PathBuf>,

    /// Enable verbose (DEBUG) logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Write structured JSON logs to this file in addition to stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
