// CLI module for promptlens

use clap::Parser;

/// promptlens - image analysis to prompt-engineering API backed by Google Gemini
#[derive(Parser, Debug)]
#[command(name = "promptlens", version, about, long_about = None)]
pub struct Args {
    /// Override the configured bind address
    #[arg(long)]
    pub host: Option<String>,

    /// Override the configured listen port
    #[arg(long)]
    pub port: Option<u16>,
}
