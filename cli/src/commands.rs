pub mod analyze;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "dchound")]
#[command(about = "Finds domain controllers in Nmap scan output and generates collection commands.")]
pub struct CommandLine {
    /// Nmap output file to parse
    pub scan_file: PathBuf,

    /// Output directory for exported artifacts
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Only save the JSON artifact, skip interactive command generation
    #[arg(short, long)]
    pub json_only: bool,

    /// Verbose diagnostics
    #[arg(short, long)]
    pub verbose: bool,

    /// Treat 'open|filtered' port states as closed instead of open
    #[arg(long)]
    pub strict_open: bool,

    /// Suppress the banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
