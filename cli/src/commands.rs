pub mod generate;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use macgen_common::config::Config;

#[derive(Parser, Debug)]
#[command(name = "macgen")]
#[command(version, about = "Generate MAC addresses for virtual machine guests")]
pub struct CommandLine {
    /// Number of MAC addresses to generate
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Save output to specified file
    #[arg(short, long)]
    pub save: Option<PathBuf>,

    /// Custom MAC prefix (e.g., '52:54:00'), skips the menu
    #[arg(long)]
    pub custom: Option<String>,

    /// Seed the random source for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print bare addresses only
    ///
    /// Counted like `-qq`, but every level above zero currently behaves the same.
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl From<CommandLine> for Config {
    fn from(cmd: CommandLine) -> Self {
        Config {
            count: cmd.count,
            save: cmd.save,
            custom: cmd.custom,
            seed: cmd.seed,
            quiet: cmd.quiet,
        }
    }
}
