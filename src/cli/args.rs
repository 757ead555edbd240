use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::phase::Phase;

#[derive(Parser)]
#[command(name = "collicheck", version, about = "Display-collision checker for locale data")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Locale snapshot (JSON) or directory of snapshots
    pub input: Option<PathBuf>,
    #[command(flatten)]
    pub options: CheckArgs,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Reference (English) snapshot used to derive region exceptions
    #[arg(long, short, value_name = "FILE")]
    pub reference: Option<PathBuf>,
    /// Release phase; overrides the config file
    #[arg(long, short)]
    pub phase: Option<Phase>,
    /// Config file (default: ./collicheck.toml)
    #[arg(long, short, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Print reports as JSON
    #[arg(long)]
    pub json: bool,
    /// Check entries one at a time
    #[arg(long)]
    pub sequential: bool,
    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check locale snapshots for display collisions
    Check {
        input: PathBuf,
        #[command(flatten)]
        options: CheckArgs,
    },
    /// Write a default collicheck.toml
    Init {
        #[arg(long, short)]
        force: bool,
    },
    /// Print the region exception table
    Exceptions {
        #[command(flatten)]
        options: CheckArgs,
    },
}
