//! CLI Module
//!
//! Defines the command-line interface for zonelint using `clap`.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `check` | Scan the project and report violations |
//! | `rules` | List the effective rule set |
//! | `init`  | Write a starter configuration file |
//!
//! ## Global Options
//!
//! - `-v, --verbose` - Increase verbosity level (use multiple times: -v, -vv, -vvv)
//! - `-c, --config <FILE>` - Path to configuration file
//! - `-C, --directory <DIR>` - Project directory (defaults to current directory)

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{CheckArgs, InitArgs, RulesArgs};

/// zonelint - Lint JavaScript/TypeScript projects against naming, structure,
/// and framework conventions
#[derive(Parser, Debug)]
#[command(name = "zonelint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project directory (defaults to current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the project and report violations
    Check(CheckArgs),

    /// List the effective rule set
    Rules(RulesArgs),

    /// Write a starter configuration file
    Init(InitArgs),
}
