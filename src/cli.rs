//! Command-line interface for the VHDL DOM builder.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use vhdl_dom::BuildOptions;

#[derive(Parser)]
#[command(name = "vhdl-dom")]
#[command(about = "Build a VHDL document object model from an IR image", long_about = None)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print an indented outline of every design unit
    Outline(BuildArgs),
    /// Print the full AST in debug form
    Dump(BuildArgs),
    /// Report diagnostics only; exits with 1 if any error was found
    Check(BuildArgs),
}

#[derive(Args)]
pub struct BuildArgs {
    /// IR image (JSON) to build
    pub file: PathBuf,

    /// Longest chain followed before the build gives up
    #[arg(long, default_value_t = BuildOptions::DEFAULT_MAX_CHAIN_LENGTH)]
    pub max_chain_length: usize,

    /// Deepest nesting of constructed nodes
    #[arg(long, default_value_t = BuildOptions::DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
}

impl BuildArgs {
    pub fn options(&self) -> BuildOptions {
        BuildOptions::default()
            .with_max_chain_length(self.max_chain_length)
            .with_max_depth(self.max_depth)
    }
}
