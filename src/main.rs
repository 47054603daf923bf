//! vhdl-dom CLI entry point.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use cli::{BuildArgs, Cli, Command};
use tracing_subscriber::EnvFilter;
use vhdl_dom::{Db, DomDatabase, build_with_diagnostics, render_outline};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Outline(args) => run(&args, |design| print!("{}", render_outline(design))),
        Command::Dump(args) => run(&args, |design| println!("{design:#?}")),
        Command::Check(args) => run(&args, |_| {}),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build `args.file`, print its diagnostics to stderr and hand the design to
/// `show`. Fails if any error diagnostic was reported.
fn run(args: &BuildArgs, show: impl FnOnce(&vhdl_ast::DesignFile)) -> ExitCode {
    let db = DomDatabase::default();
    let doc = match db.input(args.file.clone(), args.options()) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error reading {}: {e}", args.file.display());
            return ExitCode::FAILURE;
        }
    };

    let result = build_with_diagnostics(&db, doc);
    for diagnostic in &result.diagnostics {
        eprintln!("{diagnostic}");
    }
    if let Some(design) = result.design {
        show(design);
    }

    if result.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
