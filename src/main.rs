use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bannergen::cli::{Cli, Commands};

mod commands;

/// Log to stderr so `generate --stdout` output stays clean.
fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate(args) => commands::generate::handle(args),
        Commands::Fonts { font_dir } => commands::fonts::handle_fonts(font_dir),
        Commands::Colors => commands::fonts::handle_colors(),
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
