//! GlobalCut CLI - Stoer-Wagner global minimum cut from the command line

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

mod cli;
mod config;

use crate::cli::commands::*;
use crate::config::Config;

#[derive(Parser)]
#[command(name = "globalcut")]
#[command(about = "Global minimum cut of undirected graphs (Stoer-Wagner)", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path (JSON)
    #[arg(short, long, global = true, env = "GLOBALCUT_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug mode
    #[arg(short, long, global = true)]
    debug: bool,

    /// Disable colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the global minimum cut
    Solve {
        /// Graph file path (`-` for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Input format (adjacency, matrix)
        #[arg(long)]
        input_format: Option<String>,

        /// Output format (text, json)
        #[arg(short, long)]
        format: Option<String>,

        /// Vertex name that seeds every phase
        #[arg(short, long)]
        start: Option<String>,

        /// Stop after the first zero-weight phase
        #[arg(long)]
        stop_at_zero: bool,
    },

    /// Show graph statistics
    Info {
        /// Graph file path (`-` for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Input format (adjacency, matrix)
        #[arg(long)]
        input_format: Option<String>,

        /// List every vertex with its neighbours
        #[arg(long)]
        detailed: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.debug {
        tracing_subscriber::fmt()
            .with_env_filter("globalcut=debug,ruvector_globalcut=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    // Disable colors if requested
    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = Config::load(cli.config).and_then(|config| run(cli.command, &config));

    // Handle errors
    if let Err(e) = result {
        eprintln!("{}", cli::format::format_error(&e.to_string()));
        if cli.debug {
            eprintln!("\n{:#?}", e);
        } else {
            eprintln!("\n{}", "Run with --debug for more details".dimmed());
        }
        std::process::exit(1);
    }

    Ok(())
}

/// Execute a command, letting flags override the config file
fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Solve {
            input,
            input_format,
            format,
            start,
            stop_at_zero,
        } => {
            let options = SolveOptions {
                input_format: input_format.as_deref().unwrap_or(&config.input_format),
                output_format: format.as_deref().unwrap_or(&config.output_format),
                start_vertex: start.as_deref().or(config.start_vertex.as_deref()),
                stop_at_zero: stop_at_zero || config.stop_at_zero,
            };
            solve(&input, &options)
        }
        Commands::Info {
            input,
            input_format,
            detailed,
        } => show_info(
            &input,
            input_format.as_deref().unwrap_or(&config.input_format),
            detailed,
        ),
    }
}
