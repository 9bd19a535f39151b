//! popo CLI
//!
//! A repository-aware conversational agent: introspects the local git
//! repository and answers questions about it through a tool-calling loop.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let Some(command) = cli.command.clone() else {
        println!("{} repository agent", "popo".green().bold());
        println!();
        println!("Run {} for available commands.", "popo --help".cyan());
        return Ok(());
    };

    execute_command(&cli, command)
}

fn execute_command(cli: &Cli, cmd: Commands) -> Result<()> {
    let cwd = std::env::current_dir()?;

    match cmd {
        Commands::Ask {
            question,
            no_tools,
            max_iterations,
            commits,
        } => commands::run_ask(
            &cwd,
            commands::AskOptions {
                question,
                no_tools,
                max_iterations,
                commits,
                model: cli.model.clone(),
                api_base: cli.api_base.clone(),
                api_key: cli.api_key.clone(),
            },
        ),
        Commands::Context { format, commits } => commands::run_context(&cwd, format, commits),
        Commands::Tools => commands::run_tools(),
        Commands::Check => commands::run_check(&cwd, cli),
    }
}
