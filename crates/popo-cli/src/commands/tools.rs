//! Tools command implementation

use colored::Colorize;

use popo_agent::ToolRegistry;

use crate::error::Result;

/// Run the tools command: list the canned tools.
pub fn run_tools() -> Result<()> {
    let registry = ToolRegistry::with_defaults();

    println!("{}:", "Available tools".bold());
    for (name, description) in registry.list() {
        println!("  {} {}", name.cyan(), description.dimmed());
    }

    Ok(())
}
