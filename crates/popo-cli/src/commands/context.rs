//! Context command implementation

use std::path::Path;

use colored::Colorize;

use popo_context::{ContextOptions, ProjectContext};

use crate::cli::ContextFormat;
use crate::error::Result;

/// Run the context command: print the introspection result.
pub fn run_context(cwd: &Path, format: ContextFormat, commits: usize) -> Result<()> {
    let options = ContextOptions {
        max_commits: commits,
        ..ContextOptions::default()
    };
    let context = ProjectContext::assemble(cwd, &options)?;

    match format {
        ContextFormat::Tree => print_tree(&context),
        ContextFormat::Xml => print!("{}", context.to_xml()),
        ContextFormat::Json => println!("{}", serde_json::to_string_pretty(&context)?),
    }

    Ok(())
}

fn print_tree(context: &ProjectContext) {
    let snapshot = &context.snapshot;

    println!("{}", "Project Context".bold());
    println!();
    println!(
        "{}:   {}",
        "Root".dimmed(),
        snapshot.root_path.display()
    );
    println!(
        "{}: {}",
        "Branch".dimmed(),
        snapshot.branch.as_deref().unwrap_or("(detached)").cyan()
    );
    println!(
        "{}: {}",
        "Remote".dimmed(),
        snapshot.remote_url.as_deref().unwrap_or("(none)")
    );
    println!(
        "{}: {}",
        "Status".dimmed(),
        if snapshot.status.is_clean() {
            "clean".green()
        } else {
            "dirty".yellow()
        }
    );
    println!();

    if !snapshot.recent_commits.is_empty() {
        println!("{}:", "Recent commits".bold());
        for commit in &snapshot.recent_commits {
            println!(
                "  {} {} ({})",
                commit.hash.yellow(),
                commit.message,
                commit.author.dimmed()
            );
        }
        println!();
    }

    println!("{}:", "Tree".bold());
    print!("{}", context.tree.rendered);
    println!();
    println!(
        "{} files, {} directories{}{}",
        context.tree.stats.files,
        context.tree.stats.directories,
        if context.has_readme { ", README" } else { "" },
        if context.has_makefile { ", Makefile" } else { "" },
    );
}
