//! Check command implementation

use std::path::Path;

use colored::Colorize;

use popo_context::load_template;
use popo_git::RepoSnapshot;

use crate::cli::Cli;
use crate::error::Result;

/// Run the check command: report configuration and repository health.
pub fn run_check(cwd: &Path, cli: &Cli) -> Result<()> {
    println!("{}", "Configuration".bold());
    println!();

    let key_ok = cli.api_key.as_deref().is_some_and(|k| !k.is_empty());
    report(
        key_ok,
        "API key configured",
        "POPO_API_KEY is not set (required for `popo ask`)",
    );
    println!("  {} endpoint: {}", mark(true), cli.api_base);
    println!("  {} model:    {}", mark(true), cli.model);

    let template_dir = super::template_override_dir(cwd);
    let template_ok = load_template("code_sys", template_dir.as_deref()).is_ok();
    report(template_ok, "system template available", "system template missing");
    if let Some(dir) = &template_dir {
        println!("  {} prompt overrides: {}", mark(true), dir.display());
    }

    println!();
    println!("{}", "Repository".bold());
    println!();

    match RepoSnapshot::gather(cwd, 1) {
        Ok(snapshot) => {
            report(true, "git repository detected", "");
            println!("  {} root:   {}", mark(true), snapshot.root_path.display());
            println!(
                "  {} branch: {}",
                mark(true),
                snapshot.branch.as_deref().unwrap_or("(detached)")
            );
        }
        Err(e) => {
            report(false, "", &format!("{e}"));
        }
    }

    Ok(())
}

fn mark(ok: bool) -> colored::ColoredString {
    if ok { "+".green() } else { "x".red() }
}

fn report(ok: bool, ok_message: &str, fail_message: &str) {
    if ok {
        println!("  {} {}", mark(true), ok_message);
    } else {
        println!("  {} {}", mark(false), fail_message.yellow());
    }
}
