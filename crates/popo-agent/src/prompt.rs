//! System prompt assembly.

use std::path::Path;

use popo_context::{load_template, render_template};

use crate::Result;
use crate::tools::ToolRegistry;

/// Build the system prompt: the `code_sys` template with the repository
/// XML context substituted in, plus a listing of the available tools.
pub fn build_system_prompt(
    context_xml: &str,
    tools: &ToolRegistry,
    template_dir: Option<&Path>,
) -> Result<String> {
    let template = load_template("code_sys", template_dir)?;
    let mut prompt = render_template(&template, &[("context", context_xml)]);

    if !tools.is_empty() {
        let listing = tools
            .list()
            .iter()
            .map(|(name, description)| format!("- {name}: {description}"))
            .collect::<Vec<_>>()
            .join("\n");
        prompt.push_str(&format!("\nAvailable tools:\n{listing}\n"));
    }

    Ok(prompt)
}
