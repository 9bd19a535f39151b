//! Prompt template loading and placeholder substitution.
//!
//! Templates are plain text with `{name}` placeholders. The built-in
//! `code_sys` system template ships with the binary; a file named
//! `<template>.md` in an override directory takes precedence when present.

use std::path::Path;

use crate::error::{Error, Result};

/// Built-in system template for repository-aware conversations.
const CODE_SYS: &str = r#"You are popo, a repository-aware assistant. You answer questions about
the project checked out in the current working directory.

Repository context:

{context}

Guidelines:

1. Ground every answer in the repository context above or in tool results.
   Do not guess about files, branches, or commits you have not seen.
2. Prefer tools over assumptions when the context document is not enough
   to answer precisely.
3. Answer concisely. Quote paths, branch names, and commit hashes exactly
   as they appear.
4. If the question cannot be answered from the repository, say so.
"#;

/// Load a template by name, preferring a `<name>.md` file in `override_dir`.
///
/// Unknown names are an error; unreadable override files fall back to the
/// built-in with a warning.
pub fn load_template(name: &str, override_dir: Option<&Path>) -> Result<String> {
    if let Some(dir) = override_dir {
        let candidate = dir.join(format!("{name}.md"));
        if candidate.is_file() {
            match std::fs::read_to_string(&candidate) {
                Ok(content) => return Ok(content),
                Err(e) => {
                    tracing::warn!(
                        path = %candidate.display(),
                        error = %e,
                        "Failed to read template override, using built-in"
                    );
                }
            }
        }
    }

    match name {
        "code_sys" => Ok(CODE_SYS.to_string()),
        _ => Err(Error::TemplateNotFound {
            name: name.to_string(),
        }),
    }
}

/// Substitute `{key}` placeholders. Placeholders without a matching
/// variable are left intact.
pub fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut rendered = template.to_string();
    for (key, value) in vars {
        rendered = rendered.replace(&format!("{{{key}}}"), value);
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_template_loads() {
        let template = load_template("code_sys", None).unwrap();
        assert!(template.contains("{context}"));
    }

    #[test]
    fn test_unknown_template_is_error() {
        let result = load_template("no_such_template", None);
        assert!(matches!(result, Err(Error::TemplateNotFound { .. })));
    }

    #[test]
    fn test_override_file_wins() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("code_sys.md"), "custom {context}").unwrap();

        let template = load_template("code_sys", Some(temp.path())).unwrap();
        assert_eq!(template, "custom {context}");
    }

    #[test]
    fn test_override_dir_without_file_falls_back() {
        let temp = TempDir::new().unwrap();
        let template = load_template("code_sys", Some(temp.path())).unwrap();
        assert!(template.contains("repository-aware"));
    }

    #[test]
    fn test_render_substitutes_placeholders() {
        let rendered = render_template("hello {name}, {name}!", &[("name", "world")]);
        assert_eq!(rendered, "hello world, world!");
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        let rendered = render_template("{known} and {unknown}", &[("known", "yes")]);
        assert_eq!(rendered, "yes and {unknown}");
    }
}
