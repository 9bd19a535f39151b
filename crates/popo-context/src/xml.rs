//! XML rendering of the project context.
//!
//! Hand-built document with escaped text nodes. Element names follow the
//! context document the prompt template expects.

use crate::context::ProjectContext;

/// Render the full `<repository>` document.
pub fn render(context: &ProjectContext) -> String {
    let snapshot = &context.snapshot;
    let mut doc = String::from("<repository>\n");

    push_element(
        &mut doc,
        1,
        "currentDirectory",
        &snapshot.current_directory.display().to_string(),
    );
    push_element(
        &mut doc,
        1,
        "rootPath",
        &snapshot.root_path.display().to_string(),
    );
    push_element(&mut doc, 1, "repoUrl", snapshot.remote_url.as_deref().unwrap_or(""));
    push_element(&mut doc, 1, "branch", snapshot.branch.as_deref().unwrap_or(""));
    push_element(&mut doc, 1, "status", &snapshot.status.describe());

    doc.push_str("  <recentCommits>\n");
    for commit in &snapshot.recent_commits {
        doc.push_str("    <commit>\n");
        push_element(&mut doc, 3, "hash", &commit.hash);
        push_element(&mut doc, 3, "author", &commit.author);
        push_element(&mut doc, 3, "email", &commit.email);
        push_element(&mut doc, 3, "date", &commit.timestamp.to_rfc3339());
        push_element(&mut doc, 3, "message", &commit.message);
        doc.push_str("    </commit>\n");
    }
    doc.push_str("  </recentCommits>\n");

    push_element(&mut doc, 1, "directoryStructure", &context.tree.rendered);
    push_element(&mut doc, 1, "hasReadme", &context.has_readme.to_string());
    push_element(&mut doc, 1, "hasMakefile", &context.has_makefile.to_string());
    push_element(&mut doc, 1, "totalFiles", &context.tree.stats.files.to_string());
    push_element(
        &mut doc,
        1,
        "totalDirectories",
        &context.tree.stats.directories.to_string(),
    );

    doc.push_str("</repository>\n");
    doc
}

/// Append `<name>escaped text</name>` at the given indent level.
fn push_element(doc: &mut String, indent: usize, name: &str, text: &str) {
    for _ in 0..indent {
        doc.push_str("  ");
    }
    doc.push('<');
    doc.push_str(name);
    doc.push('>');
    doc.push_str(&escape(text));
    doc.push_str("</");
    doc.push_str(name);
    doc.push_str(">\n");
}

/// Escape the five XML-reserved characters in a text node.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
