//! Integration tests: full context assembly against a realistic fixture repo.

use std::path::Path;

use git2::Repository;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use popo_context::{ContextOptions, ProjectContext};

fn commit(repo: &Repository, rel_path: &str, content: &str, message: &str) {
    let workdir = repo.workdir().unwrap();
    let full = workdir.join(rel_path);
    if let Some(parent) = full.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&full, content).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(rel_path)).unwrap();
    index.write().unwrap();

    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = git2::Signature::now("Fixture Author", "fixture@example.com").unwrap();

    let parents: Vec<git2::Commit> = match repo.head() {
        Ok(head) => vec![head.peel_to_commit().unwrap()],
        Err(_) => Vec::new(),
    };
    let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .unwrap();
}

fn fixture_repo(dir: &Path) -> Repository {
    let repo = Repository::init(dir).unwrap();
    repo.remote("origin", "https://example.com/fixture/project.git")
        .unwrap();

    commit(&repo, "README.md", "# Fixture", "add readme");
    commit(&repo, "Makefile", "all:\n\ttrue\n", "add makefile");
    commit(&repo, "src/lib.rs", "pub fn lib() {}", "add library");
    commit(&repo, "src/bin/main.rs", "fn main() {}", "add binary");

    // Noise that must not appear in the tree
    std::fs::create_dir_all(dir.join("node_modules/dep")).unwrap();
    std::fs::write(dir.join("node_modules/dep/index.js"), "x").unwrap();

    repo
}

#[test]
fn assembles_complete_context() {
    let temp = TempDir::new().unwrap();
    fixture_repo(temp.path());

    let context = ProjectContext::assemble(temp.path(), &ContextOptions::default()).unwrap();

    assert!(context.has_readme);
    assert!(context.has_makefile);
    assert_eq!(context.snapshot.recent_commits.len(), 4);
    assert_eq!(context.snapshot.recent_commits[0].message, "add binary");
    assert_eq!(
        context.snapshot.remote_url.as_deref(),
        Some("https://example.com/fixture/project.git")
    );

    // README.md, Makefile, src/lib.rs, src/bin/main.rs
    assert_eq!(context.tree.stats.files, 4);
    // root, src, src/bin
    assert_eq!(context.tree.stats.directories, 3);
    assert!(!context.tree.rendered.contains("node_modules"));
}

#[test]
fn tree_renders_expected_listing() {
    let temp = TempDir::new().unwrap();
    fixture_repo(temp.path());

    let context = ProjectContext::assemble(temp.path(), &ContextOptions::default()).unwrap();
    let root_name = temp.path().file_name().unwrap().to_string_lossy();

    let expected = format!(
        "- {root_name}/\n\
         ├── Makefile\n\
         ├── README.md\n\
         └── src/\n\
         \u{20}   ├── bin/\n\
         \u{20}   │   └── main.rs\n\
         \u{20}   └── lib.rs\n"
    );
    assert_eq!(context.tree.rendered, expected);
}

#[test]
fn xml_document_covers_every_field() {
    let temp = TempDir::new().unwrap();
    fixture_repo(temp.path());

    let context = ProjectContext::assemble(temp.path(), &ContextOptions::default()).unwrap();
    let xml = context.to_xml();

    for element in [
        "currentDirectory",
        "rootPath",
        "repoUrl",
        "branch",
        "status",
        "recentCommits",
        "directoryStructure",
        "hasReadme",
        "hasMakefile",
        "totalFiles",
        "totalDirectories",
    ] {
        assert!(xml.contains(&format!("<{element}>")), "missing <{element}>");
    }

    assert!(xml.contains("<hasReadme>true</hasReadme>"));
    assert!(xml.contains("<totalFiles>4</totalFiles>"));
    assert!(xml.contains("<author>Fixture Author</author>"));
}

#[test]
fn context_is_stable_across_runs() {
    let temp = TempDir::new().unwrap();
    fixture_repo(temp.path());

    let options = ContextOptions::default();
    let first = ProjectContext::assemble(temp.path(), &options).unwrap();
    let second = ProjectContext::assemble(temp.path(), &options).unwrap();

    assert_eq!(first.tree.rendered, second.tree.rendered);
    assert_eq!(first.to_xml().len(), second.to_xml().len());
}
