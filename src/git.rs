use crate::errors::Result;
use git2::{DiffOptions, Repository};
use std::path::Path;

/// Open the git repository at the given path (or walk up to find one).
pub fn open_repo(path: &Path) -> Result<Repository> {
    Ok(Repository::discover(path)?)
}

/// Name-only diff of the working tree (plus index) against HEAD — the
/// changed-file list the selector consumes when no paths are given
/// explicitly.
pub fn changed_files(repo: &Repository) -> Result<Vec<String>> {
    // An unborn branch has no HEAD tree; diff against the empty tree.
    let head_tree = repo
        .head()
        .ok()
        .and_then(|head| head.peel_to_tree().ok());

    let mut opts = DiffOptions::new();
    opts.include_untracked(true).recurse_untracked_dirs(true);

    let diff = repo.diff_tree_to_workdir_with_index(head_tree.as_ref(), Some(&mut opts))?;

    let mut files = Vec::new();
    diff.foreach(
        &mut |delta, _| {
            if let Some(path) = delta.new_file().path().or_else(|| delta.old_file().path()) {
                files.push(path.to_string_lossy().into_owned());
            }
            true
        },
        None,
        None,
        None,
    )?;

    files.sort();
    files.dedup();

    tracing::debug!("diff reported {} changed files", files.len());

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn changed_files_lists_new_sources() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        fs::create_dir_all(dir.path().join("src/main/kotlin")).unwrap();
        fs::write(dir.path().join("src/main/kotlin/A.kt"), "class A\n").unwrap();

        let files = changed_files(&repo).unwrap();
        assert_eq!(files, vec!["src/main/kotlin/A.kt".to_string()]);
    }

    #[test]
    fn clean_worktree_yields_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let files = changed_files(&repo).unwrap();
        assert!(files.is_empty());
    }
}
