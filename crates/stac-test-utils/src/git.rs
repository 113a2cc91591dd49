//! Git repository fixtures.

use std::path::Path;

/// Initialise a real git repository with one commit on `branch` and an
/// `origin` remote pointing at `remote_url`.
///
/// # Panics
/// Panics if any git operation fails.
pub fn repo_with_remote(path: &Path, remote_url: &str, branch: &str) -> git2::Repository {
    let repo = git2::Repository::init(path)
        .unwrap_or_else(|e| panic!("repo_with_remote: init failed at {}: {e}", path.display()));

    {
        let signature = git2::Signature::now("Test User", "test@test.com")
            .unwrap_or_else(|e| panic!("repo_with_remote: signature: {e}"));
        let tree_id = repo
            .index()
            .and_then(|mut index| index.write_tree())
            .unwrap_or_else(|e| panic!("repo_with_remote: write tree: {e}"));
        let tree = repo
            .find_tree(tree_id)
            .unwrap_or_else(|e| panic!("repo_with_remote: find tree: {e}"));
        let reference = format!("refs/heads/{branch}");
        repo.commit(Some(&reference), &signature, &signature, "Initial commit", &tree, &[])
            .unwrap_or_else(|e| panic!("repo_with_remote: commit: {e}"));
        repo.set_head(&reference)
            .unwrap_or_else(|e| panic!("repo_with_remote: set HEAD: {e}"));
    }

    repo.remote("origin", remote_url)
        .unwrap_or_else(|e| panic!("repo_with_remote: add remote: {e}"));

    repo
}

/// Initialise a repository whose HEAD is detached at its first commit.
///
/// # Panics
/// Panics if any git operation fails.
pub fn detached_repo_with_remote(path: &Path, remote_url: &str) -> git2::Repository {
    let repo = repo_with_remote(path, remote_url, "main");
    let head = repo
        .head()
        .and_then(|head| head.peel_to_commit())
        .map(|commit| commit.id())
        .unwrap_or_else(|e| panic!("detached_repo_with_remote: resolve HEAD: {e}"));
    repo.set_head_detached(head)
        .unwrap_or_else(|e| panic!("detached_repo_with_remote: detach: {e}"));
    repo
}
