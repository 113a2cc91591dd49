//! Remote URL parsing and repository coordinate discovery

use std::path::Path;

use git2::Repository;
use stac_core::RepoCoordinates;

use crate::{Error, Result};

/// Owner and repository name parsed from a remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePath {
    pub owner: String,
    pub repository: String,
}

/// Parse `owner/repository` out of a remote URL.
///
/// Accepts scp-like (`git@host:owner/repo.git`), `https://host/owner/repo`
/// and `ssh://git@host/owner/repo.git` forms. A trailing `.git` is dropped.
pub fn parse_remote_url(url: &str) -> Result<RemotePath> {
    let unrecognized = || Error::UnrecognizedRemoteUrl {
        url: url.to_string(),
    };
    let trimmed = url.trim().trim_end_matches('/');

    let path = if let Some(rest) = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .or_else(|| trimmed.strip_prefix("ssh://"))
        .or_else(|| trimmed.strip_prefix("git://"))
    {
        // Drop the host (and any user@ prefix or port)
        rest.split_once('/').map(|(_, path)| path).ok_or_else(unrecognized)?
    } else if let Some((host, path)) = trimmed.split_once(':')
        && host.contains('@')
    {
        path
    } else {
        return Err(unrecognized());
    };

    let mut segments = path.rsplitn(3, '/');
    let repository = segments.next().filter(|s| !s.is_empty()).ok_or_else(unrecognized)?;
    let owner = segments.next().filter(|s| !s.is_empty()).ok_or_else(unrecognized)?;
    let repository = repository.strip_suffix(".git").unwrap_or(repository);
    if repository.is_empty() {
        return Err(unrecognized());
    }

    Ok(RemotePath {
        owner: owner.to_string(),
        repository: repository.to_string(),
    })
}

/// Discover owner, repository and branch for the checkout containing `path`.
///
/// `branch_override` replaces the branch read from `HEAD` and makes a
/// detached or unborn `HEAD` acceptable.
pub fn discover(path: &Path, remote: &str, branch_override: Option<&str>) -> Result<RepoCoordinates> {
    let repo = Repository::discover(path).map_err(|e| {
        if e.code() == git2::ErrorCode::NotFound {
            Error::NotARepository {
                path: path.to_path_buf(),
            }
        } else {
            Error::Git(e)
        }
    })?;

    let url = {
        let found = repo.find_remote(remote).map_err(|_| Error::RemoteNotFound {
            name: remote.to_string(),
        })?;
        found
            .url()
            .map(str::to_string)
            .ok_or_else(|| Error::MissingRemoteUrl {
                name: remote.to_string(),
            })?
    };
    let RemotePath { owner, repository } = parse_remote_url(&url)?;

    let branch = match branch_override {
        Some(branch) => branch.to_string(),
        None => current_branch(&repo)?,
    };

    tracing::debug!(%owner, %repository, %branch, remote, "Discovered repository coordinates");
    Ok(RepoCoordinates::new(owner, repository, branch))
}

fn current_branch(repo: &Repository) -> Result<String> {
    let head = repo.head()?;
    if head.is_branch() {
        head.shorthand()
            .map(str::to_string)
            .ok_or(Error::DetachedHead)
    } else {
        Err(Error::DetachedHead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("git@github.com:acme/datasets.git", "acme", "datasets")]
    #[case("git@github.com:acme/datasets", "acme", "datasets")]
    #[case("https://github.com/acme/datasets.git", "acme", "datasets")]
    #[case("https://github.com/acme/datasets", "acme", "datasets")]
    #[case("https://github.com/acme/datasets/", "acme", "datasets")]
    #[case("https://user@github.com/acme/datasets.git", "acme", "datasets")]
    #[case("ssh://git@github.com/acme/datasets.git", "acme", "datasets")]
    #[case("ssh://git@github.com:22/acme/datasets.git", "acme", "datasets")]
    #[case("https://gitlab.com/group/sub/datasets.git", "sub", "datasets")]
    fn parses_remote_forms(#[case] url: &str, #[case] owner: &str, #[case] repository: &str) {
        let parsed = parse_remote_url(url).unwrap();
        assert_eq!(parsed.owner, owner);
        assert_eq!(parsed.repository, repository);
    }

    #[rstest]
    #[case("/local/path/repo")]
    #[case("https://github.com/")]
    #[case("https://github.com/only-owner")]
    #[case("git@github.com:.git")]
    #[case("")]
    fn rejects_unrecognized_urls(#[case] url: &str) {
        assert!(matches!(
            parse_remote_url(url),
            Err(Error::UnrecognizedRemoteUrl { .. })
        ));
    }
}
