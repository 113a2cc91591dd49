//! Raw file URLs for generated documentation

use std::path::Path;

use stac_fs::NormalizedPath;
use url::Url;

/// Identifies where the repository is published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCoordinates {
    pub owner: String,
    pub repository: String,
    pub branch: String,
}

impl RepoCoordinates {
    pub fn new(
        owner: impl Into<String>,
        repository: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repository: repository.into(),
            branch: branch.into(),
        }
    }
}

/// Builds `https://<host>/<owner>/<repository>/<branch>/<path>` URLs for files
/// inside a repository checkout.
#[derive(Debug, Clone)]
pub struct RawUrlBuilder {
    host: String,
    coordinates: RepoCoordinates,
    repo_root: NormalizedPath,
}

impl RawUrlBuilder {
    pub fn new(host: impl Into<String>, coordinates: RepoCoordinates, repo_root: &Path) -> Self {
        Self {
            host: host.into(),
            coordinates,
            repo_root: NormalizedPath::new(repo_root),
        }
    }

    pub fn coordinates(&self) -> &RepoCoordinates {
        &self.coordinates
    }

    /// URL of a path given relative to the repository root.
    ///
    /// Every path segment is percent-encoded, parentheses included, so the
    /// result can sit inside a markdown link destination.
    pub fn url_for_relative(&self, relative: &str) -> String {
        let relative = relative.replace('\\', "/");
        let RepoCoordinates {
            owner,
            repository,
            branch,
        } = &self.coordinates;
        let segments = [owner.as_str(), repository.as_str()]
            .into_iter()
            .chain(branch.split('/'))
            .chain(relative.split('/'))
            .filter(|segment| !segment.is_empty());

        let mut url = match Url::parse(&format!("https://{}/", self.host)) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(host = %self.host, error = %e, "Invalid URL host, links left unencoded");
                return format!(
                    "https://{}/{}/{}/{}/{}",
                    self.host,
                    owner,
                    repository,
                    branch,
                    relative.trim_start_matches('/')
                );
            }
        };
        if let Ok(mut path) = url.path_segments_mut() {
            path.clear().extend(segments);
        }
        url.as_str().replace('(', "%28").replace(')', "%29")
    }

    /// URL of a path inside the checkout.
    ///
    /// Paths outside the repository root are used as given.
    pub fn url_for(&self, path: &Path) -> String {
        let path = NormalizedPath::new(path);
        let relative = path.strip_prefix(&self.repo_root).unwrap_or(path);
        self.url_for_relative(relative.as_str())
    }
}
