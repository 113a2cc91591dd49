//! Slash-separated paths for link generation
//!
//! Catalog hrefs and raw URLs are built from filesystem paths, and both need
//! `/` separators regardless of platform. [`NormalizedPath`] converts once on
//! the way in and back to a native [`PathBuf`] only for I/O.

use std::fmt;
use std::path::{Path, PathBuf};

/// A path with `/` separators and no repeated separators.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            inner: collapse_separators(&path.as_ref().to_string_lossy()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Platform-native form for filesystem calls.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Append a relative segment, which may itself contain separators.
    pub fn join(&self, segment: &str) -> Self {
        let segment = collapse_separators(segment);
        let segment = segment.trim_start_matches('/');
        let inner = match self.inner.as_str() {
            "" => segment.to_string(),
            base if base.ends_with('/') => format!("{base}{segment}"),
            base => format!("{base}/{segment}"),
        };
        Self { inner }
    }

    /// Last component, if any.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        let name = trimmed.rsplit_once('/').map_or(trimmed, |(_, name)| name);
        (!name.is_empty()).then_some(name)
    }

    /// Extension of the last component; dotfiles have none.
    pub fn extension(&self) -> Option<&str> {
        let (stem, extension) = self.file_name()?.rsplit_once('.')?;
        (!stem.is_empty()).then_some(extension)
    }

    /// This path relative to `base`, compared component by component.
    ///
    /// `None` when `base` is not an ancestor of (or equal to) this path.
    pub fn strip_prefix(&self, base: &NormalizedPath) -> Option<Self> {
        let mut ours = self.inner.split('/').filter(|c| !c.is_empty());
        let leading_slash = self.inner.starts_with('/') == base.inner.starts_with('/');
        if !leading_slash && !base.inner.is_empty() {
            return None;
        }
        for component in base.inner.split('/').filter(|c| !c.is_empty()) {
            if ours.next()? != component {
                return None;
            }
        }
        Some(Self {
            inner: ours.collect::<Vec<_>>().join("/"),
        })
    }

    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }
}

fn collapse_separators(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars().map(|c| if c == '\\' { '/' } else { c }) {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    out
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("datasets\\noaa\\goes", "datasets/noaa/goes")]
    #[case("datasets//noaa/", "datasets/noaa/")]
    #[case("C:\\repo\\README.md", "C:/repo/README.md")]
    fn separators_are_normalized(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(NormalizedPath::new(raw).as_str(), expected);
    }

    #[rstest]
    #[case("/repo", "/repo/datasets/noaa/catalog.json", Some("datasets/noaa/catalog.json"))]
    #[case("/repo/", "/repo/README.md", Some("README.md"))]
    #[case("/repo", "/repo", Some(""))]
    #[case("/repo", "/repository/catalog.json", None)]
    #[case("/repo", "repo/catalog.json", None)]
    #[case("", "datasets/x", Some("datasets/x"))]
    fn strip_prefix_by_component(#[case] base: &str, #[case] path: &str, #[case] expected: Option<&str>) {
        let relative = NormalizedPath::new(path).strip_prefix(&NormalizedPath::new(base));
        assert_eq!(relative.as_ref().map(NormalizedPath::as_str), expected);
    }

    #[test]
    fn join_onto_empty_path() {
        let path = NormalizedPath::new("").join("catalog.json");
        assert_eq!(path.as_str(), "catalog.json");
    }

    #[test]
    fn join_nested_segment() {
        let path = NormalizedPath::new("/repo/").join("noaa\\goes/catalog.json");
        assert_eq!(path.as_str(), "/repo/noaa/goes/catalog.json");
        assert_eq!(path.file_name(), Some("catalog.json"));
    }

    #[rstest]
    #[case("a/.hidden", None)]
    #[case("a/b.toml", Some("toml"))]
    #[case("settings.yaml", Some("yaml"))]
    #[case("a/Makefile", None)]
    fn extension_of_last_component(#[case] path: &str, #[case] expected: Option<&str>) {
        assert_eq!(NormalizedPath::new(path).extension(), expected);
    }
}
