//! Config Resolver
//!
//! Each collection may carry up to four configuration files under its
//! `config/` directory. Their names vary between collections, so every role
//! has an ordered list of accepted names. Resolution is total: a role always
//! maps to one path, either a file found on disk or the role's primary name.

use std::path::{Path, PathBuf};

use stac_fs::LayoutName;

/// Ordered file names accepted for one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidates {
    /// Preferred name, also used when nothing matches
    pub primary: &'static str,
    pub alternates: &'static [&'static str],
}

impl Candidates {
    /// All candidate names in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.primary).chain(self.alternates.iter().copied())
    }
}

/// Outcome of resolving one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub file_name: &'static str,
    /// Whether `file_name` was found on disk
    pub found: bool,
}

/// Pick the first candidate accepted by `exists`, else the primary candidate.
pub fn resolve(candidates: &Candidates, exists: impl Fn(&str) -> bool) -> Resolution {
    candidates
        .iter()
        .find(|name| exists(name))
        .map(|file_name| Resolution {
            file_name,
            found: true,
        })
        .unwrap_or(Resolution {
            file_name: candidates.primary,
            found: false,
        })
}

/// The four configuration roles of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigRole {
    CollectionConfiguration,
    Mosaic,
    TileSettings,
    Render,
}

impl ConfigRole {
    /// All roles in display order.
    pub const ALL: [ConfigRole; 4] = [
        ConfigRole::CollectionConfiguration,
        ConfigRole::Mosaic,
        ConfigRole::TileSettings,
        ConfigRole::Render,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CollectionConfiguration => "Collection Configuration",
            Self::Mosaic => "Mosaic Config",
            Self::TileSettings => "Tile Settings Config",
            Self::Render => "Render Config",
        }
    }

    pub fn candidates(&self) -> Candidates {
        match self {
            Self::CollectionConfiguration => Candidates {
                primary: "collection.json",
                alternates: &[],
            },
            Self::Mosaic => Candidates {
                primary: "mosaic_config.json",
                alternates: &["mosaic_configuration.json", "mosaic-config.json"],
            },
            Self::TileSettings => Candidates {
                primary: "tile_settings_config.json",
                alternates: &[
                    "tile_settings_configuration.json",
                    "tile-settings-config.json",
                ],
            },
            Self::Render => Candidates {
                primary: "render_config.json",
                alternates: &["render_configuration.json", "render-config.json"],
            },
        }
    }
}

impl std::fmt::Display for ConfigRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A role resolved to a concrete path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfigFile {
    pub role: ConfigRole,
    pub path: PathBuf,
    /// `false` when `path` is the role's default and may not exist
    pub found: bool,
}

/// Resolved configuration files of one collection, in role order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionConfigFiles {
    files: Vec<ResolvedConfigFile>,
}

impl CollectionConfigFiles {
    pub fn get(&self, role: ConfigRole) -> Option<&ResolvedConfigFile> {
        self.files.iter().find(|file| file.role == role)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedConfigFile> {
        self.files.iter()
    }
}

/// Resolve all four roles under `<collection_path>/config/`.
pub fn resolve_config_files(collection_path: &Path) -> CollectionConfigFiles {
    let config_dir = collection_path.join(LayoutName::ConfigDir.as_str());
    let files = ConfigRole::ALL
        .iter()
        .map(|&role| {
            let resolution = resolve(&role.candidates(), |name| config_dir.join(name).is_file());
            tracing::debug!(
                collection = %collection_path.display(),
                role = %role,
                file = resolution.file_name,
                found = resolution.found,
                "Resolved config file"
            );
            ResolvedConfigFile {
                role,
                path: config_dir.join(resolution.file_name),
                found: resolution.found,
            }
        })
        .collect();

    CollectionConfigFiles { files }
}
