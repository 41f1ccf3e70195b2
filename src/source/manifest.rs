//! Source manifests
//!
//! Each source directory carries a `source.toml` describing where the
//! source came from and what it provides:
//!
//! ```toml
//! uri = "https://github.com/outfit-deps/core"
//!
//! [[deps]]
//! name = "git"
//! desc = "Installs git from the system package manager"
//!
//! [[templates]]
//! name = "brew"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Item, SourceError};

/// One `[[deps]]` or `[[templates]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

/// The on-disk shape of `source.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceManifest {
    #[serde(default)]
    pub uri: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deps: Vec<ItemEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub templates: Vec<ItemEntry>,
}

impl SourceManifest {
    /// A manifest recording only a uri, as written by `sources --add`.
    pub fn for_uri(uri: impl Into<String>) -> Self {
        Self { uri: uri.into(), ..Self::default() }
    }

    pub fn read(path: &Path) -> Result<Self, SourceError> {
        let raw = fs::read_to_string(path).map_err(|e| SourceError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| SourceError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn write(&self, path: &Path) -> Result<(), SourceError> {
        let raw = toml::to_string_pretty(self).map_err(|e| SourceError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        fs::write(path, raw)?;
        Ok(())
    }

    pub fn deps_items(&self) -> Vec<Item> {
        self.deps.iter().map(|e| Item::new(&e.name, e.desc.clone())).collect()
    }

    pub fn template_items(&self) -> Vec<Item> {
        self.templates.iter().map(|e| Item::new(&e.name, e.desc.clone())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_manifest() {
        let manifest: SourceManifest = toml::from_str(
            r#"
            uri = "https://example.org/demo"

            [[deps]]
            name = "git"
            desc = "Version control"

            [[deps]]
            name = "curl"

            [[templates]]
            name = "pkg"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.uri, "https://example.org/demo");
        assert_eq!(manifest.deps.len(), 2);
        assert_eq!(manifest.deps[1].desc, None);
        assert_eq!(manifest.templates.len(), 1);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let manifest: SourceManifest = toml::from_str("uri = \"x\"").unwrap();
        assert!(manifest.deps.is_empty());
        assert!(manifest.templates.is_empty());
    }

    #[test]
    fn write_then_read_preserves_items() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("source.toml");

        let mut manifest = SourceManifest::for_uri("https://example.org/demo");
        manifest.deps.push(ItemEntry { name: "git".into(), desc: Some("Version control".into()) });
        manifest.write(&path).unwrap();

        let back = SourceManifest::read(&path).unwrap();
        assert_eq!(back.uri, "https://example.org/demo");
        assert_eq!(back.deps_items(), vec![Item::new("git", Some("Version control".into()))]);
    }

    #[test]
    fn unreadable_manifest_reports_its_path() {
        let err = SourceManifest::read(Path::new("/nonexistent/source.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/source.toml"));
    }
}
