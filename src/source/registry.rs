//! Source discovery and registration
//!
//! Sources live under a registry root (one directory per source, each with
//! a `source.toml`), defaulting to the user data dir and overridable via
//! `OUTFIT_HOME`. The registry is an owned object handed to the command
//! handlers - there is no ambient global state, and loading a source twice
//! never re-reads its manifest.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::{classify_uri, Source, SourceError, SourceManifest, SourceType};

pub struct SourceRegistry {
    root: PathBuf,
    sources: Vec<Source>,
}

impl SourceRegistry {
    /// Opens the registry at its default root and picks up the implicit
    /// `./deps` source when the current directory has one.
    pub fn open() -> Result<Self> {
        let mut registry = Self::at(Self::default_root()?);
        if let Ok(cwd) = std::env::current_dir() {
            registry.attach_implicit(&cwd);
        }
        Ok(registry)
    }

    /// Opens the registry at an explicit root. No implicit source.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        let mut registry = Self { root: root.into(), sources: Vec::new() };
        registry.discover();
        registry
    }

    fn default_root() -> Result<PathBuf> {
        if let Ok(home) = std::env::var("OUTFIT_HOME") {
            return Ok(PathBuf::from(home).join("sources"));
        }
        let dirs = directories::ProjectDirs::from("", "", "outfit")
            .context("couldn't determine a data directory for the source registry")?;
        Ok(dirs.data_dir().join("sources"))
    }

    /// Scans the root for source directories. A source is present exactly
    /// when its directory holds a `source.toml`; unreadable directories are
    /// skipped.
    fn discover(&mut self) {
        self.sources.clear();

        let entries = match fs::read_dir(&self.root) {
            Ok(e) => e,
            Err(_) => return,
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.join("source.toml").is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                self.sources
                    .push(Source::new(name, "", SourceType::Local, path.clone()));
            }
        }

        self.sources.sort_by(|a, b| a.name().cmp(b.name()));
    }

    /// Registers `dir/deps` as the implicit "current" source when it has a
    /// manifest.
    pub fn attach_implicit(&mut self, dir: &Path) {
        let path = dir.join("deps");
        if path.join("source.toml").is_file() {
            let uri = path.display().to_string();
            self.sources
                .push(Source::new("current", uri, SourceType::Implicit, path));
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn find(&self, name: &str) -> Option<&Source> {
        self.sources.iter().find(|s| s.name() == name)
    }

    /// Loads every present source. Idempotent per source.
    pub fn load_all(&mut self) -> Result<(), SourceError> {
        for source in &mut self.sources {
            source.load()?;
        }
        Ok(())
    }

    /// Registers a new source: records the uri in a fresh manifest under the
    /// registry root. Fetching the uri's contents is up to the sync
    /// machinery, not the registry.
    pub fn add(&mut self, name: &str, uri: &str) -> Result<(), SourceError> {
        if self.find(name).is_some() {
            return Err(SourceError::DuplicateName(name.to_string()));
        }
        self.load_all()?;
        if let Some(existing) = self.sources.iter().find(|s| s.uri() == uri) {
            return Err(SourceError::DuplicateUri {
                name: existing.name().to_string(),
                uri: uri.to_string(),
            });
        }

        let path = self.root.join(name);
        fs::create_dir_all(&path)?;
        SourceManifest::for_uri(uri).write(&path.join("source.toml"))?;

        let mut source = Source::new(name, uri, classify_uri(uri), path);
        source.load()?;
        self.sources.push(source);
        self.sources.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(())
    }

    /// Test/seed hook: registers an in-memory source directly.
    pub fn insert(&mut self, source: Source) {
        self.sources.push(source);
        self.sources.sort_by(|a, b| a.name().cmp(b.name()));
    }
}
