//! Dep sources
//!
//! A source is a registered provider of named items - deps and templates.
//! Sources are discovered by the [`SourceRegistry`], and their item
//! collections are read lazily from an on-disk manifest the first time a
//! handler needs them.

mod manifest;
mod registry;

pub use manifest::SourceManifest;
pub use registry::SourceRegistry;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("a source called '{0}' already exists")]
    DuplicateName(String),

    #[error("{uri} is already present as '{name}'")]
    DuplicateUri { name: String, uri: String },

    #[error("couldn't read the manifest at {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Which of a source's collections a command is interested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Deps,
    Templates,
}

impl CollectionKind {
    /// Count-aware noun for listing output: "1 dep", "2 deps".
    pub fn noun(&self, count: usize) -> &'static str {
        match (self, count) {
            (CollectionKind::Deps, 1) => "dep",
            (CollectionKind::Deps, _) => "deps",
            (CollectionKind::Templates, 1) => "template",
            (CollectionKind::Templates, _) => "templates",
        }
    }
}

/// How a source came to be known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    /// A directory on this machine.
    Local,
    /// Registered from a URI.
    Remote,
    /// Picked up automatically (the `./deps` directory), never registered.
    Implicit,
}

impl SourceType {
    pub fn label(&self) -> &'static str {
        match self {
            SourceType::Local => "local",
            SourceType::Remote => "remote",
            SourceType::Implicit => "implicit",
        }
    }
}

/// Guesses how to label a source from the shape of its uri.
pub(crate) fn classify_uri(uri: &str) -> SourceType {
    if uri.contains("://") || uri.starts_with("git@") {
        SourceType::Remote
    } else {
        SourceType::Local
    }
}

/// A named, described entity provided by a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub description: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self { name: name.into(), description }
    }

    /// The description, unless it is missing or blank.
    pub fn described(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.trim().is_empty())
    }
}

/// A registered provider of deps and templates.
#[derive(Debug, Clone)]
pub struct Source {
    name: String,
    uri: String,
    kind: SourceType,
    path: PathBuf,
    loaded: bool,
    deps: Vec<Item>,
    templates: Vec<Item>,
}

impl Source {
    pub fn new(name: impl Into<String>, uri: impl Into<String>, kind: SourceType, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            kind,
            path,
            loaded: false,
            deps: Vec::new(),
            templates: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn kind(&self) -> SourceType {
        self.kind
    }

    pub fn implicit(&self) -> bool {
        self.kind == SourceType::Implicit
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Reads the source's manifest into its item collections. Idempotent:
    /// a loaded source is never re-read.
    pub fn load(&mut self) -> Result<(), SourceError> {
        if self.loaded {
            return Ok(());
        }
        let manifest = SourceManifest::read(&self.path.join("source.toml"))?;
        // Discovery only knows a source's directory; the uri lives in the
        // manifest.
        if !self.implicit() && !manifest.uri.is_empty() {
            self.uri = manifest.uri.clone();
            self.kind = classify_uri(&self.uri);
        }
        self.deps = manifest.deps_items();
        self.templates = manifest.template_items();
        self.loaded = true;
        Ok(())
    }

    pub fn items(&self, kind: CollectionKind) -> &[Item] {
        match kind {
            CollectionKind::Deps => &self.deps,
            CollectionKind::Templates => &self.templates,
        }
    }

    /// Test/seed constructor: a source with its collections already in
    /// memory, no backing directory.
    pub fn preloaded(
        name: impl Into<String>,
        uri: impl Into<String>,
        kind: SourceType,
        deps: Vec<Item>,
        templates: Vec<Item>,
    ) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            kind,
            path: PathBuf::new(),
            loaded: true,
            deps,
            templates,
        }
    }
}
