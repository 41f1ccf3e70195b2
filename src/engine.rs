//! The execution-engine boundary
//!
//! Actually meeting a dep (checking its state, running its setup, walking
//! its requirements) is the job of a separate engine; the CLI only needs
//! "run this name, did it work". [`Engine`] is that seam. The shipped
//! [`ResolveEngine`] stops at resolution: it finds the named dep across the
//! present sources and reports the outcome, which is enough for `--dry-run`
//! style inspection and for wiring tests.

use crate::cli::Output;
use crate::source::{CollectionKind, SourceRegistry};

/// One attempt at one dep name.
pub trait Engine {
    fn process(&mut self, dep_name: &str) -> bool;
}

/// Resolves dep names against the registry without executing anything.
///
/// Accepts bare names (`git`) and qualified references (`core:git`).
pub struct ResolveEngine {
    registry: SourceRegistry,
    output: Output,
}

impl ResolveEngine {
    pub fn new(registry: SourceRegistry, output: Output) -> Self {
        Self { registry, output }
    }

    fn resolve(&mut self, dep_name: &str) -> Option<(String, String)> {
        if self.registry.load_all().is_err() {
            return None;
        }
        let (source_name, bare) = match dep_name.split_once(':') {
            Some((source, bare)) => (Some(source), bare),
            None => (None, dep_name),
        };
        self.registry
            .sources()
            .iter()
            .filter(|s| source_name.map_or(true, |n| s.name() == n))
            .find_map(|s| {
                s.items(CollectionKind::Deps)
                    .iter()
                    .find(|item| item.name == bare)
                    .map(|item| (s.name().to_string(), item.name.clone()))
            })
    }
}

impl Engine for ResolveEngine {
    fn process(&mut self, dep_name: &str) -> bool {
        match self.resolve(dep_name) {
            Some((source, name)) => {
                self.output.info(&format!("{}:{} resolved.", source, name));
                true
            }
            None => {
                self.output.error(&format!("{} is not a dep in any present source.", dep_name));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Output, Verbosity};
    use crate::source::{Item, Source, SourceType};

    fn engine_with(sources: Vec<Source>) -> ResolveEngine {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = SourceRegistry::at(dir.path().join("sources"));
        for source in sources {
            registry.insert(source);
        }
        ResolveEngine::new(registry, Output::new(Verbosity::Quiet))
    }

    fn demo_source() -> Source {
        Source::preloaded(
            "demo",
            "https://example.org/demo",
            SourceType::Remote,
            vec![Item::new("git", None), Item::new("curl", None)],
            vec![],
        )
    }

    #[test]
    fn resolves_bare_and_qualified_names() {
        let mut engine = engine_with(vec![demo_source()]);
        assert!(engine.process("git"));
        assert!(engine.process("demo:curl"));
    }

    #[test]
    fn rejects_unknown_names_and_wrong_sources() {
        let mut engine = engine_with(vec![demo_source()]);
        assert!(!engine.process("zsh"));
        assert!(!engine.process("other:git"));
    }
}
