//! The verb dispatch table
//!
//! Maps a parsed verb onto its handler. Handlers return `true`/`false` for
//! the process outcome; `Err` is reserved for environment failures the
//! handler can't turn into a user-facing line itself.

use anyhow::{bail, Result};

use crate::domain::{BoundVerb, Opt, Verb};
use crate::engine::Engine;
use crate::source::{CollectionKind, SourceRegistry};

use super::help;
use super::list::generate_listing;
use super::output::Output;

pub fn dispatch(
    verbs: &[Verb],
    globals: &[Opt],
    bound: &BoundVerb<'_>,
    registry: &mut SourceRegistry,
    engine: &mut dyn Engine,
    output: &Output,
) -> Result<bool> {
    match bound.def.name {
        "meet" => Ok(handle_meet(bound, engine, output)),
        "list" => Ok(handle_list(bound, registry, output)),
        "sources" => Ok(handle_sources(bound, registry, output)),
        "help" => {
            help::handle_help(output, verbs, globals, bound.arg_value("verb"));
            Ok(true)
        }
        "version" => {
            help::print_version(output, false);
            Ok(true)
        }
        other => bail!("no handler for `{}`", other),
    }
}

/// Runs every named dep through the engine. All names are attempted; one
/// failure fails the invocation but never stops the rest.
fn handle_meet(bound: &BoundVerb<'_>, engine: &mut dyn Engine, output: &Output) -> bool {
    let names = bound.arg_values("dep_names");
    if names.is_empty() {
        output.error("Nothing to do.");
        return false;
    }
    let mut all_met = true;
    for name in names {
        output.debug(&format!("meeting `{}`", name));
        if !engine.process(name) {
            all_met = false;
        }
    }
    all_met
}

fn handle_list(bound: &BoundVerb<'_>, registry: &mut SourceRegistry, output: &Output) -> bool {
    let kind = if bound.has_opt("templates") {
        CollectionKind::Templates
    } else {
        CollectionKind::Deps
    };
    match generate_listing(output, registry, kind, bound.arg_value("filter")) {
        Ok(()) => true,
        Err(e) => {
            output.error(&e.to_string());
            false
        }
    }
}

fn handle_sources(bound: &BoundVerb<'_>, registry: &mut SourceRegistry, output: &Output) -> bool {
    if let Some(add) = bound.opt("add") {
        // Both nested args carry defaults, so they are always bound.
        let name = add.arg_value("name").unwrap_or_default();
        let uri = add.arg_value("uri").unwrap_or_default();
        match registry.add(name, uri) {
            Ok(()) => {
                output.info(&format!("Added {} from {}.", name, uri));
                true
            }
            Err(e) => {
                output.error(&e.to_string());
                false
            }
        }
    } else if bound.has_opt("list") {
        if let Err(e) = registry.load_all() {
            output.error(&e.to_string());
            return false;
        }
        for source in registry.sources() {
            if source.implicit() {
                output.log(&format!("{} ({})", source.name(), source.kind().label()));
            } else {
                output.log(&format!(
                    "{} ({}) - {}",
                    source.name(),
                    source.kind().label(),
                    source.uri()
                ));
            }
        }
        true
    } else {
        output.error("'sources' requires an option.");
        help::print_usage_for(output, bound.def);
        false
    }
}
