//! CLI entry point: argv to outcome

use anyhow::{Context, Result};

use crate::domain::{global_opts, grammar};
use crate::engine::ResolveEngine;
use crate::source::SourceRegistry;

use super::dispatch::dispatch;
use super::help;
use super::output::Output;
use super::parser::{match_verb, parse, ParseError};

/// Parses `std::env::args` and runs the selected verb. `Ok(true)` is a
/// success outcome, `Ok(false)` a reported failure; every failure path has
/// already printed exactly one explanatory line (plus usage where it
/// helps).
pub fn run() -> Result<bool> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    run_with(&args)
}

fn run_with(args: &[String]) -> Result<bool> {
    let verbs = grammar();
    let globals = global_opts();
    let output = Output::default();

    let Some(first) = args.first() else {
        help::print_version(&output, true);
        help::print_usage(&output, &verbs, &globals);
        return Ok(false);
    };

    let Some(verb) = match_verb(&verbs, first) else {
        output.error(&ParseError::UnknownVerb(first.clone()).to_string());
        help::print_usage(&output, &verbs, &globals);
        return Ok(false);
    };

    let bound = match parse(verb, &globals, &args[1..]) {
        Ok(bound) => bound,
        Err(e) => {
            output.error(&e.to_string());
            help::print_usage_for(&output, verb);
            return Ok(false);
        }
    };

    let output = Output::from_flags(bound.quiet, bound.debug);
    output.debug(&format!("dispatching `{}`", verb.name));

    let mut registry = SourceRegistry::open().context("couldn't open the source registry")?;
    let engine_registry = SourceRegistry::open().context("couldn't open the source registry")?;
    let mut engine = ResolveEngine::new(engine_registry, output.clone());

    dispatch(&verbs, &globals, &bound, &mut registry, &mut engine, &output)
}
