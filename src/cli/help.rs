//! Usage and help text, generated from the grammar

use crate::domain::{Arg, Opt, Verb};

use super::output::Output;
use super::parser::match_verb;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_version(output: &Output, full: bool) {
    if full {
        output.log(&format!("outfit {}", VERSION));
    } else {
        output.log(VERSION);
    }
}

/// General usage: the one-line synopsis plus the verb table.
pub fn print_usage(output: &Output, verbs: &[Verb], globals: &[Opt]) {
    output.blank();
    output.log("Usage: outfit [options] <command>");
    print_choices(output, "commands", &verbs.iter().map(verb_choice).collect::<Vec<_>>());
    print_choices(output, "options", &globals.iter().map(opt_choice).collect::<Vec<_>>());
    output.blank();
    output.log("Run `outfit help <command>` for command-specific usage.");
}

/// Verb-specific usage: synopsis plus that verb's options and arguments.
pub fn print_usage_for(output: &Output, verb: &Verb) {
    output.blank();
    let mut line = format!("Usage: outfit {}", verb.name);
    if !verb.opts.is_empty() {
        line.push_str(" [options]");
    }
    for arg in &verb.args {
        line.push(' ');
        line.push_str(&arg.placeholder());
    }
    output.log(&line);

    let mut choices: Vec<(String, String)> =
        verb.opts.iter().map(opt_choice).collect();
    choices.extend(verb.args.iter().map(arg_choice));
    print_choices(output, "options", &choices);
}

/// The `help` verb: general help, or per-verb help when a topic was given.
pub fn handle_help(output: &Output, verbs: &[Verb], globals: &[Opt], topic: Option<&str>) {
    print_version(output, true);
    match topic {
        None => print_usage(output, verbs, globals),
        Some(topic) => match match_verb(verbs, topic) {
            Some(verb) => print_usage_for(output, verb),
            None => {
                output.log(&format!("{}? I have honestly never heard of that.", capitalize(topic)));
            }
        },
    }
    output.blank();
}

/// An aligned name/description table under a heading.
fn print_choices(output: &Output, heading: &str, choices: &[(String, String)]) {
    if choices.is_empty() {
        return;
    }
    output.blank();
    output.log(&format!("Available {}:", heading));
    let width = choices.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 2;
    for (label, description) in choices {
        output.log(&format!("  {:<width$}{}", label, description));
    }
}

fn verb_choice(verb: &Verb) -> (String, String) {
    let mut label = verb.name.to_string();
    for alias in [verb.short, verb.long].into_iter().flatten() {
        label.push_str(", ");
        label.push_str(alias);
    }
    (label, verb.description.to_string())
}

fn opt_choice(opt: &Opt) -> (String, String) {
    let mut label = [opt.short, opt.long]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");
    for arg in &opt.args {
        label.push(' ');
        label.push_str(&arg.placeholder());
    }
    (label, opt.description.to_string())
}

fn arg_choice(arg: &Arg) -> (String, String) {
    let mut description = arg.description.to_string();
    if let Some(default) = arg.default {
        description.push_str(&format!(" (default: {})", default));
    }
    (arg.placeholder(), description)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
