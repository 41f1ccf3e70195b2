//! # Command-Line Interface
//!
//! The user-facing layer: token parsing against the declarative grammar,
//! the verb dispatch table, and output formatting.
//!
//! ## Commands
//!
//! | Verb | Purpose |
//! |------|---------|
//! | `meet` | Run one or more deps through the execution engine |
//! | `list` | List deps (or templates, with `-t`) across all present sources |
//! | `sources` | Register (`-a`) and list (`-l`) dep sources |
//! | `help` | General or per-verb usage |
//! | `version` | Print the current version |
//!
//! The global `-q/--quiet` and `-d/--debug` flags are accepted on any verb
//! and tune logging only.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse `std::env::args` and execute the selected verb.
//! It returns `Ok(true)` for a success outcome, `Ok(false)` for a reported
//! failure (parse error, failed dep, bad source), and `Err` only for
//! unexpected environment problems.

mod app;
mod output;
mod parser;
mod help;
mod list;
mod dispatch;

pub use app::run;
pub use dispatch::dispatch;
pub use list::generate_listing;
pub use output::{Output, Verbosity};
pub use parser::{match_verb, parse, ParseError};
