//! Domain models for the Outfit CLI
//!
//! The command grammar (verbs, options, arguments) and its bound,
//! per-invocation counterparts. Pure data, no I/O.

mod grammar;
mod bound;

pub use grammar::{grammar, global_opts, Arg, Opt, Verb};
pub use bound::{BoundArg, BoundOpt, BoundVerb, Value};
