//! Outfit - a small dependency-provisioning CLI
//!
//! Outfit organizes reusable setup steps ("deps") into sources, and gives
//! them a command-line vocabulary: `meet` runs deps, `list` shows what the
//! registered sources provide, `sources` manages the sources themselves.
//! The command grammar is declarative data (see [`domain::grammar`]) and is
//! parsed by a small hand-written matcher rather than a framework.

pub mod domain;
pub mod source;
pub mod engine;
pub mod cli;

pub use domain::{Arg, Opt, Verb, BoundVerb, Value};
pub use source::{CollectionKind, Item, Source, SourceRegistry};
