//! The command grammar
//!
//! Verbs, options, and arguments are plain declarative records, built once
//! at startup and read-only from then on. The parser consumes them; the
//! help printer formats them. Nothing here executes anything.

/// A positional argument declared on a verb or nested under an option.
#[derive(Debug, Clone)]
pub struct Arg {
    pub name: &'static str,
    pub description: &'static str,
    /// An optional argument may be left unbound without error.
    pub optional: bool,
    /// A variadic argument consumes every remaining positional token.
    /// Only the last argument in a list may be variadic.
    pub variadic: bool,
    /// Applied when no token is left to bind.
    pub default: Option<&'static str>,
}

impl Arg {
    pub const fn required(name: &'static str, description: &'static str) -> Self {
        Self { name, description, optional: false, variadic: false, default: None }
    }

    pub const fn optional(name: &'static str, description: &'static str) -> Self {
        Self { name, description, optional: true, variadic: false, default: None }
    }

    pub const fn variadic(name: &'static str, description: &'static str) -> Self {
        Self { name, description, optional: false, variadic: true, default: None }
    }

    pub const fn with_default(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    /// How the argument appears in usage lines: `<name>`, `[name]`, `<name...>`.
    pub fn placeholder(&self) -> String {
        match (self.optional, self.variadic) {
            (_, true) => format!("<{}...>", self.name),
            (true, _) => format!("[{}]", self.name),
            (false, false) => format!("<{}>", self.name),
        }
    }
}

/// A named flag on a verb, matched by its short or long form.
///
/// An option with no nested arguments is a presence flag. One with nested
/// arguments binds the tokens that follow its flag, up to the next flag,
/// using the same rules as verb arguments.
#[derive(Debug, Clone)]
pub struct Opt {
    pub name: &'static str,
    pub short: Option<&'static str>,
    pub long: Option<&'static str>,
    pub description: &'static str,
    pub args: Vec<Arg>,
}

impl Opt {
    pub fn flag(
        name: &'static str,
        short: Option<&'static str>,
        long: Option<&'static str>,
        description: &'static str,
    ) -> Self {
        Self { name, short, long, description, args: Vec::new() }
    }

    pub fn with_args(
        name: &'static str,
        short: Option<&'static str>,
        long: Option<&'static str>,
        description: &'static str,
        args: Vec<Arg>,
    ) -> Self {
        Self { name, short, long, description, args }
    }

    /// True when `token` is exactly this option's short or long flag.
    pub fn matches(&self, token: &str) -> bool {
        self.short == Some(token) || self.long == Some(token)
    }

    /// The preferred spelling for messages and usage text.
    pub fn flag_label(&self) -> &'static str {
        self.long.or(self.short).unwrap_or(self.name)
    }
}

/// A top-level command. Exactly one verb is selected per invocation.
#[derive(Debug, Clone)]
pub struct Verb {
    pub name: &'static str,
    pub short: Option<&'static str>,
    pub long: Option<&'static str>,
    pub description: &'static str,
    pub opts: Vec<Opt>,
    pub args: Vec<Arg>,
}

impl Verb {
    /// True when `token` is the verb's name or one of its flag aliases.
    pub fn matches(&self, token: &str) -> bool {
        self.name == token || self.short == Some(token) || self.long == Some(token)
    }

    pub fn opt(&self, name: &str) -> Option<&Opt> {
        self.opts.iter().find(|o| o.name == name)
    }
}

/// Flags recognized on every verb. They tune logging only and are recorded
/// on the bound verb rather than dispatched.
pub fn global_opts() -> Vec<Opt> {
    vec![
        Opt::flag("quiet", Some("-q"), Some("--quiet"), "Run with minimal logging"),
        Opt::flag("debug", Some("-d"), Some("--debug"), "Show debug logging"),
    ]
}

/// The full verb table.
pub fn grammar() -> Vec<Verb> {
    vec![
        Verb {
            name: "meet",
            short: None,
            long: None,
            description: "The main one: run a dep and all its dependencies",
            opts: vec![
                Opt::flag(
                    "dry_run",
                    Some("-n"),
                    Some("--dry-run"),
                    "Discover the current state without making any changes",
                ),
                Opt::flag(
                    "defaults",
                    Some("-y"),
                    Some("--defaults"),
                    "Assume the default value for all vars without prompting, where possible",
                ),
                Opt::flag(
                    "force",
                    Some("-f"),
                    Some("--force"),
                    "Attempt to meet the dep even if it's already met",
                ),
            ],
            args: vec![Arg::variadic("dep_names", "The name of the dep to run")],
        },
        Verb {
            name: "list",
            short: Some("-T"),
            long: Some("--tasks"),
            description: "List the available deps",
            opts: vec![Opt::flag(
                "templates",
                Some("-t"),
                Some("--templates"),
                "List templates instead of deps",
            )],
            args: vec![Arg::optional("filter", "Only list deps matching a substring")],
        },
        Verb {
            name: "sources",
            short: None,
            long: None,
            description: "Manage dep sources",
            opts: vec![
                Opt::with_args(
                    "add",
                    Some("-a"),
                    Some("--add"),
                    "Add a dep source",
                    vec![
                        Arg::required("name", "A name for this source").with_default("main"),
                        Arg::required("uri", "The URI of the source to add")
                            .with_default("https://github.com/outfit-deps/core"),
                    ],
                ),
                Opt::flag("list", Some("-l"), Some("--list"), "List dep sources"),
            ],
            args: vec![],
        },
        Verb {
            name: "help",
            short: Some("-h"),
            long: Some("--help"),
            description: "Print usage information",
            opts: vec![],
            args: vec![Arg::optional("verb", "Print command-specific usage info")],
        },
        Verb {
            name: "version",
            short: None,
            long: Some("--version"),
            description: "Print the current version",
            opts: vec![],
            args: vec![],
        },
    ]
}
