//! Output formatting for CLI commands
//!
//! Handlers never print directly; everything goes through [`Output`] so the
//! global `-q`/`-d` flags have one place to act.

/// Logging level, from the global flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Debug,
}

/// Text sink for all user-facing output.
#[derive(Debug, Clone, Default)]
pub struct Output {
    verbosity: Verbosity,
}

impl Output {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        let verbosity = if debug {
            Verbosity::Debug
        } else if quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        };
        Self::new(verbosity)
    }

    /// Primary output: listings, help text. Always printed.
    pub fn log(&self, message: &str) {
        println!("{}", message);
    }

    /// Progress chatter, suppressed by `--quiet`.
    pub fn info(&self, message: &str) {
        if self.verbosity != Verbosity::Quiet {
            println!("{}", message);
        }
    }

    /// Debug detail, shown only with `--debug`.
    pub fn debug(&self, message: &str) {
        if self.verbosity == Verbosity::Debug {
            eprintln!("[debug] {}", message);
        }
    }

    /// Failure reporting. Always printed, to stderr.
    pub fn error(&self, message: &str) {
        eprintln!("{}", message);
    }

    /// A blank separator line.
    pub fn blank(&self) {
        println!();
    }
}
