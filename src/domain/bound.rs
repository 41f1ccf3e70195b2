//! Bound (parsed) command instances
//!
//! A [`BoundVerb`] is one invocation's worth of parse results: the selected
//! verb definition plus every option and argument that received a value.
//! Slots are either bound to a token, bound to their declared default, or
//! absent (legal only for optional slots) - callers never see a
//! "not parsed yet" state.

use super::grammar::{Arg, Opt, Verb};

/// A value bound to an argument slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    One(String),
    Many(Vec<String>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::One(s) => Some(s),
            Value::Many(_) => None,
        }
    }

    pub fn as_list(&self) -> &[String] {
        match self {
            Value::One(s) => std::slice::from_ref(s),
            Value::Many(v) => v,
        }
    }
}

/// An argument that received a value (or its default).
#[derive(Debug, Clone)]
pub struct BoundArg<'g> {
    pub def: &'g Arg,
    pub value: Value,
}

/// An option that was present on the command line, with its own bound
/// arguments when it declares any.
#[derive(Debug, Clone)]
pub struct BoundOpt<'g> {
    pub def: &'g Opt,
    pub args: Vec<BoundArg<'g>>,
}

impl<'g> BoundOpt<'g> {
    pub fn arg(&self, name: &str) -> Option<&BoundArg<'g>> {
        self.args.iter().find(|a| a.def.name == name)
    }

    pub fn arg_value(&self, name: &str) -> Option<&str> {
        self.arg(name).and_then(|a| a.value.as_str())
    }
}

/// A fully parsed invocation of one verb.
#[derive(Debug, Clone)]
pub struct BoundVerb<'g> {
    pub def: &'g Verb,
    pub opts: Vec<BoundOpt<'g>>,
    pub args: Vec<BoundArg<'g>>,
    /// Global `-q/--quiet` flag, recorded here rather than dispatched.
    pub quiet: bool,
    /// Global `-d/--debug` flag.
    pub debug: bool,
}

impl<'g> BoundVerb<'g> {
    pub fn opt(&self, name: &str) -> Option<&BoundOpt<'g>> {
        self.opts.iter().find(|o| o.def.name == name)
    }

    pub fn has_opt(&self, name: &str) -> bool {
        self.opt(name).is_some()
    }

    pub fn arg(&self, name: &str) -> Option<&BoundArg<'g>> {
        self.args.iter().find(|a| a.def.name == name)
    }

    /// The single value of a named argument, if bound.
    pub fn arg_value(&self, name: &str) -> Option<&str> {
        self.arg(name).and_then(|a| a.value.as_str())
    }

    /// The values of a named argument; empty when absent.
    pub fn arg_values(&self, name: &str) -> &[String] {
        self.arg(name).map(|a| a.value.as_list()).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_accessors() {
        let one = Value::One("a".into());
        assert_eq!(one.as_str(), Some("a"));
        assert_eq!(one.as_list(), ["a".to_string()]);

        let many = Value::Many(vec!["a".into(), "b".into()]);
        assert_eq!(many.as_str(), None);
        assert_eq!(many.as_list().len(), 2);
    }
}
