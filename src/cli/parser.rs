//! Token parsing against the grammar
//!
//! [`match_verb`] picks the verb from the first token; [`parse`] walks the
//! rest, binding flags to declared options and everything else to the
//! verb's positional arguments. The walk is a single left-to-right pass
//! over a token queue: a flag that owns nested arguments claims the run of
//! non-flag tokens after it, and whatever that run doesn't consume falls
//! back to the verb's own arguments.

use std::collections::VecDeque;

use thiserror::Error;

use crate::domain::{Arg, BoundArg, BoundOpt, BoundVerb, Opt, Value, Verb};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command `{0}`")]
    UnknownVerb(String),

    #[error("unknown option `{flag}` for `{context}`")]
    UnknownOption { context: String, flag: String },

    #[error("missing required argument `{arg}` for `{context}`")]
    MissingRequiredArgument { context: String, arg: &'static str },
}

/// Picks the verb named by `token`: its name, short flag, or long flag,
/// compared exactly. First match wins; no prefix or fuzzy matching.
pub fn match_verb<'g>(verbs: &'g [Verb], token: &str) -> Option<&'g Verb> {
    verbs.iter().find(|v| v.matches(token))
}

/// Flag-shaped: starts with `-` and isn't a bare `-`.
fn looks_like_flag(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-')
}

/// Parses the tokens after the verb. On success, every declared slot on
/// the result is bound to a token, bound to its default, or absent (for
/// optional slots only).
pub fn parse<'g>(
    verb: &'g Verb,
    globals: &'g [Opt],
    tokens: &[String],
) -> Result<BoundVerb<'g>, ParseError> {
    let mut queue: VecDeque<String> = tokens.iter().cloned().collect();
    let mut opts: Vec<BoundOpt<'g>> = Vec::new();
    let mut positional: VecDeque<String> = VecDeque::new();
    let mut quiet = false;
    let mut debug = false;

    while let Some(token) = queue.pop_front() {
        if let Some(opt) = verb.opts.iter().find(|o| o.matches(&token)) {
            if opt.args.is_empty() {
                opts.push(BoundOpt { def: opt, args: Vec::new() });
                continue;
            }
            // Claim the run of non-flag tokens after the flag, bind them to
            // the option's own arguments, and let any leftovers fall back
            // to the verb's positionals.
            let mut run: VecDeque<String> = VecDeque::new();
            while queue.front().is_some_and(|t| !looks_like_flag(t)) {
                if let Some(t) = queue.pop_front() {
                    run.push_back(t);
                }
            }
            let context = format!("{} {}", verb.name, opt.flag_label());
            let args = bind_args(&opt.args, &mut run, &context)?;
            positional.extend(run);
            opts.push(BoundOpt { def: opt, args });
        } else if let Some(global) = globals.iter().find(|o| o.matches(&token)) {
            match global.name {
                "quiet" => quiet = true,
                "debug" => debug = true,
                _ => {}
            }
        } else if looks_like_flag(&token) {
            return Err(ParseError::UnknownOption {
                context: verb.name.to_string(),
                flag: token,
            });
        } else {
            positional.push_back(token);
        }
    }

    let args = bind_args(&verb.args, &mut positional, verb.name)?;
    Ok(BoundVerb { def: verb, opts, args, quiet, debug })
}

/// Binds a token queue to an argument list in declaration order.
///
/// Each non-variadic argument takes one token, falling back to its default
/// when the queue runs dry; a variadic argument (last only, by grammar
/// invariant) drains the queue. Consumed tokens leave the queue, so the
/// caller can see what was left over.
fn bind_args<'g>(
    defs: &'g [Arg],
    tokens: &mut VecDeque<String>,
    context: &str,
) -> Result<Vec<BoundArg<'g>>, ParseError> {
    let mut bound = Vec::new();
    for def in defs {
        if def.variadic {
            let rest: Vec<String> = tokens.drain(..).collect();
            if !rest.is_empty() {
                bound.push(BoundArg { def, value: Value::Many(rest) });
            } else if let Some(default) = def.default {
                bound.push(BoundArg { def, value: Value::Many(vec![default.to_string()]) });
            } else if !def.optional {
                return Err(ParseError::MissingRequiredArgument {
                    context: context.to_string(),
                    arg: def.name,
                });
            }
        } else if let Some(token) = tokens.pop_front() {
            bound.push(BoundArg { def, value: Value::One(token) });
        } else if let Some(default) = def.default {
            bound.push(BoundArg { def, value: Value::One(default.to_string()) });
        } else if !def.optional {
            return Err(ParseError::MissingRequiredArgument {
                context: context.to_string(),
                arg: def.name,
            });
        }
    }
    Ok(bound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{global_opts, grammar};
    use proptest::prelude::*;

    fn toks(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn verb<'g>(verbs: &'g [Verb], name: &str) -> &'g Verb {
        verbs.iter().find(|v| v.name == name).unwrap()
    }

    // A small synthetic verb exercising shapes the real grammar doesn't.
    fn strict_verb() -> Verb {
        Verb {
            name: "strict",
            short: None,
            long: None,
            description: "",
            opts: vec![],
            args: vec![
                Arg::required("first", ""),
                Arg::optional("second", ""),
            ],
        }
    }

    #[test]
    fn match_verb_accepts_name_and_aliases() {
        let verbs = grammar();
        for token in ["list", "-T", "--tasks"] {
            let found = match_verb(&verbs, token).unwrap();
            assert_eq!(found.name, "list");
        }
        assert_eq!(match_verb(&verbs, "version").unwrap().name, "version");
        assert!(match_verb(&verbs, "frobnicate").is_none());
        assert!(match_verb(&verbs, "lis").is_none());
    }

    #[test]
    fn presence_flags_bind_by_either_form() {
        let verbs = grammar();
        let list = verb(&verbs, "list");
        let globals = global_opts();

        let bound = parse(list, &globals, &toks(&["-t"])).unwrap();
        assert!(bound.has_opt("templates"));

        let bound = parse(list, &globals, &toks(&["--templates"])).unwrap();
        assert!(bound.has_opt("templates"));

        let bound = parse(list, &globals, &toks(&[])).unwrap();
        assert!(!bound.has_opt("templates"));
    }

    #[test]
    fn positionals_bind_in_declaration_order() {
        let verbs = grammar();
        let list = verb(&verbs, "list");
        let globals = global_opts();
        let bound = parse(list, &globals, &toks(&["foo"])).unwrap();
        assert_eq!(bound.arg_value("filter"), Some("foo"));
    }

    #[test]
    fn optional_arg_without_token_is_absent() {
        let verbs = grammar();
        let list = verb(&verbs, "list");
        let globals = global_opts();
        let bound = parse(list, &globals, &toks(&[])).unwrap();
        assert!(bound.arg("filter").is_none());
    }

    #[test]
    fn variadic_preserves_count_and_order() {
        let verbs = grammar();
        let meet = verb(&verbs, "meet");
        let globals = global_opts();
        let bound = parse(meet, &globals, &toks(&["git", "curl", "zsh"])).unwrap();
        assert_eq!(bound.arg_values("dep_names"), ["git", "curl", "zsh"]);
    }

    #[test]
    fn empty_required_variadic_is_an_error() {
        let verbs = grammar();
        let meet = verb(&verbs, "meet");
        let globals = global_opts();
        let err = parse(meet, &globals, &toks(&[])).unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingRequiredArgument { context: "meet".into(), arg: "dep_names" }
        );
    }

    #[test]
    fn flags_interleave_with_positionals() {
        let verbs = grammar();
        let meet = verb(&verbs, "meet");
        let globals = global_opts();
        let bound = parse(meet, &globals, &toks(&["git", "--force", "curl"])).unwrap();
        assert!(bound.has_opt("force"));
        assert_eq!(bound.arg_values("dep_names"), ["git", "curl"]);
    }

    #[test]
    fn nested_args_bind_after_their_flag() {
        let verbs = grammar();
        let sources = verb(&verbs, "sources");
        let globals = global_opts();
        let bound =
            parse(sources, &globals, &toks(&["-a", "extras", "https://x.example/extras"]))
                .unwrap();
        let add = bound.opt("add").unwrap();
        assert_eq!(add.arg_value("name"), Some("extras"));
        assert_eq!(add.arg_value("uri"), Some("https://x.example/extras"));
    }

    #[test]
    fn nested_args_fall_back_to_declared_defaults() {
        let verbs = grammar();
        let sources = verb(&verbs, "sources");
        let globals = global_opts();

        let bound = parse(sources, &globals, &toks(&["--add"])).unwrap();
        let add = bound.opt("add").unwrap();
        assert_eq!(add.arg_value("name"), Some("main"));
        assert_eq!(add.arg_value("uri"), Some("https://github.com/outfit-deps/core"));

        let bound = parse(sources, &globals, &toks(&["--add", "extras"])).unwrap();
        let add = bound.opt("add").unwrap();
        assert_eq!(add.arg_value("name"), Some("extras"));
        assert_eq!(add.arg_value("uri"), Some("https://github.com/outfit-deps/core"));
    }

    #[test]
    fn nested_arg_run_stops_at_the_next_flag() {
        let verbs = grammar();
        let sources = verb(&verbs, "sources");
        let globals = global_opts();
        let bound = parse(sources, &globals, &toks(&["-a", "extras", "-l"])).unwrap();
        let add = bound.opt("add").unwrap();
        assert_eq!(add.arg_value("name"), Some("extras"));
        // uri fell back to its default; -l bound as its own option.
        assert_eq!(add.arg_value("uri"), Some("https://github.com/outfit-deps/core"));
        assert!(bound.has_opt("list"));
    }

    #[test]
    fn unknown_flag_is_rejected_with_the_offending_token() {
        let verbs = grammar();
        let list = verb(&verbs, "list");
        let globals = global_opts();
        let err = parse(list, &globals, &toks(&["--nope"])).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownOption { context: "list".into(), flag: "--nope".into() }
        );
    }

    #[test]
    fn global_flags_are_accepted_on_any_verb() {
        let verbs = grammar();
        let meet = verb(&verbs, "meet");
        let globals = global_opts();
        let bound = parse(meet, &globals, &toks(&["-q", "git", "-d"])).unwrap();
        assert!(bound.quiet);
        assert!(bound.debug);
        assert_eq!(bound.arg_values("dep_names"), ["git"]);
    }

    #[test]
    fn required_arg_without_token_or_default_fails() {
        let strict = strict_verb();
        let err = parse(&strict, &[], &toks(&[])).unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingRequiredArgument { context: "strict".into(), arg: "first" }
        );

        let bound = parse(&strict, &[], &toks(&["a"])).unwrap();
        assert_eq!(bound.arg_value("first"), Some("a"));
        assert!(bound.arg("second").is_none());
    }

    #[test]
    fn surplus_positionals_are_ignored() {
        let strict = strict_verb();
        let bound = parse(&strict, &[], &toks(&["a", "b", "c"])).unwrap();
        assert_eq!(bound.arg_value("first"), Some("a"));
        assert_eq!(bound.arg_value("second"), Some("b"));
    }

    proptest! {
        #[test]
        fn variadic_binding_is_order_preserving(
            names in proptest::collection::vec("[a-z][a-z0-9_]{0,8}", 1..8)
        ) {
            let verbs = grammar();
            let meet = verb(&verbs, "meet");
            let tokens: Vec<String> = names.clone();
            let globals = global_opts();
            let bound = parse(meet, &globals, &tokens).unwrap();
            prop_assert_eq!(bound.arg_values("dep_names"), &names[..]);
        }

        #[test]
        fn undeclared_flags_always_error(flag in "--[a-z]{3,10}") {
            let verbs = grammar();
            let vb = verb(&verbs, "version");
            prop_assume!(!vb.matches(&flag));
            let globals = global_opts();
            prop_assume!(!globals.iter().any(|o| o.matches(&flag)));
            let err = parse(vb, &globals, &[flag.clone()]).unwrap_err();
            prop_assert_eq!(
                err,
                ParseError::UnknownOption { context: "version".into(), flag }
            );
        }
    }
}
