//! Token matcher for DSL calls.
//!
//! A fragment is a DSL call when it has the shape
//! `keyword(arg1,arg2,...)[:pseudo]` and `keyword` is configured for one of
//! the roles. Arguments are comma separated and may not contain parentheses
//! or colons. The optional pseudo suffix is everything after the first `:`
//! following the closing parenthesis, as long as it does not open a further
//! unescaped `(`.
//!
//! ```rust
//! use syscss::{Role, Settings};
//! use syscss::compiler::matcher::match_call;
//!
//! let settings = Settings::default();
//! let call = match_call("component(one,two):hover", &settings).unwrap();
//! assert_eq!(call.role, Role::Block);
//! assert_eq!(call.args, vec!["one", "two"]);
//! assert_eq!(call.pseudo, ":hover");
//! ```

use nom::{
    IResult,
    bytes::complete::take_while1,
    character::complete::char,
    combinator::{all_consuming, opt, recognize, rest, verify},
    sequence::{delimited, preceded, tuple},
};

use crate::settings::{Role, Settings, is_keyword_char};

/// One matched DSL call, borrowed from the fragment it was found in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallDefinition<'a> {
    pub role: Role,
    pub keyword: &'a str,
    /// Never empty.
    pub args: Vec<&'a str>,
    /// Includes the leading `:`, empty when absent.
    pub pseudo: &'a str,
}

impl CallDefinition<'_> {
    /// Splits the call into one single-argument call per argument, each
    /// keeping the pseudo suffix.
    ///
    /// `component(one,two):hover` becomes
    /// `["component(one):hover", "component(two):hover"]`.
    pub fn expand(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| format!("{}({}){}", self.keyword, arg, self.pseudo))
            .collect()
    }
}

/// Matches `fragment` against the DSL grammar of every configured role.
///
/// A single trailing `,` is tolerated and never becomes part of an argument
/// or of the pseudo suffix. Returns `None` for anything else; such fragments
/// are literal CSS.
pub fn match_call<'a>(fragment: &'a str, settings: &Settings) -> Option<CallDefinition<'a>> {
    let fragment = fragment.strip_suffix(',').unwrap_or(fragment);
    let (_, (keyword, raw_args, pseudo)) = parse_call(fragment).ok()?;
    let role = settings.role_for_keyword(keyword)?;

    let args: Vec<&str> = raw_args
        .split(',')
        .map(str::trim)
        .filter(|arg| !arg.is_empty())
        .collect();
    if args.is_empty() {
        return None;
    }

    Some(CallDefinition {
        role,
        keyword,
        args,
        pseudo: pseudo.unwrap_or(""),
    })
}

/// True when `fragment` is a DSL call for any configured role.
pub fn is_call(fragment: &str, settings: &Settings) -> bool {
    match_call(fragment, settings).is_some()
}

fn parse_call(input: &str) -> IResult<&str, (&str, &str, Option<&str>)> {
    all_consuming(tuple((parse_keyword, parse_arguments, opt(parse_pseudo))))(input)
}

fn parse_keyword(input: &str) -> IResult<&str, &str> {
    take_while1(is_keyword_char)(input)
}

fn parse_arguments(input: &str) -> IResult<&str, &str> {
    delimited(
        char('('),
        take_while1(|c: char| !matches!(c, '(' | ')' | ':')),
        char(')'),
    )(input)
}

fn parse_pseudo(input: &str) -> IResult<&str, &str> {
    verify(recognize(preceded(char(':'), rest)), |pseudo: &str| {
        pseudo.len() > 1 && !has_unescaped_open_paren(pseudo)
    })(input)
}

fn has_unescaped_open_paren(text: &str) -> bool {
    let mut escaped = false;
    for c in text.chars() {
        match c {
            '\\' if !escaped => escaped = true,
            '(' if !escaped => return true,
            _ => escaped = false,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings::default()
    }

    #[test]
    fn matches_single_argument_call() {
        let call = match_call("has(title)", &settings()).unwrap();
        assert_eq!(call.role, Role::Element);
        assert_eq!(call.keyword, "has");
        assert_eq!(call.args, vec!["title"]);
        assert_eq!(call.pseudo, "");
    }

    #[test]
    fn splits_arguments_on_commas() {
        let call = match_call("when(big,small,tiny)", &settings()).unwrap();
        assert_eq!(call.args, vec!["big", "small", "tiny"]);
    }

    #[test]
    fn keeps_double_colon_pseudo_elements() {
        let call = match_call("component(card)::before", &settings()).unwrap();
        assert_eq!(call.pseudo, "::before");
    }

    #[test]
    fn tolerates_trailing_selector_list_comma() {
        let call = match_call("component(card):hover,", &settings()).unwrap();
        assert_eq!(call.args, vec!["card"]);
        assert_eq!(call.pseudo, ":hover");

        let call = match_call("component(a,b),", &settings()).unwrap();
        assert_eq!(call.args, vec!["a", "b"]);
    }

    #[test]
    fn rejects_unconfigured_keywords() {
        assert!(match_call("widget(card)", &settings()).is_none());
        assert!(match_call(":not(.card)", &settings()).is_none());
    }

    #[test]
    fn rejects_malformed_calls() {
        for fragment in [
            "component",
            "component()",
            "component(card",
            "component(a:b)",
            "component(card).extra",
            "component(card):",
            "component(card):not(.x)",
            ".component(card)",
        ] {
            assert!(match_call(fragment, &settings()).is_none(), "{fragment}");
        }
    }

    #[test]
    fn escaped_parenthesis_is_allowed_in_pseudo() {
        let call = match_call(r"is(on):x\(1\)", &settings()).unwrap();
        assert_eq!(call.pseudo, r":x\(1\)");
    }

    #[test]
    fn expand_preserves_pseudo_for_each_argument() {
        let call = match_call("component(one,two):hover", &settings()).unwrap();
        assert_eq!(
            call.expand(),
            vec!["component(one):hover", "component(two):hover"]
        );
    }

    #[test]
    fn custom_keywords_are_recognised() {
        let mut settings = settings();
        settings.mixins.block = "new".to_string();
        assert_eq!(match_call("new(card)", &settings).unwrap().role, Role::Block);
        assert!(match_call("component(card)", &settings).is_none());
    }
}
