//! Multi-argument call expansion.
//!
//! A selector such as `component(one, two) has(part, element)` is expanded
//! into the cartesian product of single-argument calls:
//!
//! ```text
//! component(one) has(part),
//! component(one) has(element),
//! component(two) has(part),
//! component(two) has(element)
//! ```
//!
//! The leftmost fragment varies slowest, so clause order follows the
//! left-to-right argument order of the source.

use crate::compiler::matcher::{CallDefinition, is_call, match_call};
use crate::settings::Settings;

/// Separator placed between expanded clauses.
pub const CLAUSE_SEPARATOR: &str = ",\n";

/// A whitespace-delimited piece of a selector.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Fragment<'a> {
    Call(CallDefinition<'a>),
    Literal(&'a str),
}

impl Fragment<'_> {
    fn expansions(&self) -> Vec<String> {
        match self {
            Fragment::Call(call) => call.expand(),
            Fragment::Literal(text) => vec![text.to_string()],
        }
    }
}

/// Expands every multi-argument call in `selector`.
///
/// Returns `None` when the selector contains no DSL call at all, in which
/// case it must be left untouched. Otherwise returns the expanded clauses
/// in output order; each clause only contains single-argument calls.
pub fn expand(selector: &str, settings: &Settings) -> Option<Vec<String>> {
    let normalized = normalize_argument_commas(selector);
    let items = split_selector_list(&normalized);

    let has_calls = items
        .iter()
        .flat_map(|item| item.split_whitespace())
        .any(|fragment| is_call(fragment, settings));
    if !has_calls {
        return None;
    }

    let clauses: Vec<String> = items
        .iter()
        .flat_map(|item| expand_item(item, settings))
        .collect();
    log::debug!(
        "expanded `{}` into {} clause(s)",
        selector.trim(),
        clauses.len()
    );
    Some(clauses)
}

/// Expands `selector` and joins the clauses with `,\n`, or returns it
/// unchanged when it contains no DSL call.
pub fn expand_selector(selector: &str, settings: &Settings) -> String {
    match expand(selector, settings) {
        Some(clauses) => clauses.join(CLAUSE_SEPARATOR),
        None => selector.to_string(),
    }
}

/// Expands one complex selector (no top-level commas).
fn expand_item(item: &str, settings: &Settings) -> Vec<String> {
    let fragments: Vec<Fragment<'_>> = item
        .split_whitespace()
        .map(|fragment| match match_call(fragment, settings) {
            Some(call) => Fragment::Call(call),
            None => Fragment::Literal(fragment),
        })
        .collect();

    let mut options: Vec<Vec<String>> = fragments.iter().map(Fragment::expansions).collect();

    // Right-to-left fold: each option of the left fragment is combined with
    // every clause accumulated so far on its right.
    let Some(mut folded) = options.pop() else {
        return Vec::new();
    };
    while let Some(left) = options.pop() {
        let mut combined = Vec::with_capacity(left.len() * folded.len());
        for head in &left {
            for tail in &folded {
                combined.push(format!("{head} {tail}"));
            }
        }
        folded = combined;
    }
    folded
}

/// Removes whitespace after commas so that `component(a, b)` is a single
/// fragment.
fn normalize_argument_commas(selector: &str) -> String {
    let mut output = String::with_capacity(selector.len());
    let mut chars = selector.chars().peekable();
    while let Some(c) = chars.next() {
        output.push(c);
        if c == ',' {
            while chars.next_if(|next| next.is_whitespace()).is_some() {}
        }
    }
    output
}

/// Splits a selector list on commas that are not inside parentheses.
///
/// `component(a,b),.other` yields `["component(a,b)", ".other"]`.
pub(crate) fn split_selector_list(selector: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in selector.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                items.push(&selector[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(&selector[start..]);
    items
        .into_iter()
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}
