//! Nested rule flattening.
//!
//! ```css
//! component(card) {
//!     color: white;
//!     &:hover { color: red; }
//!     has(title) { margin: 0; }
//! }
//! ```
//!
//! flattens to:
//!
//! ```css
//! component(card) { color: white; }
//! component(card):hover { color: red; }
//! component(card) has(title) { margin: 0; }
//! ```
//!
//! ## Flattening Rules
//!
//! - every `&` in a nested selector is replaced by the parent selector
//! - a nested selector without `&` is a descendant of its parent
//! - selector lists multiply: each parent item is combined with each child item
//! - an at-rule nested in a rule bubbles up and wraps a copy of the parent rule

use crate::compiler::expand::split_selector_list;
use crate::sheet::{AtRule, Node, Rule};

/// Lifts every nested rule to the top level (or to the top of its
/// enclosing at-rule).
pub fn flatten(nodes: Vec<Node>) -> Vec<Node> {
    let mut output = Vec::new();
    for node in nodes {
        flatten_node(node, None, &mut output);
    }
    output
}

fn flatten_node(node: Node, parent: Option<&str>, output: &mut Vec<Node>) {
    match node {
        Node::Rule(rule) => {
            let selector = match parent {
                Some(parent) => combine_selectors(parent, &rule.selector),
                None => rule.selector,
            };
            flatten_rule(selector, rule.children, output);
        }
        Node::AtRule(AtRule {
            name,
            prelude,
            block: Some(children),
        }) => {
            let block = match parent {
                Some(parent) => {
                    let mut inner = Vec::new();
                    flatten_rule(parent.to_string(), children, &mut inner);
                    inner
                }
                None => flatten(children),
            };
            output.push(Node::AtRule(AtRule {
                name,
                prelude,
                block: Some(block),
            }));
        }
        other => output.push(other),
    }
}

fn flatten_rule(selector: String, children: Vec<Node>, output: &mut Vec<Node>) {
    let (nested, own): (Vec<Node>, Vec<Node>) = children.into_iter().partition(|child| {
        matches!(
            child,
            Node::Rule(_) | Node::AtRule(AtRule { block: Some(_), .. })
        )
    });

    // Empty rules survive so that `.test {}` round-trips.
    if !own.is_empty() || nested.is_empty() {
        output.push(Node::Rule(Rule::new(selector.clone(), own)));
    }
    for child in nested {
        flatten_node(child, Some(&selector), output);
    }
}

/// Combines a parent selector list with a nested selector list.
///
/// `combine_selectors("component(a), .b", "&:hover")` yields
/// `"component(a):hover, .b:hover"`.
pub fn combine_selectors(parent: &str, child: &str) -> String {
    let parents = split_selector_list(parent);
    let children = split_selector_list(child);

    let mut combined = Vec::with_capacity(parents.len() * children.len());
    for p in &parents {
        for c in &children {
            if c.contains('&') {
                combined.push(c.replace('&', p));
            } else {
                combined.push(format!("{p} {c}"));
            }
        }
    }
    combined.join(", ")
}
