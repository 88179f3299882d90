//! A minimal stylesheet walker.
//!
//! The selector compiler only ever sees one rule selector at a time. This
//! module supplies those selectors from a whole stylesheet:
//!
//! 1. [`parse`] splits the source into rules, at-rules, declarations and
//!    comments
//! 2. [`flatten`] lifts nested rules out of their parents (`&` refers to
//!    the parent selector, otherwise nesting means descendant)
//! 3. every rule selector is handed to a [`RuleVisitor`]
//! 4. the result is serialized back to CSS
//!
//! Declarations are kept as opaque text; strings containing `{`, `}` or `;`
//! are not supported.
//!
//! ```rust
//! use syscss::Settings;
//! use syscss::sheet::transform_stylesheet;
//!
//! let css = transform_stylesheet(
//!     "component(card) { color: red; has(title) { margin: 0; } }",
//!     &Settings::default(),
//! )
//! .unwrap();
//! assert_eq!(css, ".card {\n  color: red;\n}\n\n.card--title {\n  margin: 0;\n}");
//! ```

pub mod flatten;
pub mod parser;

pub use flatten::flatten;
pub use parser::parse;

use crate::compiler::compile_selector;
use crate::error::SheetError;
use crate::settings::Settings;

/// A node of a parsed stylesheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Rule(Rule),
    AtRule(AtRule),
    /// `property: value`, without the trailing `;`.
    Declaration(String),
    /// The full comment including `/*` and `*/`.
    Comment(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub children: Vec<Node>,
}

impl Rule {
    pub fn new(selector: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            selector: selector.into(),
            children,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AtRule {
    /// Name without the `@`.
    pub name: String,
    pub prelude: String,
    /// `None` for statements such as `@import "x";`.
    pub block: Option<Vec<Node>>,
}

/// Receives each rule selector of a stylesheet and returns its replacement.
pub trait RuleVisitor {
    fn visit_selector(&self, selector: &str) -> String;
}

impl RuleVisitor for Settings {
    fn visit_selector(&self, selector: &str) -> String {
        compile_selector(selector, self)
    }
}

/// Parses, flattens and rewrites every rule selector of `source`.
pub fn transform_stylesheet<V>(source: &str, visitor: &V) -> Result<String, SheetError>
where
    V: RuleVisitor + ?Sized,
{
    let nodes = flatten(parse(source)?);
    let nodes = rewrite_selectors(nodes, visitor);
    Ok(to_css(&nodes))
}

/// Passes every rule selector, including those inside at-rules, through
/// `visitor`.
pub fn rewrite_selectors<V>(nodes: Vec<Node>, visitor: &V) -> Vec<Node>
where
    V: RuleVisitor + ?Sized,
{
    nodes
        .into_iter()
        .map(|node| match node {
            Node::Rule(mut rule) => {
                log::trace!("visiting rule `{}`", rule.selector);
                let selector = visitor.visit_selector(&rule.selector);
                if selector.trim().is_empty() {
                    log::warn!("selector `{}` was rewritten to nothing", rule.selector);
                }
                rule.selector = selector;
                rule.children = rewrite_selectors(rule.children, visitor);
                Node::Rule(rule)
            }
            Node::AtRule(mut at_rule) => {
                at_rule.block = at_rule
                    .block
                    .map(|children| rewrite_selectors(children, visitor));
                Node::AtRule(at_rule)
            }
            other => other,
        })
        .collect()
}

/// Serializes nodes back to CSS. Top-level nodes are separated by a blank
/// line and nested content is indented by two spaces.
pub fn to_css(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|node| {
            let mut out = String::new();
            write_node(node, 0, &mut out);
            out
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn write_node(node: &Node, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Rule(rule) => {
            out.push_str(&indent);
            out.push_str(&rule.selector);
            write_block(&rule.children, depth, out);
        }
        Node::AtRule(at_rule) => {
            out.push_str(&indent);
            out.push('@');
            out.push_str(&at_rule.name);
            if !at_rule.prelude.is_empty() {
                out.push(' ');
                out.push_str(&at_rule.prelude);
            }
            match &at_rule.block {
                Some(children) => write_block(children, depth, out),
                None => out.push(';'),
            }
        }
        Node::Declaration(text) => {
            out.push_str(&indent);
            out.push_str(text);
            out.push(';');
        }
        Node::Comment(text) => {
            out.push_str(&indent);
            out.push_str(text);
        }
    }
}

fn write_block(children: &[Node], depth: usize, out: &mut String) {
    if children.is_empty() {
        out.push_str(" {}");
        return;
    }
    out.push_str(" {\n");
    for child in children {
        write_node(child, depth + 1, out);
        out.push('\n');
    }
    out.push_str(&"  ".repeat(depth));
    out.push('}');
}
