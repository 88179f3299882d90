//! The SystemCSS selector compiler.
//!
//! Compilation runs in three stages:
//!
//! - [`expand`]: split multi-argument calls into the cartesian product of
//!   single-argument calls, one clause per combination
//! - [`abstraction`]: classify every fragment of a clause into a role
//! - [`render`]: turn the classified fragments back into CSS selector text
//!
//! [`matcher`] holds the DSL call grammar shared by all three.
//!
//! ## Example
//!
//! ```rust
//! use syscss::Settings;
//! use syscss::compiler::compile_selector;
//!
//! let settings = Settings::default();
//! assert_eq!(
//!     compile_selector("component(card, tile) has(title)", &settings),
//!     ".card--title,\n.tile--title"
//! );
//! assert_eq!(compile_selector("ul > li", &settings), "ul > li");
//! ```

pub mod abstraction;
pub mod expand;
pub mod matcher;
pub mod render;

pub use abstraction::{Abstraction, classify, classify_clause};
pub use expand::{CLAUSE_SEPARATOR, expand, expand_selector};
pub use matcher::{CallDefinition, match_call};
pub use render::{normalize_state, render};

use crate::settings::Settings;

/// Compiles a rule selector written in the DSL into plain CSS.
///
/// Selectors without any DSL call are returned unchanged. Fragments that do
/// not follow the call grammar are passed through as literal CSS, so this
/// never fails.
///
/// `settings` is expected to have passed [`Settings::validate`]; with
/// duplicate keywords the first role in [`Role::ALL`](crate::Role::ALL)
/// order wins.
pub fn compile_selector(selector: &str, settings: &Settings) -> String {
    match expand(selector, settings) {
        Some(clauses) => compile_clauses(&clauses, settings),
        None => selector.to_string(),
    }
}

/// Renders already expanded clauses and joins them with `,\n`.
pub fn compile_clauses<S: AsRef<str>>(clauses: &[S], settings: &Settings) -> String {
    clauses
        .iter()
        .map(|clause| render(&classify_clause(clause.as_ref(), settings), settings))
        .collect::<Vec<_>>()
        .join(CLAUSE_SEPARATOR)
}
