//! Rendering of classified fragments into CSS selector text.
//!
//! The renderer makes one left-to-right pass over the abstractions of a
//! clause, looking back at the previous abstraction only. Rules, first match
//! wins:
//!
//! 1. States are normalized (`hovered` → `hover`) unless protected.
//! 2. A fragment with a pseudo suffix is emitted as-is followed by a space.
//! 3. An element following a modifier or a state is re-anchored to the
//!    nearest preceding block: `component(card) when(active) has(title)`
//!    renders `.card.\+active .card--title`. The block's pseudo is not
//!    repeated on the anchor.
//! 4. A context following a block is emitted before it:
//!    `component(nav) inside(header)` renders `#system .\@header .nav`.
//! 5. Everything else is appended, separated by a space when either side is
//!    literal CSS.

use crate::compiler::abstraction::Abstraction;
use crate::settings::{Role, Settings};

/// Renders the abstractions of one expanded clause.
pub fn render(targets: &[Abstraction], settings: &Settings) -> String {
    let mut output = String::new();
    // Byte offset at which each target's emission starts.
    let mut starts: Vec<usize> = Vec::with_capacity(targets.len());

    for (index, target) in targets.iter().enumerate() {
        let start = output.len();
        let previous = index.checked_sub(1).map(|i| &targets[i]);
        let previous_is = |role: Role| previous.is_some_and(|p| p.is(role));

        let normalized;
        let current = if target.is(Role::State) {
            normalized = Abstraction {
                name: normalize_state(&target.name, settings),
                ..target.clone()
            };
            &normalized
        } else {
            target
        };

        if !current.pseudo.is_empty() {
            output.push_str(&current.rendered());
            output.push(' ');
            starts.push(start);
            continue;
        }

        let spacing = if current.is_other() || previous.is_some_and(Abstraction::is_other) {
            " "
        } else {
            ""
        };

        if current.is(Role::Element) && (previous_is(Role::Modifier) || previous_is(Role::State)) {
            output.push(' ');
            if let Some(block) = nearest_block(targets, index) {
                output.push_str(&block.anchor());
            }
            output.push_str(&current.rendered());
            starts.push(start);
            continue;
        }

        if let Some(block) = previous.filter(|p| current.is(Role::Context) && p.is(Role::Block)) {
            let block_start = starts[index - 1];
            output.truncate(block_start);
            if !output.is_empty() && !output.ends_with(' ') {
                output.push(' ');
            }
            output.push_str(&current.rendered());
            output.push(' ');
            output.push_str(&block.rendered());
            starts.push(block_start);
            continue;
        }

        output.push_str(spacing);
        output.push_str(&current.rendered());
        starts.push(start);
    }

    let rendered = output.trim().to_string();
    log::trace!("rendered clause `{}`", rendered);
    rendered
}

/// The closest block before `index`, or failing that the first block of the
/// clause.
fn nearest_block(targets: &[Abstraction], index: usize) -> Option<&Abstraction> {
    targets[..index]
        .iter()
        .rev()
        .find(|t| t.is(Role::Block))
        .or_else(|| targets.iter().find(|t| t.is(Role::Block)))
}

/// Strips a trailing `ed` from each `:`-separated part of a state name,
/// leaving protected states and any parenthesized arguments alone.
///
/// `hovered` becomes `hover`, `focused:checked` becomes `focus:checked`.
pub fn normalize_state(name: &str, settings: &Settings) -> String {
    name.split(':')
        .map(|part| {
            let (head, tail) = part.split_at(part.find('(').unwrap_or(part.len()));
            if settings.is_protected_state(head) {
                return part.to_string();
            }
            let head = head.strip_suffix("ed").unwrap_or(head);
            format!("{head}{tail}")
        })
        .collect::<Vec<_>>()
        .join(":")
}
