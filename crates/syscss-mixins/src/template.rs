//! Mixin source generation.
//!
//! Every role gets one macro named after its keyword (plus an optional
//! namespace), taking a single `name` parameter. The macro wraps the
//! caller's block in the role's selector:
//!
//! | Role                       | Selector                        |
//! |----------------------------|---------------------------------|
//! | block, parent              | `prefix name suffix`            |
//! | element, modifier, state   | `& prefix name suffix`          |
//! | context, util              | `root prefix name suffix &`     |

use syscss::{Role, Settings};

use crate::engine::Engine;

/// Where a role's selector sits relative to the enclosing rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Placement {
    Standalone,
    Attached,
    Wrapping,
}

fn placement(role: Role) -> Placement {
    match role {
        Role::Block | Role::Parent => Placement::Standalone,
        Role::Element | Role::Modifier | Role::State => Placement::Attached,
        Role::Context | Role::Util => Placement::Wrapping,
    }
}

/// The selector a role's macro emits, with the engine's interpolation of
/// the `name` parameter.
pub fn role_selector(settings: &Settings, role: Role, engine: Engine) -> String {
    let body = format!(
        "{}{}{}",
        settings.prefixes.get(role),
        engine.interpolation(),
        settings.suffix(role)
    );
    match placement(role) {
        Placement::Standalone => body,
        Placement::Attached => format!("&{body}"),
        Placement::Wrapping => format!("{} {body} &", settings.root),
    }
}

/// Renders the complete mixin file for `engine`.
pub fn render_mixins(settings: &Settings, engine: Engine, namespace: &str) -> String {
    let mut source = format!("// SystemCSS mixins ({engine})\n");
    for role in Role::ALL {
        let macro_name = format!("{namespace}{}", settings.keyword(role));
        source.push_str(&engine.mixin(&macro_name, &role_selector(settings, role, engine)));
    }
    compact(&source)
}

/// Drops blank lines and surrounding whitespace.
fn compact(source: &str) -> String {
    source
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_follow_role_placement() {
        let settings = Settings::default();
        assert_eq!(role_selector(&settings, Role::Block, Engine::Scss), ".#{$name}");
        assert_eq!(role_selector(&settings, Role::Element, Engine::Less), "&--@{name}");
        assert_eq!(
            role_selector(&settings, Role::Context, Engine::Stylus),
            r"#system .\@{name} &"
        );
    }

    #[test]
    fn suffixes_follow_the_name() {
        let mut settings = Settings::default();
        settings.suffixes.modifier = "-on".to_string();
        assert_eq!(
            role_selector(&settings, Role::Modifier, Engine::Scss),
            r"&.\+#{$name}-on"
        );
    }

    #[test]
    fn compact_removes_blank_lines() {
        assert_eq!(compact("\n a\n\n  \nb \n\n"), "a\nb");
    }
}
