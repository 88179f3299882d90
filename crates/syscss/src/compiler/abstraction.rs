//! Role classification of expanded selector fragments.

use crate::compiler::matcher::match_call;
use crate::settings::{Role, Settings};

/// The classified form of one space-delimited selector fragment.
///
/// `component(tweet):hover` becomes
/// `Abstraction { role: Some(Block), name: "tweet", pseudo: ":hover", prefix: ".", suffix: "" }`.
/// Fragments that are not DSL calls have no role and carry their text
/// verbatim in `name`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Abstraction {
    /// `None` for literal CSS.
    pub role: Option<Role>,
    pub name: String,
    pub pseudo: String,
    pub prefix: String,
    pub suffix: String,
}

impl Abstraction {
    /// Wraps literal CSS text.
    pub fn other(text: &str) -> Self {
        Self {
            role: None,
            name: text.to_string(),
            pseudo: String::new(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    pub fn is_other(&self) -> bool {
        self.role.is_none()
    }

    pub fn is(&self, role: Role) -> bool {
        self.role == Some(role)
    }

    /// `prefix + name + suffix + pseudo`.
    pub fn rendered(&self) -> String {
        self.anchor() + &self.pseudo
    }

    /// `prefix + name + suffix`, the form an element is anchored to.
    pub fn anchor(&self) -> String {
        format!("{}{}{}", self.prefix, self.name, self.suffix)
    }
}

/// Classifies a single fragment of an expanded clause.
///
/// Roles are tested in [`Role::ALL`] order and the first match wins. The
/// name is the first call argument; context and util prefixes are anchored
/// to the configured root.
pub fn classify(fragment: &str, settings: &Settings) -> Abstraction {
    match match_call(fragment, settings) {
        Some(call) => Abstraction {
            role: Some(call.role),
            name: call.args[0].to_string(),
            pseudo: call.pseudo.to_string(),
            prefix: settings.resolved_prefix(call.role),
            suffix: settings.suffix(call.role).to_string(),
        },
        None => Abstraction::other(fragment),
    }
}

/// Classifies every fragment of one clause.
pub fn classify_clause(clause: &str, settings: &Settings) -> Vec<Abstraction> {
    clause
        .split_whitespace()
        .map(|fragment| classify(fragment, settings))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_with_pseudo() {
        let abstraction = classify("component(tweet):hover", &Settings::default());
        assert_eq!(
            abstraction,
            Abstraction {
                role: Some(Role::Block),
                name: "tweet".to_string(),
                pseudo: ":hover".to_string(),
                prefix: ".".to_string(),
                suffix: String::new(),
            }
        );
        assert_eq!(abstraction.rendered(), ".tweet:hover");
    }

    #[test]
    fn root_anchored_roles_get_root_prefix() {
        let settings = Settings::default();
        assert_eq!(classify("inside(header)", &settings).prefix, r"#system .\@");
        assert_eq!(classify("util(hidden)", &settings).prefix, r"#system .\~");
        assert_eq!(classify("container(side)", &settings).prefix, r".\@");
    }

    #[test]
    fn suffix_comes_from_settings() {
        let mut settings = Settings::default();
        settings.suffixes.element = "_x".to_string();
        let abstraction = classify("has(title)", &settings);
        assert_eq!(abstraction.rendered(), "--title_x");
    }

    #[test]
    fn non_calls_become_other() {
        let abstraction = classify("a:hover", &Settings::default());
        assert!(abstraction.is_other());
        assert_eq!(abstraction.name, "a:hover");
        assert_eq!(abstraction.pseudo, "");
        assert_eq!(abstraction.rendered(), "a:hover");
    }

    #[test]
    fn clause_is_classified_in_order() {
        let roles: Vec<_> = classify_clause("component(a) > has(b) is(on)", &Settings::default())
            .into_iter()
            .map(|a| a.role)
            .collect();
        assert_eq!(
            roles,
            vec![Some(Role::Block), None, Some(Role::Element), Some(Role::State)]
        );
    }
}
