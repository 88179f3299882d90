//! Compiler configuration.
//!
//! A [`Settings`] value maps every DSL [`Role`] to the keyword that invokes
//! it, the CSS prefix that replaces the keyword and an optional suffix. It is
//! built once from defaults plus caller overrides and then passed by
//! reference into every compiler operation.
//!
//! ```rust
//! use syscss::{Role, Settings, SettingsOverrides};
//!
//! let mut overrides = SettingsOverrides::default();
//! overrides.mixins.block = Some("new".to_string());
//! overrides.root = Some("#app".to_string());
//!
//! let settings = Settings::with_overrides(overrides).unwrap();
//! assert_eq!(settings.keyword(Role::Block), "new");
//! assert_eq!(settings.keyword(Role::Element), "has");
//! assert_eq!(settings.resolved_prefix(Role::Context), r"#app .\@");
//! ```

use std::fmt;

use serde::Deserialize;

use crate::error::SettingsError;

/// The semantic role a DSL call plays in a selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// A top-level component (`component(card)` → `.card`).
    Block,
    /// A part of a block (`has(title)` → `--title`).
    Element,
    /// A variant flag on a block (`when(active)` → `.\+active`).
    Modifier,
    /// A transient condition (`is(hovered)` → `:hover`).
    State,
    /// An ancestor scope anchored at the root (`inside(header)`).
    Context,
    /// A root-scoped utility (`util(hidden)`).
    Util,
    /// A containment selector (`container(sidebar)`).
    Parent,
}

impl Role {
    /// All roles in the order calls are tested against them.
    pub const ALL: [Role; 7] = [
        Role::Block,
        Role::Element,
        Role::Modifier,
        Role::State,
        Role::Context,
        Role::Util,
        Role::Parent,
    ];

    /// The configuration key naming this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Block => "block",
            Role::Element => "element",
            Role::Modifier => "modifier",
            Role::State => "state",
            Role::Context => "context",
            Role::Util => "util",
            Role::Parent => "parent",
        }
    }

    /// Context and util selectors always hang off the configured root.
    pub fn is_root_anchored(self) -> bool {
        matches!(self, Role::Context | Role::Util)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per [`Role`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoleMap<T> {
    pub block: T,
    pub element: T,
    pub modifier: T,
    pub state: T,
    pub context: T,
    pub util: T,
    pub parent: T,
}

impl<T> RoleMap<T> {
    pub fn get(&self, role: Role) -> &T {
        match role {
            Role::Block => &self.block,
            Role::Element => &self.element,
            Role::Modifier => &self.modifier,
            Role::State => &self.state,
            Role::Context => &self.context,
            Role::Util => &self.util,
            Role::Parent => &self.parent,
        }
    }

    pub fn get_mut(&mut self, role: Role) -> &mut T {
        match role {
            Role::Block => &mut self.block,
            Role::Element => &mut self.element,
            Role::Modifier => &mut self.modifier,
            Role::State => &mut self.state,
            Role::Context => &mut self.context,
            Role::Util => &mut self.util,
            Role::Parent => &mut self.parent,
        }
    }
}

impl RoleMap<String> {
    fn from_fn(f: impl Fn(Role) -> &'static str) -> Self {
        Self {
            block: f(Role::Block).to_string(),
            element: f(Role::Element).to_string(),
            modifier: f(Role::Modifier).to_string(),
            state: f(Role::State).to_string(),
            context: f(Role::Context).to_string(),
            util: f(Role::Util).to_string(),
            parent: f(Role::Parent).to_string(),
        }
    }

    /// Copies every `Some` entry of `overrides` over the current value.
    fn merge(&mut self, overrides: RoleMap<Option<String>>) {
        for role in Role::ALL {
            if let Some(value) = overrides.get(role) {
                *self.get_mut(role) = value.clone();
            }
        }
    }
}

/// Complete, validated configuration for one compilation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Scope selector that context and util selectors are anchored to.
    pub root: String,
    /// DSL keyword for each role.
    pub mixins: RoleMap<String>,
    /// CSS text substituted for each role's keyword.
    pub prefixes: RoleMap<String>,
    /// CSS text appended after each role's name.
    pub suffixes: RoleMap<String>,
    /// State names that are never normalized.
    pub protected_states: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: "#system".to_string(),
            mixins: RoleMap::from_fn(|role| match role {
                Role::Block => "component",
                Role::Element => "has",
                Role::Modifier => "when",
                Role::State => "is",
                Role::Context => "inside",
                Role::Util => "util",
                Role::Parent => "container",
            }),
            prefixes: RoleMap::from_fn(|role| match role {
                Role::Block => ".",
                Role::Element => "--",
                Role::Modifier => r".\+",
                Role::State => ":",
                Role::Context => r".\@",
                Role::Util => r".\~",
                Role::Parent => r".\@",
            }),
            suffixes: RoleMap::default(),
            protected_states: ["enabled", "disabled", "checked", "required", "visited"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Settings {
    /// Builds settings from the defaults merged with `overrides`, then
    /// validates the result.
    pub fn with_overrides(overrides: SettingsOverrides) -> Result<Self, SettingsError> {
        let mut settings = Self::default();
        settings.merge(overrides);
        settings.validate()?;
        Ok(settings)
    }

    /// Deep-merges `overrides` into these settings.
    ///
    /// Role maps merge key by key; a `protected_states` override replaces the
    /// whole list.
    pub fn merge(&mut self, overrides: SettingsOverrides) {
        if let Some(root) = overrides.root {
            self.root = root;
        }
        self.mixins.merge(overrides.mixins);
        self.prefixes.merge(overrides.prefixes);
        self.suffixes.merge(overrides.suffixes);
        if let Some(states) = overrides.protected_states {
            self.protected_states = states;
        }
    }

    /// Checks that every keyword is usable and that no two roles share one.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (index, role) in Role::ALL.iter().copied().enumerate() {
            let keyword = self.keyword(role);
            if keyword.is_empty() {
                return Err(SettingsError::EmptyKeyword(role));
            }
            if !keyword.chars().all(is_keyword_char) {
                return Err(SettingsError::InvalidKeyword {
                    role,
                    keyword: keyword.to_string(),
                });
            }
            if let Some(first) = Role::ALL[..index]
                .iter()
                .copied()
                .find(|other| self.keyword(*other) == keyword)
            {
                return Err(SettingsError::DuplicateKeyword {
                    keyword: keyword.to_string(),
                    first,
                    second: role,
                });
            }
        }
        Ok(())
    }

    pub fn keyword(&self, role: Role) -> &str {
        self.mixins.get(role)
    }

    pub fn suffix(&self, role: Role) -> &str {
        self.suffixes.get(role)
    }

    /// The configured prefix, with the root prepended for root-anchored roles.
    pub fn resolved_prefix(&self, role: Role) -> String {
        let prefix = self.prefixes.get(role);
        if role.is_root_anchored() {
            format!("{} {}", self.root, prefix)
        } else {
            prefix.clone()
        }
    }

    /// Looks up the role invoked by `keyword`, testing roles in [`Role::ALL`] order.
    pub fn role_for_keyword(&self, keyword: &str) -> Option<Role> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| self.keyword(*role) == keyword)
    }

    pub fn is_protected_state(&self, state: &str) -> bool {
        self.protected_states.iter().any(|s| s == state)
    }
}

/// Characters allowed in a DSL keyword.
pub(crate) fn is_keyword_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Caller-supplied changes to the default [`Settings`].
///
/// Every field is optional; unspecified keys keep their defaults. The serde
/// representation uses the camelCase keys `root`, `mixins`, `prefixes`,
/// `suffixes` and `protectedStates`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsOverrides {
    pub root: Option<String>,
    pub mixins: RoleMap<Option<String>>,
    pub prefixes: RoleMap<Option<String>>,
    pub suffixes: RoleMap<Option<String>>,
    pub protected_states: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.keyword(Role::Context), "inside");
        assert_eq!(settings.resolved_prefix(Role::Util), r"#system .\~");
        assert_eq!(settings.resolved_prefix(Role::Modifier), r".\+");
        assert_eq!(settings.suffix(Role::Block), "");
    }

    #[test]
    fn overrides_merge_per_key() {
        let overrides: SettingsOverrides = serde_json::from_str(
            r#"{ "mixins": { "element": "part" }, "suffixes": { "block": "-x" } }"#,
        )
        .unwrap();
        let settings = Settings::with_overrides(overrides).unwrap();

        assert_eq!(settings.keyword(Role::Element), "part");
        assert_eq!(settings.keyword(Role::Block), "component");
        assert_eq!(settings.suffix(Role::Block), "-x");
        assert_eq!(settings.root, "#system");
    }

    #[test]
    fn protected_states_are_replaced_wholesale() {
        let overrides: SettingsOverrides =
            serde_json::from_str(r#"{ "protectedStates": ["pressed"] }"#).unwrap();
        let settings = Settings::with_overrides(overrides).unwrap();

        assert!(settings.is_protected_state("pressed"));
        assert!(!settings.is_protected_state("disabled"));
    }

    #[test]
    fn unknown_role_key_is_rejected() {
        let result: Result<SettingsOverrides, _> =
            serde_json::from_str(r#"{ "mixins": { "widget": "w" } }"#);
        assert!(result.is_err());
    }

    #[test]
    fn duplicate_keywords_fail_validation() {
        let mut overrides = SettingsOverrides::default();
        overrides.mixins.util = Some("has".to_string());

        assert_eq!(
            Settings::with_overrides(overrides),
            Err(SettingsError::DuplicateKeyword {
                keyword: "has".to_string(),
                first: Role::Element,
                second: Role::Util,
            })
        );
    }

    #[test]
    fn empty_and_invalid_keywords_fail_validation() {
        let mut overrides = SettingsOverrides::default();
        overrides.mixins.state = Some(String::new());
        assert_eq!(
            Settings::with_overrides(overrides),
            Err(SettingsError::EmptyKeyword(Role::State))
        );

        let mut overrides = SettingsOverrides::default();
        overrides.mixins.block = Some("comp(onent".to_string());
        assert!(matches!(
            Settings::with_overrides(overrides),
            Err(SettingsError::InvalidKeyword { role: Role::Block, .. })
        ));
    }

    #[test]
    fn keyword_lookup_follows_role_order() {
        let settings = Settings::default();
        assert_eq!(settings.role_for_keyword("has"), Some(Role::Element));
        assert_eq!(settings.role_for_keyword("container"), Some(Role::Parent));
        assert_eq!(settings.role_for_keyword("nope"), None);
    }
}
