//! Error types for SystemCSS configuration and stylesheet processing.
//!
//! The selector compiler itself never fails: fragments that do not follow
//! the DSL grammar are passed through as literal CSS. Errors only arise
//! when a configuration is validated or when a whole stylesheet cannot be
//! split into rules.

use thiserror::Error;

use crate::settings::Role;

/// Errors raised while validating [`Settings`](crate::Settings).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SettingsError {
    /// A role was configured with an empty DSL keyword.
    #[error("the {0} keyword must not be empty")]
    EmptyKeyword(Role),

    /// A keyword contains characters that cannot start a DSL call.
    ///
    /// Keywords are restricted to ASCII letters, digits, `-` and `_`.
    #[error("the {role} keyword `{keyword}` may only contain letters, digits, `-` and `_`")]
    InvalidKeyword { role: Role, keyword: String },

    /// Two roles share the same keyword, so a call could not be classified.
    #[error("the keyword `{keyword}` is used by both {first} and {second}")]
    DuplicateKeyword {
        keyword: String,
        first: Role,
        second: Role,
    },
}

/// Errors that can occur when walking a stylesheet.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SheetError {
    /// The source contained something that is neither a rule, an at-rule,
    /// a declaration nor a comment.
    #[error("CSS syntax error: {0}")]
    InvalidSyntax(String),

    /// A block was opened but never closed.
    #[error("unclosed block starting at `{0}`")]
    UnclosedBlock(String),
}
