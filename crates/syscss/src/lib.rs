//! # syscss - SystemCSS selector compiler
//!
//! SystemCSS is a small selector DSL made of method-call-like tokens:
//!
//! ```text
//! component(card) when(active) has(title):hover { ... }
//! ```
//!
//! This crate compiles such selectors into standard CSS:
//!
//! - **Expansion**: `component(a, b)` expands into one clause per argument,
//!   multiple expanding calls form a cartesian product
//! - **Classification**: every call is tagged with its role (block, element,
//!   modifier, state, context, util, parent); everything else is literal CSS
//! - **Rendering**: roles are rendered with their configured prefixes and the
//!   DSL's adjacency rules
//!
//! ## Quick Start
//!
//! ```rust
//! use syscss::{Settings, compile_selector};
//!
//! let settings = Settings::default();
//!
//! assert_eq!(compile_selector("component(card) has(title)", &settings), ".card--title");
//! assert_eq!(
//!     compile_selector("component(nav) inside(header)", &settings),
//!     r"#system .\@header .nav"
//! );
//! assert_eq!(compile_selector(".plain > a", &settings), ".plain > a");
//! ```
//!
//! ## Default Keywords
//!
//! | Role     | Keyword     | Prefix          |
//! |----------|-------------|-----------------|
//! | block    | `component` | `.`             |
//! | element  | `has`       | `--`            |
//! | modifier | `when`      | `.\+`           |
//! | state    | `is`        | `:`             |
//! | context  | `inside`    | `#system .\@`   |
//! | util     | `util`      | `#system .\~`   |
//! | parent   | `container` | `.\@`           |
//!
//! ## Modules
//!
//! - [`compiler`]: token matching, expansion, classification and rendering
//! - [`settings`]: roles, keywords, prefixes and overrides
//! - [`sheet`]: applies the compiler to every rule of a stylesheet
//! - [`error`]: error types for configuration and stylesheet parsing

pub mod compiler;
pub mod error;
pub mod settings;
pub mod sheet;

pub use compiler::compile_selector;
pub use error::{SettingsError, SheetError};
pub use settings::{Role, RoleMap, Settings, SettingsOverrides};
pub use sheet::{RuleVisitor, transform_stylesheet};
