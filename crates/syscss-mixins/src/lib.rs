//! # syscss-mixins - preprocessor mixins for the SystemCSS DSL
//!
//! Generates a mixin file that implements every configured DSL keyword as a
//! preprocessor macro, so that the same vocabulary can be used from Sass,
//! SCSS, Less or Stylus sources.
//!
//! ```rust
//! use syscss::Settings;
//! use syscss_mixins::{MixinJob, Preprocessor};
//!
//! let preprocessor = Preprocessor {
//!     engine: Some("scss".to_string()),
//!     output: Some("styles".into()),
//!     ..Preprocessor::default()
//! };
//! let job = MixinJob::prepare(&Settings::default(), &preprocessor).unwrap();
//! assert_eq!(job.dest(), std::path::Path::new("styles/system.scss"));
//! assert!(job.source().contains("@mixin component($name) {"));
//! ```
//!
//! ## Modules
//!
//! - [`engine`]: the supported preprocessors
//! - [`template`]: mixin source generation
//! - [`writer`]: asynchronous, single-attempt file output
//! - [`error`]: configuration and I/O errors

pub mod engine;
pub mod error;
pub mod template;
pub mod writer;

use std::path::PathBuf;

use serde::Deserialize;

pub use engine::Engine;
pub use error::MixinError;
pub use template::render_mixins;
pub use writer::{FsSink, MixinJob, MixinSink};

/// Where and how the mixin file is generated.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Preprocessor {
    /// `sass`, `scss`, `less` or `stylus`. Required.
    pub engine: Option<String>,
    /// Directory the file is written to. Required.
    pub output: Option<PathBuf>,
    /// Prepended to every generated macro name.
    pub namespace: String,
    /// File name without extension.
    pub filename: String,
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self {
            engine: None,
            output: None,
            namespace: String::new(),
            filename: "system".to_string(),
        }
    }
}
