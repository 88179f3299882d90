//! # system-css
//!
//! SystemCSS compiles a small selector DSL (`component(card) has(title)`)
//! into plain CSS and generates matching preprocessor mixins.
//!
//! - [`syscss`]: settings, the selector compiler and the stylesheet walker
//! - [`syscss_mixins`]: Sass, SCSS, Less and Stylus mixin files
//!
//! [`SystemCss`] ties both together around one configuration value.

pub mod error;

use std::path::PathBuf;

pub use error::{Error, Result};
pub use syscss::{Role, RuleVisitor, Settings, SettingsOverrides};
pub use {syscss, syscss_mixins};
pub use syscss_mixins::{Engine, MixinJob, MixinSink, Preprocessor};

/// Compiles the SystemCSS selector DSL with one fixed configuration.
///
/// ```rust
/// use system_css::SystemCss;
///
/// let system = SystemCss::from_json(r#"{ "mixins": { "block": "new" } }"#).unwrap();
/// assert_eq!(system.transform_selector("new(card) has(title)"), ".card--title");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SystemCss {
    settings: Settings,
}

impl SystemCss {
    /// Wraps `settings` after checking that every keyword is valid and
    /// that no two roles share one.
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Builds a compiler from the defaults merged with `overrides`.
    pub fn with_overrides(overrides: SettingsOverrides) -> Result<Self> {
        let settings = Settings::with_overrides(overrides)?;
        Ok(Self { settings })
    }

    /// Like [`SystemCss::with_overrides`], reading the overrides from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let overrides: SettingsOverrides = serde_json::from_str(json)?;
        Self::with_overrides(overrides)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Rewrites a single rule selector. Never fails; selectors without DSL
    /// calls come back unchanged.
    pub fn transform_selector(&self, selector: &str) -> String {
        syscss::compile_selector(selector, &self.settings)
    }

    /// Flattens nested rules and rewrites every rule selector of `source`.
    pub fn transform_stylesheet(&self, source: &str) -> Result<String> {
        Ok(syscss::transform_stylesheet(source, &self.settings)?)
    }

    /// Validates `preprocessor` and renders the mixin file.
    ///
    /// Configuration problems are reported here, before any I/O; awaiting
    /// [`MixinJob::write`] performs the single write attempt.
    pub fn mixins(&self, preprocessor: &Preprocessor) -> Result<MixinJob> {
        Ok(MixinJob::prepare(&self.settings, preprocessor)?)
    }

    /// Renders and writes the mixin file, returning its path.
    pub async fn write_mixins(&self, preprocessor: &Preprocessor) -> Result<PathBuf> {
        let job = self.mixins(preprocessor)?;
        log::debug!("writing {} mixins to {}", job.engine(), job.dest().display());
        Ok(job.write().await?)
    }
}

impl RuleVisitor for SystemCss {
    fn visit_selector(&self, selector: &str) -> String {
        self.transform_selector(selector)
    }
}
