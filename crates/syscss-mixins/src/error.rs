//! Error types for mixin generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when generating or writing a mixin file.
///
/// The configuration variants are returned by
/// [`MixinJob::prepare`](crate::MixinJob::prepare) before any I/O starts;
/// [`MixinError::Io`] only comes from awaiting the write.
#[derive(Debug, Error)]
pub enum MixinError {
    #[error("Please specify the name of the CSS preprocessor you wish to receive mixins for.")]
    MissingEngine,

    #[error(
        "Please specify a directory path. SystemCSS cannot write your mixins to a directory it does not know."
    )]
    MissingOutput,

    /// The engine identifier is not one of `sass`, `scss`, `less` or `stylus`.
    #[error("unknown CSS preprocessor `{0}`")]
    UnknownEngine(String),

    #[error("failed to write mixins to {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
