//! Writing generated mixins to disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use syscss::Settings;

use crate::Preprocessor;
use crate::engine::Engine;
use crate::error::MixinError;
use crate::template::render_mixins;

/// Destination for a rendered mixin file.
#[async_trait]
pub trait MixinSink: Send + Sync {
    async fn write(&self, dest: &Path, contents: &str) -> std::io::Result<()>;
}

/// Writes straight to the filesystem. Missing directories are not created.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsSink;

#[async_trait]
impl MixinSink for FsSink {
    async fn write(&self, dest: &Path, contents: &str) -> std::io::Result<()> {
        tokio::fs::write(dest, contents).await
    }
}

/// A rendered mixin file that is ready to be written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MixinJob {
    engine: Engine,
    dest: PathBuf,
    source: String,
}

impl MixinJob {
    /// Validates the preprocessor settings and renders the mixins.
    ///
    /// Fails without touching the filesystem when the engine or the output
    /// directory is missing, or when the engine is unknown.
    pub fn prepare(settings: &Settings, preprocessor: &Preprocessor) -> Result<Self, MixinError> {
        let engine_name = preprocessor
            .engine
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(MixinError::MissingEngine)?;
        let output = preprocessor
            .output
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(MixinError::MissingOutput)?;
        let engine: Engine = engine_name.parse()?;

        let dest = output.join(format!("{}.{}", preprocessor.filename, engine.extension()));
        let source = render_mixins(settings, engine, &preprocessor.namespace);

        Ok(Self {
            engine,
            dest,
            source,
        })
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    /// `output/filename.extension`.
    pub fn dest(&self) -> &Path {
        &self.dest
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Writes the file to disk and returns its path.
    pub async fn write(self) -> Result<PathBuf, MixinError> {
        self.write_to(&FsSink).await
    }

    /// Writes the file through `sink` in a single attempt.
    pub async fn write_to<S>(self, sink: &S) -> Result<PathBuf, MixinError>
    where
        S: MixinSink + ?Sized,
    {
        sink.write(&self.dest, &self.source)
            .await
            .map_err(|source| MixinError::Io {
                path: self.dest.clone(),
                source,
            })?;
        log::info!("wrote {} mixins to {}", self.engine, self.dest.display());
        Ok(self.dest)
    }
}
