/// Errors surfaced by the [`SystemCss`](crate::SystemCss) facade.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error(transparent)]
    Settings(#[from] syscss::SettingsError),

    #[error(transparent)]
    Sheet(#[from] syscss::SheetError),

    #[error(transparent)]
    Mixins(#[from] syscss_mixins::MixinError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
