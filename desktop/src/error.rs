#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The environment held an unusable setting
    #[error("Invalid configuration: {0}")]
    Config(#[from] ui::ConfigError),

    /// From<reqwest::Error>
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
