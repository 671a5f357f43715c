use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `LIMUD_*` variable could not be read into `LimudConfig`.
    #[error("failed to load limud configuration: {0}")]
    Figment(#[from] figment::Error),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
