use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
    #[error("Invalid FRONTEND_URL origin: {0}")]
    InvalidOrigin(String),
    #[error("Site directory not found: {0}")]
    MissingSiteDir(String),
}
