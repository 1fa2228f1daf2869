use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarParkError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid variables: {0}")]
    Variables(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CarParkError>;
