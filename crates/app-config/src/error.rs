use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to load configuration")]
    LoadError(#[from] config::ConfigError),

    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("sweep range '{range}' must have a non-zero step")]
    InvalidSweepStep { range: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
