use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("signal timestamp {timestamp} does not align with the price series")]
    IndexMismatch { timestamp: DateTime<Utc> },
}

pub type Result<T> = std::result::Result<T, Error>;
