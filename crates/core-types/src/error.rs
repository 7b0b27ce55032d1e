use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("timestamps must be strictly increasing: {current} at index {index} does not follow {previous}")]
    UnorderedTimestamps {
        index: usize,
        previous: DateTime<Utc>,
        current: DateTime<Utc>,
    },

    #[error("duplicate timestamp {timestamp} at index {index}")]
    DuplicateTimestamp {
        index: usize,
        timestamp: DateTime<Utc>,
    },

    #[error("series lengths differ: {timestamps} timestamps vs {values} values")]
    LengthMismatch { timestamps: usize, values: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
