use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid SMA window pair: short {short} must be at least 1 and strictly less than long {long}")]
    InvalidWindowPair { short: u32, long: u32 },

    #[error("price series of length {len} is too short: need at least {required} observations")]
    InsufficientData { len: usize, required: usize },

    #[error(transparent)]
    Series(#[from] core_types::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
