use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("cannot fit a min-max scale on a constant series (min = max = {value})")]
    DegenerateRange { value: f64 },

    #[error("series has no finite values to fit a scale on")]
    NoFiniteValues,

    #[error(
        "series of length {len} is too short for window length {length}: need at least {required} observations"
    )]
    InsufficientData {
        len: usize,
        length: usize,
        required: usize,
    },

    #[error("window length must be at least 1")]
    ZeroWindowLength,
}

pub type Result<T> = std::result::Result<T, Error>;
