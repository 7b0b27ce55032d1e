use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Strategy(#[from] strategies::Error),

    #[error(transparent)]
    Analytics(#[from] analytics::Error),

    #[error(transparent)]
    Series(#[from] core_types::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
