use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Backtest(#[from] backtester::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
