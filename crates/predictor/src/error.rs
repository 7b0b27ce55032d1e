use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Preprocessing(#[from] preprocessing::Error),

    #[error("cannot predict on an empty window")]
    EmptyWindow,

    #[error("predictor '{name}' failed: {message}")]
    Model { name: &'static str, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
