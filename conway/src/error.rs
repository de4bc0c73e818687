// error.rs - Errors from the fallible edges of the engine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected {found:?} at line {line}, column {column}")]
    Parse { line: usize, column: usize, found: char },

    #[error("no pattern named {0:?}")]
    UnknownPattern(String),

    #[error("cannot advance to generation {requested}: limit is {limit}")]
    GenerationLimit { requested: u64, limit: u64 },

    #[error("failed to start the worker runtime")]
    Runtime(#[from] std::io::Error),

    #[error("evolution worker failed")]
    Worker(#[from] tokio::task::JoinError),
}
