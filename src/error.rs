use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required argument was absent. Carries the parameter name.
    #[error("Argument must be present: {0}")]
    InvalidArgument(&'static str),
    #[error("Sequence contains no elements")]
    OutOfRange,
    #[error("Operation was cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, Error>;
