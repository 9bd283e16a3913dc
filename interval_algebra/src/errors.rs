#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bounds rejected when building an interval.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Attempt to read something that does not exist, like the value of an
    /// infinite bound or the bounds of the empty interval.
    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("cannot parse interval: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
