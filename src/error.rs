use thiserror::Error;

/// Everything that can go wrong before the DP starts.
///
/// The recurrence itself is total on validated input, so the only failure
/// kind is malformed input detected at the boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Error::InvalidInput(reason.into())
    }
}

// An unreadable source is reported as unusable input.
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::InvalidInput(format!("failed to read input: {err}"))
    }
}
