use thiserror::Error;

/**
    Errors from the FFmpeg runtime accessors.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The native FFmpeg libraries could not be located or initialized.
    #[error("native library unavailable: {0}")]
    Unavailable(String),
}

impl Error {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }
}

/**
    Error returned by `FromStr` implementations on the types in this crate.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseError {
    pub(crate) fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
