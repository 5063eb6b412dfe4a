//! Error types for this library

/// All possible errors returned by `reserved-ip` functions
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum Error {
    #[error("wrong ip format in `{parameter}`: {value:?}")]
    InvalidArgument {
        parameter: &'static str,
        value: String,
    },
}

/// Result type for `reserved-ip`
pub type Result<T> = std::result::Result<T, Error>;
