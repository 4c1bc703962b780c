use thiserror::Error;

/// The primary error type for all operations in the `unpin` application.
///
/// This enum uses `thiserror` to neatly wrap the kinds of errors that can
/// occur, from I/O issues to regex compilation problems.
#[derive(Error, Debug)]
pub enum Error {
    /// An error related to file system I/O.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An error that occurred during regex compilation.
    #[error("Pattern compilation failed: {0}")]
    Regex(#[from] regex::Error),

    /// An error that occurred decoding a file's bytes as UTF-8.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// An error from the `ignore` crate, which is used for directory traversal.
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// A general setup-related error, e.g. the tool's own directory could not
    /// be determined.
    #[error("Setup error: {0}")]
    Setup(String),
}

/// A convenient type alias for `Result<T, unpin::errors::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Setup(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Setup(s.to_string())
    }
}
