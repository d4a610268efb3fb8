use thiserror::Error;

/// Domain signals raised by the catalog. None of them is fatal; the session
/// turns each one into a status message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The catalog has no quotes to pick from.
    #[error("no quotes yet")]
    EmptyCatalog,

    /// Submitted quote text was empty after trimming.
    #[error("quote text is blank")]
    BlankText,
}

pub type Result<T> = std::result::Result<T, Error>;
