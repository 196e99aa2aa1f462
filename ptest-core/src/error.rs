//! Runtime error type.

/// An error raised while evaluating a syntactically valid test expression.
///
/// Distinct from [`ptest_parser::ParseError`] so callers can tell the two
/// kinds apart, though both map to the same exit status.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An arithmetic comparison was given a non-integer operand.
    #[error("integer expression expected: {0}")]
    ExpectedInteger(String),

    /// The `-t` operand did not name a file descriptor.
    #[error("{0}: invalid file descriptor")]
    InvalidFileDescriptor(String),

    /// An underlying file-system query failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
