//! Parse error type.

/// An error raised while parsing a test command's argument vector.
///
/// Carries the offending token where there is one; messages follow the
/// diagnostics historical `test` implementations print.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A two-argument form began with something other than a unary operator.
    #[error("{0}: unary operator expected")]
    ExpectedUnaryOperator(String),

    /// A three-argument form had no binary operator (or connective) in the
    /// middle position.
    #[error("{0}: binary operator expected")]
    ExpectedBinaryOperator(String),

    /// An operator appeared where an expression was required.
    #[error("{0}: expression expected")]
    ExpectedExpression(String),

    /// An operator was missing its operand.
    #[error("{0}: argument expected")]
    MissingOperand(String),

    /// The argument vector ended where an expression was required.
    #[error("argument expected")]
    UnexpectedEndOfInput,

    /// A grouped expression was not closed.
    #[error("`)' expected")]
    ExpectedRightParen,

    /// Arguments remained after a complete expression was parsed.
    #[error("too many arguments")]
    TooManyArguments,
}
