//! Classified-word stream over a raw argument vector.

use crate::ast::{BinaryPredicate, UnaryPredicate};
use crate::tables::{LogicalOp, OperatorTables};

/// Classification of a single raw argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordKind {
    /// A unary test operator.
    Unary(UnaryPredicate),
    /// A binary test operator.
    Binary(BinaryPredicate),
    /// The `!` connective.
    Not,
    /// The `-a` connective.
    And,
    /// The `-o` connective.
    Or,
    /// An opening parenthesis.
    LeftParen,
    /// A closing parenthesis.
    RightParen,
    /// Any string not recognized as an operator.
    Operand,
    /// The distinguished end-of-input marker.
    EndOfInput,
}

impl WordKind {
    /// Classifies a raw argument against the given tables: unary first, then
    /// binary, then logical/grouping, falling back to a plain operand.
    ///
    /// This is the single classification point shared by the word source and
    /// the fixed-arity dispatcher.
    pub fn classify(tables: &OperatorTables, text: &str) -> Self {
        if let Some(op) = tables.unary(text) {
            return Self::Unary(op);
        }
        if let Some(op) = tables.binary(text) {
            return Self::Binary(op);
        }
        match tables.other(text) {
            Some(LogicalOp::Not) => Self::Not,
            Some(LogicalOp::And) => Self::And,
            Some(LogicalOp::Or) => Self::Or,
            Some(LogicalOp::LeftParen) => Self::LeftParen,
            Some(LogicalOp::RightParen) => Self::RightParen,
            None => Self::Operand,
        }
    }
}

/// A classified argument paired with its original text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    /// The word's classification.
    pub kind: WordKind,
    /// The original argument text (empty for the end-of-input word).
    pub text: String,
}

impl Word {
    /// Returns the end-of-input word.
    pub fn end_of_input() -> Self {
        Self {
            kind: WordKind::EndOfInput,
            text: String::new(),
        }
    }

    /// Whether this is the end-of-input word.
    pub fn is_end(&self) -> bool {
        matches!(self.kind, WordKind::EndOfInput)
    }
}

/// Produces classified words from an argument vector, one per pull.
///
/// Once the cursor reaches the end, every subsequent pull yields the
/// end-of-input word; that is not an error.
pub struct WordSource<'a> {
    args: &'a [String],
    tables: &'a OperatorTables,
    next_index: usize,
}

impl<'a> WordSource<'a> {
    /// Constructs a word source over `args`, classifying with `tables`.
    pub fn new(args: &'a [String], tables: &'a OperatorTables) -> Self {
        Self {
            args,
            tables,
            next_index: 0,
        }
    }

    /// Returns the next word, advancing the cursor.
    pub fn next_word(&mut self) -> Word {
        let word = self.peek();
        if self.next_index < self.args.len() {
            self.next_index += 1;
        }
        word
    }

    /// Returns the word the cursor is at, without advancing.
    pub fn peek(&self) -> Word {
        match self.args.get(self.next_index) {
            Some(text) => Word {
                kind: WordKind::classify(self.tables, text),
                text: text.clone(),
            },
            None => Word::end_of_input(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::UnaryPredicate;
    use crate::tables;

    fn words(args: &[&str]) -> Vec<Word> {
        let args: Vec<String> = args.iter().map(|s| (*s).to_owned()).collect();
        let mut source = WordSource::new(&args, tables::posix());
        let mut out = vec![];
        loop {
            let word = source.next_word();
            let done = word.is_end();
            out.push(word);
            if done {
                break;
            }
        }
        out
    }

    #[test]
    fn test_classification_is_context_free() {
        let all = words(&["-z", "X", "-o", "-z", "Y"]);
        assert_eq!(all[0].kind, WordKind::Unary(UnaryPredicate::StringIsEmpty));
        assert_eq!(all[1].kind, WordKind::Operand);
        assert_eq!(all[2].kind, WordKind::Or);
        assert_eq!(all[3].kind, WordKind::Unary(UnaryPredicate::StringIsEmpty));
        assert_eq!(all[4].kind, WordKind::Operand);
        assert_eq!(all[5].kind, WordKind::EndOfInput);
    }

    #[test]
    fn test_end_of_input_is_idempotent() {
        let args = vec!["x".to_owned()];
        let mut source = WordSource::new(&args, tables::posix());
        let _ = source.next_word();
        assert!(source.next_word().is_end());
        assert!(source.next_word().is_end());
        assert!(source.peek().is_end());
    }

    #[test]
    fn test_unknown_strings_are_operands() {
        let all = words(&["foo", "--bar", "-q", ""]);
        for word in &all[0..4] {
            assert_eq!(word.kind, WordKind::Operand);
        }
    }
}
