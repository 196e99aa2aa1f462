//! Static operator lookup tables.
//!
//! Classification of a raw argument is context-free: it depends only on the
//! argument's literal text. The three tables here are disjoint and are
//! consulted in a fixed priority order (unary, then binary, then other); a
//! string absent from all three is a plain operand. Position-dependent
//! reinterpretation of operator literals happens entirely in the dispatcher.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::ast::{BinaryPredicate, UnaryPredicate};

/// A logical connective or grouping operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogicalOp {
    /// `!`: inverts the sense of the following expression.
    Not,
    /// `-a`: true if both surrounding expressions are true.
    And,
    /// `-o`: true if either surrounding expression is true.
    Or,
    /// `(`: opens a grouped expression.
    LeftParen,
    /// `)`: closes a grouped expression.
    RightParen,
}

/// The operator vocabulary for a `test` dialect, injected into the word
/// source at construction.
pub struct OperatorTables {
    unary: HashMap<&'static str, UnaryPredicate>,
    binary: HashMap<&'static str, BinaryPredicate>,
    other: HashMap<&'static str, LogicalOp>,
}

impl OperatorTables {
    /// Looks up a literal in the unary operator table.
    pub fn unary(&self, literal: &str) -> Option<UnaryPredicate> {
        self.unary.get(literal).copied()
    }

    /// Looks up a literal in the binary operator table.
    pub fn binary(&self, literal: &str) -> Option<BinaryPredicate> {
        self.binary.get(literal).copied()
    }

    /// Looks up a literal in the logical/grouping operator table.
    pub fn other(&self, literal: &str) -> Option<LogicalOp> {
        self.other.get(literal).copied()
    }
}

static POSIX_TABLES: LazyLock<OperatorTables> = LazyLock::new(|| {
    let unary = HashMap::from([
        ("-b", UnaryPredicate::IsBlockDevice),
        ("-c", UnaryPredicate::IsCharDevice),
        ("-d", UnaryPredicate::IsDirectory),
        ("-e", UnaryPredicate::FileExists),
        ("-f", UnaryPredicate::IsRegularFile),
        ("-g", UnaryPredicate::IsSetgid),
        ("-h", UnaryPredicate::IsSymlink),
        ("-k", UnaryPredicate::HasStickyBit),
        ("-n", UnaryPredicate::StringIsNonEmpty),
        ("-p", UnaryPredicate::IsFifo),
        ("-r", UnaryPredicate::IsReadable),
        ("-s", UnaryPredicate::HasNonzeroSize),
        ("-t", UnaryPredicate::FdIsTerminal),
        ("-u", UnaryPredicate::IsSetuid),
        ("-w", UnaryPredicate::IsWritable),
        ("-x", UnaryPredicate::IsExecutable),
        ("-z", UnaryPredicate::StringIsEmpty),
        ("-G", UnaryPredicate::OwnedByEffectiveGid),
        ("-L", UnaryPredicate::IsSymlink),
        ("-N", UnaryPredicate::ModifiedSinceRead),
        ("-O", UnaryPredicate::OwnedByEffectiveUid),
        ("-S", UnaryPredicate::IsSocket),
    ]);

    let binary = HashMap::from([
        ("=", BinaryPredicate::StringEquals),
        ("==", BinaryPredicate::StringEquals),
        ("!=", BinaryPredicate::StringNotEquals),
        ("<", BinaryPredicate::StringSortsBefore),
        (">", BinaryPredicate::StringSortsAfter),
        ("-eq", BinaryPredicate::IntEqual),
        ("-ne", BinaryPredicate::IntNotEqual),
        ("-lt", BinaryPredicate::IntLessThan),
        ("-le", BinaryPredicate::IntLessOrEqual),
        ("-gt", BinaryPredicate::IntGreaterThan),
        ("-ge", BinaryPredicate::IntGreaterOrEqual),
        ("-ef", BinaryPredicate::SameFile),
        ("-nt", BinaryPredicate::NewerThan),
        ("-ot", BinaryPredicate::OlderThan),
    ]);

    let other = HashMap::from([
        ("!", LogicalOp::Not),
        ("-a", LogicalOp::And),
        ("-o", LogicalOp::Or),
        ("(", LogicalOp::LeftParen),
        (")", LogicalOp::RightParen),
    ]);

    OperatorTables {
        unary,
        binary,
        other,
    }
});

/// Returns the operator tables for the POSIX `test` vocabulary.
pub fn posix() -> &'static OperatorTables {
    &POSIX_TABLES
}
