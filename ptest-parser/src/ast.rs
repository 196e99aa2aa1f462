//! Abstract syntax tree for test expressions.

use std::fmt::Display;

/// A parsed test expression.
///
/// The tree is rebuilt from scratch on every invocation; its depth is bounded
/// by the number of arguments that produced it.
#[derive(Clone, Debug)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum TestExpr {
    /// Always evaluates to false; produced only for an empty argument vector.
    False,
    /// A bare word, evaluated as an implicit nonempty-string test.
    Literal(String),
    /// Logical AND of two nested expressions.
    And(Box<TestExpr>, Box<TestExpr>),
    /// Logical OR of two nested expressions.
    Or(Box<TestExpr>, Box<TestExpr>),
    /// Logical NOT of a nested expression.
    Not(Box<TestExpr>),
    /// A unary test applied to a single word.
    UnaryTest(UnaryPredicate, String),
    /// A binary test applied to two words.
    BinaryTest(BinaryPredicate, String, String),
}

impl Display for TestExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::False => Ok(()),
            Self::Literal(s) => write!(f, "{s}"),
            Self::And(left, right) => write!(f, "{left} -a {right}"),
            Self::Or(left, right) => write!(f, "{left} -o {right}"),
            Self::Not(expr) => write!(f, "! {expr}"),
            Self::UnaryTest(op, word) => write!(f, "{op} {word}"),
            Self::BinaryTest(op, left, right) => write!(f, "{left} {op} {right}"),
        }
    }
}

/// A unary test operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryPredicate {
    /// The operand is a path to an existing file.
    FileExists,
    /// The operand is a path to an existing block device file.
    IsBlockDevice,
    /// The operand is a path to an existing character device file.
    IsCharDevice,
    /// The operand is a path to an existing directory.
    IsDirectory,
    /// The operand is a path to an existing regular file.
    IsRegularFile,
    /// The operand is a path to an existing file with the setgid bit set.
    IsSetgid,
    /// The operand is a path to an existing file with the setuid bit set.
    IsSetuid,
    /// The operand is a path to an existing symbolic link.
    IsSymlink,
    /// The operand is a path to an existing file with the sticky bit set.
    HasStickyBit,
    /// The operand is a path to an existing FIFO file.
    IsFifo,
    /// The operand is a path to an existing socket file.
    IsSocket,
    /// The operand is a path to a readable file.
    IsReadable,
    /// The operand is a path to a writable file.
    IsWritable,
    /// The operand is a path to an executable file.
    IsExecutable,
    /// The operand is a path to an existing file with nonzero size.
    HasNonzeroSize,
    /// The operand is a path to an existing file modified since it was last read.
    ModifiedSinceRead,
    /// The operand is a path to an existing file owned by the effective group ID.
    OwnedByEffectiveGid,
    /// The operand is a path to an existing file owned by the effective user ID.
    OwnedByEffectiveUid,
    /// The operand is a file descriptor open on a terminal.
    FdIsTerminal,
    /// The operand is a string of zero length.
    StringIsEmpty,
    /// The operand is a string of nonzero length.
    StringIsNonEmpty,
}

impl Display for UnaryPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileExists => write!(f, "-e"),
            Self::IsBlockDevice => write!(f, "-b"),
            Self::IsCharDevice => write!(f, "-c"),
            Self::IsDirectory => write!(f, "-d"),
            Self::IsRegularFile => write!(f, "-f"),
            Self::IsSetgid => write!(f, "-g"),
            Self::IsSetuid => write!(f, "-u"),
            Self::IsSymlink => write!(f, "-h"),
            Self::HasStickyBit => write!(f, "-k"),
            Self::IsFifo => write!(f, "-p"),
            Self::IsSocket => write!(f, "-S"),
            Self::IsReadable => write!(f, "-r"),
            Self::IsWritable => write!(f, "-w"),
            Self::IsExecutable => write!(f, "-x"),
            Self::HasNonzeroSize => write!(f, "-s"),
            Self::ModifiedSinceRead => write!(f, "-N"),
            Self::OwnedByEffectiveGid => write!(f, "-G"),
            Self::OwnedByEffectiveUid => write!(f, "-O"),
            Self::FdIsTerminal => write!(f, "-t"),
            Self::StringIsEmpty => write!(f, "-z"),
            Self::StringIsNonEmpty => write!(f, "-n"),
        }
    }
}

/// A binary test operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryPredicate {
    /// The operands are equal strings.
    StringEquals,
    /// The operands are unequal strings.
    StringNotEquals,
    /// The left operand sorts lexicographically before the right.
    StringSortsBefore,
    /// The left operand sorts lexicographically after the right.
    StringSortsAfter,
    /// The operands are integers and compare equal.
    IntEqual,
    /// The operands are integers and compare unequal.
    IntNotEqual,
    /// The operands are integers and the left is less than the right.
    IntLessThan,
    /// The operands are integers and the left is less than or equal to the right.
    IntLessOrEqual,
    /// The operands are integers and the left is greater than the right.
    IntGreaterThan,
    /// The operands are integers and the left is greater than or equal to the right.
    IntGreaterOrEqual,
    /// The operands are paths referring to the same device and inode.
    SameFile,
    /// The left operand names a file newer than the right (or the right is missing).
    NewerThan,
    /// The left operand names a file older than the right (or the left is missing).
    OlderThan,
}

impl Display for BinaryPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StringEquals => write!(f, "="),
            Self::StringNotEquals => write!(f, "!="),
            Self::StringSortsBefore => write!(f, "<"),
            Self::StringSortsAfter => write!(f, ">"),
            Self::IntEqual => write!(f, "-eq"),
            Self::IntNotEqual => write!(f, "-ne"),
            Self::IntLessThan => write!(f, "-lt"),
            Self::IntLessOrEqual => write!(f, "-le"),
            Self::IntGreaterThan => write!(f, "-gt"),
            Self::IntGreaterOrEqual => write!(f, "-ge"),
            Self::SameFile => write!(f, "-ef"),
            Self::NewerThan => write!(f, "-nt"),
            Self::OlderThan => write!(f, "-ot"),
        }
    }
}
