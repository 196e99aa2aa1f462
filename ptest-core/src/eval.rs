//! Evaluation of test expression trees.
//!
//! Walks a tree produced by `ptest-parser` and computes its boolean value,
//! consulting the file system for the file predicates. Arithmetic
//! comparisons are strict: a non-integer operand is a runtime error rather
//! than a silent false.

use std::path::Path;

use ptest_parser::ast::{BinaryPredicate, TestExpr, UnaryPredicate};

use crate::error::Error;
use crate::pathext::PathExt;

/// Evaluates a test expression tree to a boolean.
pub fn eval_test_expr(expr: &TestExpr) -> Result<bool, Error> {
    match expr {
        TestExpr::False => Ok(false),
        TestExpr::Literal(s) => Ok(!s.is_empty()),
        TestExpr::And(left, right) => Ok(eval_test_expr(left)? && eval_test_expr(right)?),
        TestExpr::Or(left, right) => Ok(eval_test_expr(left)? || eval_test_expr(right)?),
        TestExpr::Not(expr) => Ok(!eval_test_expr(expr)?),
        TestExpr::UnaryTest(op, operand) => apply_unary_predicate(*op, operand),
        TestExpr::BinaryTest(op, left, right) => apply_binary_predicate(*op, left, right),
    }
}

fn apply_unary_predicate(op: UnaryPredicate, operand: &str) -> Result<bool, Error> {
    tracing::debug!(target: "eval", "{op} {operand:?}");

    let path = Path::new(operand);
    match op {
        UnaryPredicate::StringIsEmpty => Ok(operand.is_empty()),
        UnaryPredicate::StringIsNonEmpty => Ok(!operand.is_empty()),
        UnaryPredicate::FileExists => Ok(path.exists()),
        UnaryPredicate::IsBlockDevice => Ok(path.is_block_device()),
        UnaryPredicate::IsCharDevice => Ok(path.is_char_device()),
        UnaryPredicate::IsDirectory => Ok(path.is_dir()),
        UnaryPredicate::IsRegularFile => Ok(path.is_file()),
        UnaryPredicate::IsSymlink => Ok(path.is_symlink()),
        UnaryPredicate::IsFifo => Ok(path.is_fifo()),
        UnaryPredicate::IsSocket => Ok(path.is_socket()),
        UnaryPredicate::IsSetgid => Ok(path.is_setgid()),
        UnaryPredicate::IsSetuid => Ok(path.is_setuid()),
        UnaryPredicate::HasStickyBit => Ok(path.has_sticky_bit()),
        UnaryPredicate::IsReadable => Ok(path.readable()),
        UnaryPredicate::IsWritable => Ok(path.writable()),
        UnaryPredicate::IsExecutable => Ok(path.executable()),
        UnaryPredicate::HasNonzeroSize => Ok(path.metadata().is_ok_and(|md| md.len() > 0)),
        UnaryPredicate::ModifiedSinceRead => Ok(path.modified_since_read()),
        UnaryPredicate::OwnedByEffectiveGid => {
            use std::os::unix::fs::MetadataExt;
            Ok(path
                .metadata()
                .is_ok_and(|md| md.gid() == uzers::get_effective_gid()))
        }
        UnaryPredicate::OwnedByEffectiveUid => {
            use std::os::unix::fs::MetadataExt;
            Ok(path
                .metadata()
                .is_ok_and(|md| md.uid() == uzers::get_effective_uid()))
        }
        UnaryPredicate::FdIsTerminal => {
            let fd: i32 = operand
                .parse()
                .map_err(|_| Error::InvalidFileDescriptor(operand.to_owned()))?;
            // SAFETY: isatty only queries the descriptor's state; it does
            // not take ownership of or otherwise affect the descriptor.
            Ok(unsafe { nix::libc::isatty(fd) } == 1)
        }
    }
}

fn apply_binary_predicate(op: BinaryPredicate, left: &str, right: &str) -> Result<bool, Error> {
    tracing::debug!(target: "eval", "{left:?} {op} {right:?}");

    match op {
        BinaryPredicate::StringEquals => Ok(left == right),
        BinaryPredicate::StringNotEquals => Ok(left != right),
        BinaryPredicate::StringSortsBefore => Ok(left < right),
        BinaryPredicate::StringSortsAfter => Ok(left > right),
        BinaryPredicate::IntEqual => arithmetic(left, right, |l, r| l == r),
        BinaryPredicate::IntNotEqual => arithmetic(left, right, |l, r| l != r),
        BinaryPredicate::IntLessThan => arithmetic(left, right, |l, r| l < r),
        BinaryPredicate::IntLessOrEqual => arithmetic(left, right, |l, r| l <= r),
        BinaryPredicate::IntGreaterThan => arithmetic(left, right, |l, r| l > r),
        BinaryPredicate::IntGreaterOrEqual => arithmetic(left, right, |l, r| l >= r),
        BinaryPredicate::SameFile => {
            let left = Path::new(left).device_and_inode();
            let right = Path::new(right).device_and_inode();
            Ok(left.is_some() && left == right)
        }
        BinaryPredicate::NewerThan => {
            match (
                Path::new(left).modified_nanos(),
                Path::new(right).modified_nanos(),
            ) {
                (Some(l), Some(r)) => Ok(l > r),
                (Some(_), None) => Ok(true),
                (None, _) => Ok(false),
            }
        }
        BinaryPredicate::OlderThan => {
            match (
                Path::new(left).modified_nanos(),
                Path::new(right).modified_nanos(),
            ) {
                (Some(l), Some(r)) => Ok(l < r),
                (None, Some(_)) => Ok(true),
                (_, None) => Ok(false),
            }
        }
    }
}

/// Applies an integer comparison with strict operand parsing. Leading and
/// trailing blanks are tolerated; any other non-integer text is an error.
fn arithmetic(left: &str, right: &str, op: fn(i64, i64) -> bool) -> Result<bool, Error> {
    let left = parse_integer(left)?;
    let right = parse_integer(right)?;
    Ok(op(left, right))
}

fn parse_integer(operand: &str) -> Result<i64, Error> {
    operand
        .trim()
        .parse()
        .map_err(|_| Error::ExpectedInteger(operand.to_owned()))
}
