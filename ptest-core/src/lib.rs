//! Evaluator for POSIX `test` / `[` expression trees.
//!
//! Consumes trees produced by the `ptest-parser` crate and computes their
//! boolean value. File predicates query the real file system synchronously;
//! no state survives an evaluation.

pub mod error;
pub mod eval;
mod pathext;

pub use error::Error;
pub use eval::eval_test_expr;
