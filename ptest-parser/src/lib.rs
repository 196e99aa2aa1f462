//! Parser for the POSIX `test` / `[` command.
//!
//! Turns a flat, already-expanded argument vector into a boolean expression
//! tree, reproducing the argument-count-indexed disambiguation rules the
//! historical `test` implementations use. Evaluation of the resulting tree
//! lives in the `ptest-core` crate.

pub mod ast;
pub mod command;
pub mod error;
pub mod tables;
pub mod words;

pub use command::parse;
pub use error::ParseError;
