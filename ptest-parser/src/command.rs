//! Argument-count-indexed parsing for `test` / `[` argument vectors.
//!
//! POSIX deliberately overloads short argument lists with conflicting
//! grammars: `!`, `-a`, `-o`, and parentheses are all simultaneously valid
//! operators and valid plain strings. Following the historical
//! implementations (bash's `posixtest()`, itself from a POSIX.2 proposal by
//! David Korn), disambiguation dispatches on the number of arguments: 0, 1,
//! 2, 3, and 4 arguments get hand-written grammars, and anything longer (or
//! a 4-argument vector matching none of the fixed patterns) is handed to a
//! general recursive-descent parser. The order of the checks within each
//! arity is load-bearing; reordering them changes behavior for inputs such
//! as `-z -a` or `( -z )`.

use crate::ast::TestExpr;
use crate::error::ParseError;
use crate::tables::{self, OperatorTables};
use crate::words::{Word, WordKind, WordSource};

/// Parses a `test` argument vector (already stripped of any trailing `]`)
/// into an expression tree, using the POSIX operator vocabulary.
pub fn parse(args: &[String]) -> Result<TestExpr, ParseError> {
    parse_with_tables(args, tables::posix())
}

/// Parses a `test` argument vector against the given operator tables.
pub fn parse_with_tables(
    args: &[String],
    tables: &OperatorTables,
) -> Result<TestExpr, ParseError> {
    let fixed = match args.len() {
        0 => Some(TestExpr::False),
        // A single argument is an implicit nonempty-string test, even when
        // its literal is an operator.
        1 => Some(word_test(&args[0])),
        2 => Some(two_args(tables, args)?),
        3 => Some(three_args(tables, args)?),
        // The four-argument grammar is the only one with an explicit
        // "no match" outcome.
        4 => four_args(tables, args).transpose()?,
        _ => None,
    };

    let expr = match fixed {
        Some(expr) => expr,
        None => {
            let mut source = WordSource::new(args, tables);
            ExprParser::new(&mut source).parse()?
        }
    };

    tracing::debug!(target: "parse", "{args:?} => {expr:?}");
    Ok(expr)
}

fn word_test(text: &str) -> TestExpr {
    TestExpr::Literal(text.to_owned())
}

fn not(expr: TestExpr) -> TestExpr {
    TestExpr::Not(Box::new(expr))
}

/// Two arguments: `! WORD`, or a unary operator and its operand.
fn two_args(tables: &OperatorTables, args: &[String]) -> Result<TestExpr, ParseError> {
    let (a0, a1) = (&args[0], &args[1]);
    match WordKind::classify(tables, a0) {
        WordKind::Not => Ok(not(word_test(a1))),
        WordKind::Unary(op) => Ok(TestExpr::UnaryTest(op, a1.clone())),
        _ => Err(ParseError::ExpectedUnaryOperator(a0.clone())),
    }
}

/// Three arguments: a binary test takes priority over the `-a`/`-o`
/// connectives, which take priority over `!` and parenthesized forms.
fn three_args(tables: &OperatorTables, args: &[String]) -> Result<TestExpr, ParseError> {
    let (a0, a1, a2) = (&args[0], &args[1], &args[2]);

    match WordKind::classify(tables, a1) {
        WordKind::Binary(op) => {
            return Ok(TestExpr::BinaryTest(op, a0.clone(), a2.clone()));
        }
        WordKind::And => {
            return Ok(TestExpr::And(
                Box::new(word_test(a0)),
                Box::new(word_test(a2)),
            ));
        }
        WordKind::Or => {
            return Ok(TestExpr::Or(
                Box::new(word_test(a0)),
                Box::new(word_test(a2)),
            ));
        }
        _ => (),
    }

    if a0 == "!" {
        return Ok(not(two_args(tables, &args[1..])?));
    }
    if a0 == "(" && a2 == ")" {
        return Ok(word_test(a1));
    }

    Err(ParseError::ExpectedBinaryOperator(a1.clone()))
}

/// Four arguments: `! <three-arg form>` or `( <two-arg form> )`. Returns
/// `None` when neither pattern applies, routing the vector to the general
/// parser.
fn four_args(tables: &OperatorTables, args: &[String]) -> Option<Result<TestExpr, ParseError>> {
    if args[0] == "!" {
        return Some(three_args(tables, &args[1..]).map(not));
    }
    if args[0] == "(" && args[3] == ")" {
        return Some(two_args(tables, &args[1..3]));
    }
    None
}

/// General recursive-descent parser over the word source, used for argument
/// vectors beyond the fixed small-arity grammars.
///
/// Conventional precedence: `!` binds tighter than `-a`, which binds tighter
/// than `-o`; both connectives associate left.
struct ExprParser<'a, 'b> {
    source: &'b mut WordSource<'a>,
    lookahead: Word,
}

impl<'a, 'b> ExprParser<'a, 'b> {
    fn new(source: &'b mut WordSource<'a>) -> Self {
        let lookahead = source.next_word();
        Self { source, lookahead }
    }

    fn parse(mut self) -> Result<TestExpr, ParseError> {
        let expr = self.or_expr()?;
        if self.lookahead.is_end() {
            Ok(expr)
        } else {
            Err(ParseError::TooManyArguments)
        }
    }

    fn advance(&mut self) -> Word {
        std::mem::replace(&mut self.lookahead, self.source.next_word())
    }

    fn or_expr(&mut self) -> Result<TestExpr, ParseError> {
        let mut expr = self.and_expr()?;
        while matches!(self.lookahead.kind, WordKind::Or) {
            self.advance();
            let right = self.and_expr()?;
            expr = TestExpr::Or(Box::new(expr), Box::new(right));
        }
        Ok(expr)
    }

    fn and_expr(&mut self) -> Result<TestExpr, ParseError> {
        let mut expr = self.not_expr()?;
        while matches!(self.lookahead.kind, WordKind::And) {
            self.advance();
            let right = self.not_expr()?;
            expr = TestExpr::And(Box::new(expr), Box::new(right));
        }
        Ok(expr)
    }

    fn not_expr(&mut self) -> Result<TestExpr, ParseError> {
        if matches!(self.lookahead.kind, WordKind::Not) {
            self.advance();
            Ok(not(self.not_expr()?))
        } else {
            self.primary()
        }
    }

    fn primary(&mut self) -> Result<TestExpr, ParseError> {
        match self.lookahead.kind {
            WordKind::LeftParen => {
                self.advance();
                let expr = self.or_expr()?;
                if !matches!(self.lookahead.kind, WordKind::RightParen) {
                    return Err(ParseError::ExpectedRightParen);
                }
                self.advance();
                Ok(expr)
            }
            WordKind::Unary(op) => {
                let operator = self.advance();
                let operand = self.advance();
                if operand.is_end() {
                    return Err(ParseError::MissingOperand(operator.text));
                }
                // The operand's literal is taken as-is, even when it would
                // classify as an operator.
                Ok(TestExpr::UnaryTest(op, operand.text))
            }
            WordKind::Operand => {
                let left = self.advance();
                if let WordKind::Binary(op) = self.lookahead.kind {
                    let operator = self.advance();
                    let right = self.advance();
                    if right.is_end() {
                        return Err(ParseError::MissingOperand(operator.text));
                    }
                    return Ok(TestExpr::BinaryTest(op, left.text, right.text));
                }
                Ok(TestExpr::Literal(left.text))
            }
            WordKind::EndOfInput => Err(ParseError::UnexpectedEndOfInput),
            WordKind::Binary(_) | WordKind::And | WordKind::Or | WordKind::RightParen => {
                Err(ParseError::ExpectedExpression(self.lookahead.text.clone()))
            }
            // Unreachable: `not_expr` consumes every `!` before `primary`.
            WordKind::Not => Err(ParseError::ExpectedExpression(self.lookahead.text.clone())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::ast::{BinaryPredicate, UnaryPredicate};
    use pretty_assertions::assert_eq;

    fn parse_strs(args: &[&str]) -> Result<TestExpr, ParseError> {
        let args: Vec<String> = args.iter().map(|s| (*s).to_owned()).collect();
        parse(&args)
    }

    fn lit(s: &str) -> Box<TestExpr> {
        Box::new(TestExpr::Literal(s.to_owned()))
    }

    #[test]
    fn test_zero_args() -> anyhow::Result<()> {
        assert_eq!(parse_strs(&[])?, TestExpr::False);
        Ok(())
    }

    #[test]
    fn test_one_arg_never_consults_operator_tables() -> anyhow::Result<()> {
        assert_eq!(parse_strs(&["foo"])?, TestExpr::Literal("foo".into()));
        assert_eq!(parse_strs(&["-z"])?, TestExpr::Literal("-z".into()));
        assert_eq!(parse_strs(&["!"])?, TestExpr::Literal("!".into()));
        assert_eq!(parse_strs(&["("])?, TestExpr::Literal("(".into()));
        Ok(())
    }

    #[test]
    fn test_two_args_unary() -> anyhow::Result<()> {
        assert_eq!(
            parse_strs(&["-n", "foo"])?,
            TestExpr::UnaryTest(UnaryPredicate::StringIsNonEmpty, "foo".into())
        );
        Ok(())
    }

    #[test]
    fn test_two_args_unary_wins_over_connective_operand() -> anyhow::Result<()> {
        // `-a` is a valid connective literal, but in operand position it is
        // a plain string.
        assert_eq!(
            parse_strs(&["-z", "-a"])?,
            TestExpr::UnaryTest(UnaryPredicate::StringIsEmpty, "-a".into())
        );
        Ok(())
    }

    #[test]
    fn test_two_args_bang() -> anyhow::Result<()> {
        assert_eq!(parse_strs(&["!", "foo"])?, TestExpr::Not(lit("foo")));
        Ok(())
    }

    #[test]
    fn test_two_args_rejects_non_operator() {
        assert!(matches!(
            parse_strs(&["foo", "bar"]),
            Err(ParseError::ExpectedUnaryOperator(s)) if s == "foo"
        ));
    }

    #[test]
    fn test_three_args_binary() -> anyhow::Result<()> {
        assert_eq!(
            parse_strs(&["a", "=", "b"])?,
            TestExpr::BinaryTest(BinaryPredicate::StringEquals, "a".into(), "b".into())
        );
        // Operands that look like operators are still plain operands.
        assert_eq!(
            parse_strs(&["-a", "!=", "-o"])?,
            TestExpr::BinaryTest(BinaryPredicate::StringNotEquals, "-a".into(), "-o".into())
        );
        Ok(())
    }

    #[test]
    fn test_three_args_connectives() -> anyhow::Result<()> {
        assert_eq!(
            parse_strs(&["foo", "-a", "bar"])?,
            TestExpr::And(lit("foo"), lit("bar"))
        );
        assert_eq!(
            parse_strs(&["foo", "-o", "bar"])?,
            TestExpr::Or(lit("foo"), lit("bar"))
        );
        Ok(())
    }

    #[test]
    fn test_three_args_bang_recurses_into_two_arg_grammar() -> anyhow::Result<()> {
        assert_eq!(
            parse_strs(&["!", "-z", "x"])?,
            TestExpr::Not(Box::new(TestExpr::UnaryTest(
                UnaryPredicate::StringIsEmpty,
                "x".into()
            )))
        );
        assert!(matches!(
            parse_strs(&["!", "(", "x"]),
            Err(ParseError::ExpectedUnaryOperator(s)) if s == "("
        ));
        Ok(())
    }

    #[test]
    fn test_three_args_parenthesized_operand() -> anyhow::Result<()> {
        assert_eq!(parse_strs(&["(", "foo", ")"])?, TestExpr::Literal("foo".into()));
        // A unary operator literal inside parentheses is a plain word test.
        assert_eq!(parse_strs(&["(", "-z", ")"])?, TestExpr::Literal("-z".into()));
        Ok(())
    }

    #[test]
    fn test_three_args_rejects_missing_binary_operator() {
        assert!(matches!(
            parse_strs(&["a", "b", "c"]),
            Err(ParseError::ExpectedBinaryOperator(s)) if s == "b"
        ));
    }

    #[test]
    fn test_four_args_bang() -> anyhow::Result<()> {
        assert_eq!(
            parse_strs(&["!", "a", "=", "b"])?,
            TestExpr::Not(Box::new(TestExpr::BinaryTest(
                BinaryPredicate::StringEquals,
                "a".into(),
                "b".into()
            )))
        );
        Ok(())
    }

    #[test]
    fn test_four_args_parenthesized() -> anyhow::Result<()> {
        assert_eq!(
            parse_strs(&["(", "-z", "x", ")"])?,
            TestExpr::UnaryTest(UnaryPredicate::StringIsEmpty, "x".into())
        );
        assert_eq!(
            parse_strs(&["(", "!", "x", ")"])?,
            TestExpr::Not(lit("x"))
        );
        Ok(())
    }

    #[test]
    fn test_four_args_fall_through_to_general_parser() -> anyhow::Result<()> {
        assert_eq!(
            parse_strs(&["-n", "a", "-a", "b"])?,
            TestExpr::And(
                Box::new(TestExpr::UnaryTest(
                    UnaryPredicate::StringIsNonEmpty,
                    "a".into()
                )),
                lit("b")
            )
        );
        Ok(())
    }

    #[test]
    fn test_general_parser_precedence() -> anyhow::Result<()> {
        // -a binds tighter than -o.
        assert_eq!(
            parse_strs(&["a", "-o", "b", "-a", "c"])?,
            TestExpr::Or(lit("a"), Box::new(TestExpr::And(lit("b"), lit("c"))))
        );
        Ok(())
    }

    #[test]
    fn test_general_parser_binary_lookahead() -> anyhow::Result<()> {
        assert_eq!(
            parse_strs(&["a", "=", "b", "-o", "c"])?,
            TestExpr::Or(
                Box::new(TestExpr::BinaryTest(
                    BinaryPredicate::StringEquals,
                    "a".into(),
                    "b".into()
                )),
                lit("c")
            )
        );
        Ok(())
    }

    #[test]
    fn test_general_parser_grouping() -> anyhow::Result<()> {
        assert_eq!(
            parse_strs(&["(", "a", "-o", "b", ")", "-a", "c"])?,
            TestExpr::And(Box::new(TestExpr::Or(lit("a"), lit("b"))), lit("c"))
        );
        Ok(())
    }

    #[test]
    fn test_general_parser_double_negation() -> anyhow::Result<()> {
        assert_eq!(
            parse_strs(&["!", "!", "a", "-a", "b"])?,
            TestExpr::And(
                Box::new(TestExpr::Not(Box::new(TestExpr::Not(lit("a"))))),
                lit("b")
            )
        );
        Ok(())
    }

    #[test]
    fn test_general_parser_errors() {
        assert!(matches!(
            parse_strs(&["(", "a", "-o", "b", "c"]),
            Err(ParseError::ExpectedRightParen)
        ));
        assert!(matches!(
            parse_strs(&["a", "-a", "b", "c", "d"]),
            Err(ParseError::TooManyArguments)
        ));
        assert!(matches!(
            parse_strs(&["a", "-a", "-o", "b", "c"]),
            Err(ParseError::ExpectedExpression(s)) if s == "-o"
        ));
        assert!(matches!(
            parse_strs(&["-n", "a", "-a", "-n"]),
            Err(ParseError::MissingOperand(s)) if s == "-n"
        ));
        assert!(matches!(
            parse_strs(&["a", "-a", "b", "-o"]),
            Err(ParseError::UnexpectedEndOfInput)
        ));
    }

    #[test]
    fn test_parsing_is_idempotent() -> anyhow::Result<()> {
        let cases: &[&[&str]] = &[
            &["-z", "-a"],
            &["(", "-z", ")"],
            &["!", "a", "=", "b"],
            &["a", "-o", "b", "-a", "c"],
        ];
        for case in cases {
            assert_eq!(parse_strs(case)?, parse_strs(case)?);
        }
        Ok(())
    }
}
