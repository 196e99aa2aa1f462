//! Entry-point logic for the `test` / `[` command.
//!
//! Orchestrates one invocation: strips the trailing `]` under bracket
//! invocation, parses the argument vector into an expression tree, evaluates
//! it, and maps the outcome to an exit status. Nothing persists across
//! invocations.

/// Exit status for a true expression.
pub const EXIT_TRUE: i32 = 0;
/// Exit status for a false expression (including the empty invocation).
pub const EXIT_FALSE: i32 = 1;
/// Exit status for usage, parse, and runtime errors.
pub const EXIT_ERROR: i32 = 2;

/// How the command was invoked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Invocation {
    /// Invoked as `test`: the argument vector is the expression as-is.
    Test,
    /// Invoked as `[`: the last argument must be a literal `]`.
    Bracket,
}

impl Invocation {
    /// Derives the invocation style from the program name's final path
    /// component.
    pub fn from_program_name(name: &str) -> Self {
        let base = std::path::Path::new(name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(name);
        if base == "[" { Self::Bracket } else { Self::Test }
    }

    const fn diagnostic_prefix(self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Bracket => "[",
        }
    }
}

/// Runs one `test` / `[` invocation over the raw argument vector (program
/// name excluded), reporting failures to standard error, and returns the
/// exit status.
pub fn run(invocation: Invocation, args: &[String]) -> i32 {
    let args = match strip_closing_bracket(invocation, args) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}: {message}", invocation.diagnostic_prefix());
            return EXIT_ERROR;
        }
    };

    // An empty expression is false without consulting the evaluator.
    if args.is_empty() {
        return EXIT_FALSE;
    }

    let expr = match ptest_parser::parse(args) {
        Ok(expr) => expr,
        Err(err) => {
            eprintln!("{}: {err}", invocation.diagnostic_prefix());
            return EXIT_ERROR;
        }
    };

    match ptest_core::eval_test_expr(&expr) {
        Ok(true) => EXIT_TRUE,
        Ok(false) => EXIT_FALSE,
        Err(err) => {
            eprintln!("{}: {err}", invocation.diagnostic_prefix());
            EXIT_ERROR
        }
    }
}

fn strip_closing_bracket(
    invocation: Invocation,
    args: &[String],
) -> Result<&[String], &'static str> {
    match invocation {
        Invocation::Test => Ok(args),
        Invocation::Bracket => match args.last() {
            Some(s) if s == "]" => Ok(&args[..args.len() - 1]),
            None | Some(_) => Err("missing ']'"),
        },
    }
}
