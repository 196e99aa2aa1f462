//! Implements the command-line interface for the `ptest` command.

use clap::Parser;
use ptest_shell::Invocation;

const ABOUT: &str = "Evaluate a POSIX test expression";

const LONG_ABOUT: &str = "\
Evaluate a POSIX test expression and exit with status 0 (true) or 1 (false); \
usage, parse, and evaluation errors exit with status 2.

When installed (or symlinked) as `[`, the final argument must be a closing `]`.";

/// Parsed command-line arguments for the `ptest` command.
#[derive(Parser)]
#[clap(name = "ptest",
       version,
       about = ABOUT,
       long_about = LONG_ABOUT,
       disable_help_flag = true,
       disable_version_flag = true)]
struct CommandLineArgs {
    /// Display usage information.
    #[clap(long = "help", action = clap::ArgAction::HelpLong)]
    help: Option<bool>,

    /// Display version information.
    #[clap(long = "version", action = clap::ArgAction::Version)]
    version: Option<bool>,

    /// The expression to evaluate.
    #[clap(allow_hyphen_values = true, trailing_var_arg = true)]
    args: Vec<String>,
}

/// Main entry point for the `ptest` command.
fn main() {
    init_tracing();

    let invocation = std::env::args()
        .next()
        .map_or(Invocation::Test, |name| Invocation::from_program_name(&name));

    // Under bracket invocation everything is expression text, including
    // arguments that look like flags; only `test` gets --help/--version.
    let status = match invocation {
        Invocation::Bracket => {
            let args: Vec<String> = std::env::args().skip(1).collect();
            ptest_shell::run(invocation, &args)
        }
        Invocation::Test => {
            let parsed = CommandLineArgs::parse();
            ptest_shell::run(invocation, &parsed.args)
        }
    };

    std::process::exit(status);
}

/// Installs a stderr subscriber for the debug trace targets named in the
/// `PTEST_TRACE` environment variable (comma-separated; `parse` and `eval`
/// are the targets this tool emits).
fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{Layer, filter::Targets};

    let Ok(value) = std::env::var("PTEST_TRACE") else {
        return;
    };

    let mut targets = Targets::new().with_default(tracing::level_filters::LevelFilter::OFF);
    for name in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        targets = targets.with_target(name.to_owned(), tracing::Level::DEBUG);
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(targets),
        )
        .init();
}
