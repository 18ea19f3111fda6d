use clap::Parser;
use log::debug;
use scicalc_rs::shell::{run_batch, Shell};
use scicalc_rs::{default_registry, list_operations, Category};
use std::io;
use std::process::ExitCode;

/// Command line calculator for single-operation expressions such as `2**8`,
/// `sqrt(16)` or `5!`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the available operations and exit.
    #[arg(short, long)]
    ops: bool,

    /// Restrict `--ops` to one category (basic, scientific, logarithmic, conversion).
    #[arg(short, long, requires = "ops")]
    category: Option<Category>,

    /// Print only each value or error message, without the expression.
    #[arg(short, long)]
    quiet: bool,

    /// Expressions to evaluate. Starts the interactive shell when none are given.
    #[arg(allow_hyphen_values = true)]
    expressions: Vec<String>,
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let args = Args::parse();
    debug!("{:?}", args);
    let registry = default_registry();

    if args.ops {
        for (category, entries) in list_operations(registry, args.category) {
            println!("{}:", category.as_str().to_uppercase());
            for entry in entries {
                println!("  {}", entry);
            }
        }
        return ExitCode::SUCCESS;
    }

    if args.expressions.is_empty() {
        let stdin = io::stdin();
        let stdout = io::stdout();
        return match Shell::new(registry, stdin.lock(), stdout.lock()).run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("I/O error: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let stdout = io::stdout();
    let stderr = io::stderr();
    match run_batch(
        registry,
        &args.expressions,
        args.quiet,
        stdout.lock(),
        stderr.lock(),
    ) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        }
    }
}
