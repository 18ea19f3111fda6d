//! Line-oriented interactive front end.
//!
//! Reads one expression per line, prints its result or error, and handles the
//! `help`, `ops` and `quit` meta-commands. Errors from the evaluator are
//! rendered here; they never stop the loop.

use crate::display::{format_result, scientific};
use crate::evaluator::Evaluator;
use crate::registry::{Category, Registry};
use log::{debug, info};
use std::io::{self, BufRead, Write};

const RULE_WIDE: usize = 70;
const RULE_NARROW: usize = 50;

pub struct Shell<'r, R, W> {
    evaluator: Evaluator<'r>,
    input: R,
    output: W,
}

impl<'r, R: BufRead, W: Write> Shell<'r, R, W> {
    pub fn new(registry: &'r Registry, input: R, output: W) -> Self {
        Self {
            evaluator: Evaluator::new(registry),
            input,
            output,
        }
    }

    /// Runs until a quit command or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        self.welcome()?;

        let mut line = String::new();
        loop {
            write!(self.output, "\n calc> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output, "\n Goodbye! Thanks for using the calculator!")?;
                break;
            }

            let command = line.trim();
            if command.is_empty() {
                continue;
            }
            if !self.handle(command)? {
                break;
            }
        }

        info!("Shell finished");
        Ok(())
    }

    /// Handles one non-empty line. Returns `false` when the shell should stop.
    pub fn handle(&mut self, command: &str) -> io::Result<bool> {
        let lowered = command.to_ascii_lowercase();
        let mut words = lowered.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some("quit" | "exit" | "q"), None, None) => {
                writeln!(self.output, "Goodbye! Thanks for using the calculator!")?;
                return Ok(false);
            }
            (Some("help"), None, None) => self.help()?,
            (Some("ops"), None, None) => self.operations(None)?,
            (Some("ops"), Some(name), None) => match name.parse::<Category>() {
                Ok(category) => self.operations(Some(category))?,
                Err(message) => writeln!(self.output, " Error: {}", message)?,
            },
            (Some("ops"), Some(_), Some(_)) => {
                writeln!(self.output, " Error: Usage: ops [category]")?
            }
            _ => self.calculate(command)?,
        }
        Ok(true)
    }

    fn calculate(&mut self, expression: &str) -> io::Result<()> {
        match self.evaluator.evaluate(expression) {
            Ok(value) => {
                writeln!(self.output, " Result: {}", format_result(value))?;
                if let Some(formatted) = scientific(value) {
                    writeln!(self.output, " Scientific: {}", formatted)?;
                }
            }
            Err(err) => {
                debug!("{} for '{}': {}", err.kind(), expression, err);
                writeln!(self.output, " Error: {}", err)?;
            }
        }
        Ok(())
    }

    fn welcome(&mut self) -> io::Result<()> {
        let out = &mut self.output;
        writeln!(out, "{}", "=".repeat(RULE_WIDE))?;
        writeln!(out, "COMMAND LINE CALCULATOR")?;
        writeln!(out, "{}", "=".repeat(RULE_WIDE))?;
        writeln!(out, "Welcome to the Calculator!")?;
        writeln!(out, "\n FEATURES:")?;
        writeln!(out, "• Basic arithmetic: +, -, *, /, %, **")?;
        writeln!(out, "• Scientific: sqrt, abs, factorial(!), exp, ceil, floor, asin, acos")?;
        writeln!(out, "• Logarithmic: ln (natural log), log (base 10)")?;
        writeln!(out, "• Conversion: rad (degrees to radians), deg (radians to degrees)")?;
        writeln!(out, "\n COMMANDS:")?;
        writeln!(out, "• 'help' - Show detailed help")?;
        writeln!(out, "• 'ops [category]' - List operations by category")?;
        writeln!(out, "• 'quit' or 'exit' - Exit calculator")?;
        writeln!(out, "{}", "=".repeat(RULE_WIDE))
    }

    fn help(&mut self) -> io::Result<()> {
        let out = &mut self.output;
        writeln!(out, "\n CALCULATOR HELP")?;
        writeln!(out, "{}", "-".repeat(RULE_NARROW))?;
        writeln!(out, " Expression Examples:")?;
        writeln!(out, "• Basic arithmetic: 5+3, 10-4, 6*7, 9/2, 10%4")?;
        writeln!(out, "• Powers: 2**8")?;
        writeln!(out, "• Functions: sqrt(25), abs(-10), 5!, factorial(5)")?;
        writeln!(out, "• Logarithms: ln(10), log(100)")?;
        writeln!(out, "• Scientific: exp(1), ceil(4.2), floor(4.8), asin(1)")?;
        writeln!(out, "• Conversion: rad(180), deg(3.14159)")?;
        writeln!(out, "\n Notes:")?;
        writeln!(out, "• One operation per line, no spaces inside: 2+3, not 2 + 3")?;
        writeln!(out, "• Functions take a single number: sqrt(16)")?;
        writeln!(out, "{}", "-".repeat(RULE_NARROW))
    }

    fn operations(&mut self, category: Option<Category>) -> io::Result<()> {
        let listing = self.evaluator.registry().list_by_category(category);
        let out = &mut self.output;
        writeln!(out, "\n AVAILABLE OPERATIONS")?;
        writeln!(out, "{}", "-".repeat(RULE_NARROW))?;
        for (category, entries) in listing {
            writeln!(out, "\n {}:", category.as_str().to_uppercase())?;
            for entry in entries {
                writeln!(out, "   {}", entry)?;
            }
        }
        writeln!(out, "{}", "-".repeat(RULE_NARROW))
    }
}

/// Evaluates `expressions` in parallel and prints one line per expression,
/// values to `output` and errors to `errors`. In quiet mode only the value or
/// error message is printed. Returns `false` if any expression failed.
pub fn run_batch<S, W, E>(
    registry: &Registry,
    expressions: &[S],
    quiet: bool,
    mut output: W,
    mut errors: E,
) -> io::Result<bool>
where
    S: AsRef<str> + Sync,
    W: Write,
    E: Write,
{
    let results = Evaluator::new(registry).evaluate_batch(expressions);
    let mut succeeded = true;

    for (expression, result) in expressions.iter().zip(results) {
        let expression = expression.as_ref();
        match result {
            Ok(value) if quiet => writeln!(output, "{}", format_result(value))?,
            Ok(value) => match scientific(value) {
                Some(formatted) => writeln!(
                    output,
                    "{} = {} ({})",
                    expression,
                    format_result(value),
                    formatted
                )?,
                None => writeln!(output, "{} = {}", expression, format_result(value))?,
            },
            Err(err) => {
                succeeded = false;
                debug!("{} for '{}': {}", err.kind(), expression, err);
                if quiet {
                    writeln!(errors, "{}", err)?;
                } else {
                    writeln!(errors, "{}: {}", expression, err)?;
                }
            }
        }
    }

    Ok(succeeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::build_registry;

    fn session(input: &str) -> String {
        let registry = build_registry();
        let mut output = Vec::new();
        Shell::new(&registry, input.as_bytes(), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_results_and_errors() {
        let out = session("2+3\n5/0\nbanana(2)\n");
        assert!(out.contains(" Result: 5.0"));
        assert!(out.contains(" Error: Division by zero"));
        assert!(out.contains(" Error: Unknown unary op banana"));
    }

    #[test]
    fn test_scientific_line() {
        let out = session("2000*1000\n");
        assert!(out.contains(" Result: 2000000.0"));
        assert!(out.contains(" Scientific: 2.00e+06"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let out = session("QUIT\n2+3\n");
        assert!(out.contains("Goodbye!"));
        assert!(!out.contains("Result"));
    }

    #[test]
    fn test_ops_listing() {
        let out = session("ops\nops logarithmic\nops trig\n");
        assert!(out.contains(" BASIC:"));
        assert!(out.contains("   **: power"));
        assert!(out.contains("   ^: power"));
        assert!(out.contains(" LOGARITHMIC:"));
        assert!(out.contains("   ln: natural_log"));
        assert!(out.contains(" Error: Unknown operation category: trig"));
    }

    #[test]
    fn test_ops_with_extra_words_is_an_error() {
        let out = session("ops basic extra\n");
        assert!(out.contains(" Error: Usage: ops [category]"));
        assert!(!out.contains("AVAILABLE OPERATIONS"));
    }

    fn batch(expressions: &[&str], quiet: bool) -> (bool, String, String) {
        let registry = build_registry();
        let mut output = Vec::new();
        let mut errors = Vec::new();
        let succeeded = run_batch(&registry, expressions, quiet, &mut output, &mut errors).unwrap();
        (
            succeeded,
            String::from_utf8(output).unwrap(),
            String::from_utf8(errors).unwrap(),
        )
    }

    #[test]
    fn test_batch_output() {
        let (succeeded, output, errors) = batch(&["2+3", "2000*1000", "5/0"], false);
        assert!(!succeeded);
        assert_eq!(output, "2+3 = 5.0\n2000*1000 = 2000000.0 (2.00e+06)\n");
        assert_eq!(errors, "5/0: Division by zero\n");
    }

    #[test]
    fn test_batch_quiet_output() {
        let (succeeded, output, errors) = batch(&["2+3", "2000*1000", "5/0"], true);
        assert!(!succeeded);
        assert_eq!(output, "5.0\n2000000.0\n");
        assert_eq!(errors, "Division by zero\n");

        let (succeeded, _, errors) = batch(&["sqrt(16)"], true);
        assert!(succeeded);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_blank_lines_ignored() {
        let out = session("\n   \nhelp\n");
        assert!(out.contains("CALCULATOR HELP"));
        assert!(!out.contains("Error"));
    }
}
