use crate::error::{CalcError, Result};
use crate::registry::Registry;
use log::debug;
use rayon::prelude::*;

mod parser;

pub use parser::LiteralParser;

/// Symbols the infix form may split on. Anything else registered as binary is
/// only reachable through [`Registry::lookup`].
pub const INFIX_SYMBOLS: [&str; 6] = ["+", "-", "*", "/", "%", "**"];

/// Evaluates single-operation expressions against a registry.
///
/// Three forms are recognized, tried in order on the trimmed text:
///
/// 1. `identifier(number)`, a unary operation called by symbol or name
/// 2. `number!`, the factorial
/// 3. `number<op>number` for the symbols in [`INFIX_SYMBOLS`]
///
/// There is no precedence and no nesting: `2+3*4` is a parse error.
pub struct Evaluator<'r> {
    registry: &'r Registry,
    infix_symbols: Vec<&'r str>,
}

impl<'r> Evaluator<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            infix_symbols: registry.binary_symbols(&INFIX_SYMBOLS),
        }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Evaluates `expression`, returning the value or the first failure met.
    pub fn evaluate(&self, expression: &str) -> Result<f64> {
        let expression = expression.trim();
        debug!("Evaluating expression: {}", expression);

        if let Some((key, argument)) = LiteralParser::function_call(expression)? {
            debug!("Function call: {}({})", key, argument);
            let operation = self
                .registry
                .lookup(key)
                .filter(|operation| operation.is_unary())
                .ok_or_else(|| CalcError::unknown_operation(key))?;
            return operation.execute(&[argument]);
        }

        if let Some(argument) = LiteralParser::factorial(expression)? {
            debug!("Factorial: {}!", argument);
            let operation = self
                .registry
                .lookup("!")
                .ok_or_else(|| CalcError::unknown_operation("!"))?;
            return operation.execute(&[argument]);
        }

        for symbol in &self.infix_symbols {
            let parts: Vec<&str> = expression.split(*symbol).collect();
            if parts.len() != 2 || parts.iter().any(|part| part.is_empty()) {
                continue;
            }

            debug!("Infix '{}': {:?}", symbol, parts);
            let left = LiteralParser::operand(parts[0])?;
            let right = LiteralParser::operand(parts[1])?;
            let (Some(left), Some(right)) = (left, right) else {
                return Err(CalcError::parse(expression));
            };
            let operation = self
                .registry
                .lookup(symbol)
                .ok_or_else(|| CalcError::unknown_operation(*symbol))?;
            return operation.execute(&[left, right]);
        }

        Err(CalcError::parse(expression))
    }

    /// Evaluates every expression in parallel. Results keep input order.
    pub fn evaluate_batch<S>(&self, expressions: &[S]) -> Vec<Result<f64>>
    where
        S: AsRef<str> + Sync,
    {
        expressions
            .par_iter()
            .map(|expression| self.evaluate(expression.as_ref()))
            .collect()
    }
}
