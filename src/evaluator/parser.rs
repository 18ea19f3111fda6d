use crate::error::{CalcError, Result};
use log::trace;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "evaluator/calculator.pest"]
pub struct LiteralParser;

impl LiteralParser {
    /// Matches `identifier(number)`, returning the identifier and argument.
    pub fn function_call(input: &str) -> Result<Option<(&str, f64)>> {
        let Some(call) = Self::match_rule(Rule::function_call, input) else {
            return Ok(None);
        };
        trace!("Function call form: {:?}", call);

        let mut name = None;
        let mut argument = None;
        for pair in call.into_inner() {
            match pair.as_rule() {
                Rule::identifier => name = Some(pair.as_str()),
                Rule::number => argument = Some(Self::number(&pair, input)?),
                _ => {}
            }
        }

        match (name, argument) {
            (Some(name), Some(argument)) => Ok(Some((name, argument))),
            _ => Err(CalcError::parse(input)),
        }
    }

    /// Matches `number!`, returning the number.
    pub fn factorial(input: &str) -> Result<Option<f64>> {
        Self::single_number(Rule::factorial, input)
    }

    /// Matches a bare number literal, as used for infix operands. Unlike the
    /// other forms an exponent is allowed here.
    pub fn operand(input: &str) -> Result<Option<f64>> {
        Self::single_number(Rule::operand, input)
    }

    fn single_number(rule: Rule, input: &str) -> Result<Option<f64>> {
        let Some(matched) = Self::match_rule(rule, input) else {
            return Ok(None);
        };
        trace!("{:?} form: {:?}", rule, matched);

        let number = matched
            .into_inner()
            .find(|pair| matches!(pair.as_rule(), Rule::number | Rule::scientific))
            .ok_or_else(|| CalcError::parse(input))?;
        Self::number(&number, input).map(Some)
    }

    fn match_rule(rule: Rule, input: &str) -> Option<Pair<'_, Rule>> {
        LiteralParser::parse(rule, input).ok()?.next()
    }

    fn number(pair: &Pair<Rule>, input: &str) -> Result<f64> {
        pair.as_str()
            .parse::<f64>()
            .map_err(|_| CalcError::parse(input))
    }
}
