//! Error types for scicalc-rs

use thiserror::Error;

/// Evaluation failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The text matched none of the recognized expression forms.
    #[error("Could not parse expression: {0}")]
    Parse(String),

    /// The identifier is not registered, or does not name a unary operation.
    #[error("Unknown unary op {0}")]
    UnknownOperation(String),

    #[error("{operation} domain error: {reason}")]
    Domain { operation: String, reason: String },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("{operation} expects {expected} argument(s), got {found}")]
    ArgumentCount {
        operation: String,
        expected: usize,
        found: usize,
    },
}

impl CalcError {
    pub fn parse(expression: impl Into<String>) -> Self {
        Self::Parse(expression.into())
    }

    pub fn unknown_operation(key: impl Into<String>) -> Self {
        Self::UnknownOperation(key.into())
    }

    pub fn domain(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Domain {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Short tag naming the failure class, used by the shell and in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parse(_) => "ParseError",
            Self::UnknownOperation(_) => "UnknownOperation",
            Self::Domain { .. } => "DomainError",
            Self::DivisionByZero => "DivisionByZero",
            Self::ArgumentCount { .. } => "ArgumentCount",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
