use crate::error::{CalcError, Result};
use std::fmt;
use std::str::FromStr;

/// Groups operations for listing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Basic,
    Scientific,
    Logarithmic,
    Conversion,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Basic,
        Category::Scientific,
        Category::Logarithmic,
        Category::Conversion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Basic => "basic",
            Category::Scientific => "scientific",
            Category::Logarithmic => "logarithmic",
            Category::Conversion => "conversion",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "basic" => Ok(Category::Basic),
            "scientific" => Ok(Category::Scientific),
            "logarithmic" => Ok(Category::Logarithmic),
            "conversion" => Ok(Category::Conversion),
            _ => Err(format!("Unknown operation category: {}", value)),
        }
    }
}

/// Why a set of arguments was rejected before execution.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Violation {
    Domain(&'static str),
    ZeroDivisor,
}

pub type UnaryFn = fn(f64) -> f64;
pub type BinaryFn = fn(f64, f64) -> f64;
pub type UnaryRule = fn(f64) -> std::result::Result<(), Violation>;
pub type BinaryRule = fn(f64, f64) -> std::result::Result<(), Violation>;

#[derive(Debug, Clone)]
pub struct UnaryOperation {
    pub name: &'static str,
    pub symbol: &'static str,
    pub category: Category,
    pub func: UnaryFn,
    pub rule: Option<UnaryRule>,
}

impl UnaryOperation {
    pub fn new(name: &'static str, symbol: &'static str, category: Category, func: UnaryFn) -> Self {
        Self {
            name,
            symbol,
            category,
            func,
            rule: None,
        }
    }

    pub fn with_rule(mut self, rule: UnaryRule) -> Self {
        self.rule = Some(rule);
        self
    }
}

#[derive(Debug, Clone)]
pub struct BinaryOperation {
    pub name: &'static str,
    pub symbol: &'static str,
    pub category: Category,
    pub func: BinaryFn,
    pub rule: Option<BinaryRule>,
}

impl BinaryOperation {
    pub fn new(name: &'static str, symbol: &'static str, category: Category, func: BinaryFn) -> Self {
        Self {
            name,
            symbol,
            category,
            func,
            rule: None,
        }
    }

    pub fn with_rule(mut self, rule: BinaryRule) -> Self {
        self.rule = Some(rule);
        self
    }
}

/// A registered computation, either unary (`sqrt(4)`, `5!`) or binary (`2+3`).
#[derive(Debug, Clone)]
pub enum Operation {
    Unary(UnaryOperation),
    Binary(BinaryOperation),
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Unary(op) => op.name,
            Operation::Binary(op) => op.name,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Unary(op) => op.symbol,
            Operation::Binary(op) => op.symbol,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Operation::Unary(op) => op.category,
            Operation::Binary(op) => op.category,
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Operation::Unary(_) => 1,
            Operation::Binary(_) => 2,
        }
    }

    pub fn is_unary(&self) -> bool {
        matches!(self, Operation::Unary(_))
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Operation::Binary(_))
    }

    /// The `"symbol: name"` string used when listing operations.
    pub fn display_entry(&self) -> String {
        format!("{}: {}", self.symbol(), self.name())
    }

    /// Checks argument count, that every argument is a finite real, and the
    /// operation's own domain rule.
    pub fn validate(&self, args: &[f64]) -> Result<()> {
        if args.len() != self.arity() {
            return Err(CalcError::ArgumentCount {
                operation: self.name().to_string(),
                expected: self.arity(),
                found: args.len(),
            });
        }
        if args.iter().any(|arg| !arg.is_finite()) {
            return Err(CalcError::domain(
                self.name(),
                "arguments must be real numbers",
            ));
        }

        let checked = match self {
            Operation::Unary(op) => op.rule.map_or(Ok(()), |rule| rule(args[0])),
            Operation::Binary(op) => op.rule.map_or(Ok(()), |rule| rule(args[0], args[1])),
        };
        checked.map_err(|violation| match violation {
            Violation::Domain(reason) => CalcError::domain(self.name(), reason),
            Violation::ZeroDivisor => CalcError::DivisionByZero,
        })
    }

    /// Validates `args` then applies the operation.
    pub fn execute(&self, args: &[f64]) -> Result<f64> {
        self.validate(args)?;
        let value = match self {
            Operation::Unary(op) => (op.func)(args[0]),
            Operation::Binary(op) => (op.func)(args[0], args[1]),
        };
        if !value.is_finite() {
            return Err(CalcError::domain(self.name(), "result out of range"));
        }
        Ok(value)
    }
}

impl From<UnaryOperation> for Operation {
    fn from(value: UnaryOperation) -> Self {
        Operation::Unary(value)
    }
}

impl From<BinaryOperation> for Operation {
    fn from(value: BinaryOperation) -> Self {
        Operation::Binary(value)
    }
}
