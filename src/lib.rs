pub mod display;
pub mod error;
pub mod evaluator;
pub mod operations;
pub mod registry;
pub mod shell;

pub use error::{CalcError, Result};
pub use evaluator::Evaluator;
pub use registry::{build_registry, default_registry, Category, Listing, Operation, Registry};

/// Evaluates a single expression against `registry`.
pub fn evaluate(registry: &Registry, expression: &str) -> Result<f64> {
    Evaluator::new(registry).evaluate(expression)
}

/// Evaluates independent expressions in parallel, keeping their order.
pub fn evaluate_batch<S>(registry: &Registry, expressions: &[S]) -> Vec<Result<f64>>
where
    S: AsRef<str> + Sync,
{
    Evaluator::new(registry).evaluate_batch(expressions)
}

/// Operations grouped by category, optionally restricted to one category.
pub fn list_operations(registry: &Registry, category: Option<Category>) -> Listing {
    registry.list_by_category(category)
}

/// Evaluates `expression` with the process-wide registry.
pub fn calculate(expression: &str) -> Result<f64> {
    evaluate(default_registry(), expression)
}
