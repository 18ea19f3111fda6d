use crate::registry::{Category, Registry, UnaryOperation, Violation};

/// Largest n whose factorial is representable as an `f64`.
const MAX_FACTORIAL: f64 = 170.0;

pub fn register(registry: &mut Registry) {
    registry.register(
        UnaryOperation::new("square_root", "sqrt", Category::Scientific, f64::sqrt)
            .with_rule(non_negative),
    );
    registry.register(UnaryOperation::new("absolute", "abs", Category::Scientific, f64::abs));
    registry.register(
        UnaryOperation::new("factorial", "!", Category::Scientific, factorial)
            .with_rule(non_negative_integer),
    );
    registry.register(UnaryOperation::new("exponential", "exp", Category::Scientific, f64::exp));
    registry.register(UnaryOperation::new("ceiling", "ceil", Category::Scientific, f64::ceil));
    registry.register(UnaryOperation::new("floor", "floor", Category::Scientific, f64::floor));
    registry.register(
        UnaryOperation::new("arc_sine", "asin", Category::Scientific, f64::asin)
            .with_rule(unit_interval),
    );
    registry.register(
        UnaryOperation::new("arc_cosine", "acos", Category::Scientific, f64::acos)
            .with_rule(unit_interval),
    );
    registry.register(UnaryOperation::new("sine", "sin", Category::Scientific, f64::sin));
    registry.register(UnaryOperation::new("cosine", "cos", Category::Scientific, f64::cos));
    registry.register(UnaryOperation::new("tangent", "tan", Category::Scientific, f64::tan));
}

fn non_negative(x: f64) -> Result<(), Violation> {
    if x < 0.0 {
        Err(Violation::Domain("Cannot take square root of negative number"))
    } else {
        Ok(())
    }
}

fn non_negative_integer(x: f64) -> Result<(), Violation> {
    if x < 0.0 || x.fract() != 0.0 {
        Err(Violation::Domain(
            "Factorial is only defined for non-negative integers",
        ))
    } else {
        Ok(())
    }
}

fn unit_interval(x: f64) -> Result<(), Violation> {
    if !(-1.0..=1.0).contains(&x) {
        Err(Violation::Domain("input must be between -1 and 1"))
    } else {
        Ok(())
    }
}

/// Factorial of a non-negative integral `n`; infinite past [`MAX_FACTORIAL`].
pub fn factorial(n: f64) -> f64 {
    if n > MAX_FACTORIAL {
        return f64::INFINITY;
    }
    (2..=n as u64).fold(1.0, |acc, k| acc * k as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use std::f64::consts::PI;

    fn run(key: &str, x: f64) -> crate::error::Result<f64> {
        let mut registry = Registry::new();
        register(&mut registry);
        let operation = registry
            .lookup(key)
            .ok_or_else(|| CalcError::unknown_operation(key))?;
        operation.execute(&[x])
    }

    #[test]
    fn test_factorial_values() {
        assert_eq!(factorial(0.0), 1.0);
        assert_eq!(factorial(1.0), 1.0);
        assert_eq!(factorial(5.0), 120.0);
        assert_eq!(factorial(10.0), 3_628_800.0);
        assert!(factorial(171.0).is_infinite());
    }

    #[test]
    fn test_factorial_rules() {
        assert_eq!(run("!", 5.0), Ok(120.0));
        assert_eq!(run("factorial", 3.0), Ok(6.0));
        assert_eq!(
            run("!", -1.0),
            Err(CalcError::domain(
                "factorial",
                "Factorial is only defined for non-negative integers"
            ))
        );
        assert!(matches!(run("!", 2.5), Err(CalcError::Domain { .. })));
        assert_eq!(
            run("!", 171.0),
            Err(CalcError::domain("factorial", "result out of range"))
        );
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(run("sqrt", 16.0), Ok(4.0));
        assert!(matches!(run("sqrt", -4.0), Err(CalcError::Domain { .. })));
    }

    #[test]
    fn test_inverse_trig_domain() {
        let asin = run("asin", 1.0).unwrap();
        assert!((asin - PI / 2.0).abs() < 1e-12);
        assert_eq!(run("acos", 1.0), Ok(0.0));
        assert_eq!(
            run("asin", 2.0),
            Err(CalcError::domain("arc_sine", "input must be between -1 and 1"))
        );
        assert!(matches!(run("acos", -1.5), Err(CalcError::Domain { .. })));
    }

    #[test]
    fn test_rounding_and_abs() {
        assert_eq!(run("ceil", 4.2), Ok(5.0));
        assert_eq!(run("floor", 4.8), Ok(4.0));
        assert_eq!(run("abs", -10.0), Ok(10.0));
        assert_eq!(run("exp", 0.0), Ok(1.0));
    }
}
