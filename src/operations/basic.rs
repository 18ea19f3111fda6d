use crate::registry::{BinaryOperation, Category, Registry, Violation};

pub fn register(registry: &mut Registry) {
    registry.register(BinaryOperation::new("addition", "+", Category::Basic, |a, b| a + b));
    registry.register(BinaryOperation::new("subtraction", "-", Category::Basic, |a, b| a - b));
    registry.register(BinaryOperation::new(
        "multiplication",
        "*",
        Category::Basic,
        |a, b| a * b,
    ));
    registry.register(
        BinaryOperation::new("division", "/", Category::Basic, |a, b| a / b)
            .with_rule(nonzero_divisor),
    );
    registry.register(
        BinaryOperation::new("modulo", "%", Category::Basic, modulo).with_rule(nonzero_divisor),
    );
    registry.register(
        BinaryOperation::new("power", "**", Category::Basic, f64::powf).with_rule(exponentiation),
    );
    // Takes over the "power" name key; "**" stays bound to the operator above.
    registry.register(
        BinaryOperation::new("power", "^", Category::Basic, f64::powf).with_rule(power),
    );
}

fn nonzero_divisor(_: f64, divisor: f64) -> Result<(), Violation> {
    if divisor == 0.0 {
        Err(Violation::ZeroDivisor)
    } else {
        Ok(())
    }
}

/// Floored modulo: the result takes the sign of the divisor.
pub fn modulo(a: f64, b: f64) -> f64 {
    let rem = a % b;
    if rem != 0.0 && (rem < 0.0) != (b < 0.0) {
        rem + b
    } else {
        rem
    }
}

fn exponentiation(base: f64, exponent: f64) -> Result<(), Violation> {
    if base == 0.0 && exponent < 0.0 {
        return Err(Violation::ZeroDivisor);
    }
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(Violation::Domain(
            "Cannot raise negative number to non-integer power",
        ));
    }
    Ok(())
}

fn power(base: f64, exponent: f64) -> Result<(), Violation> {
    if base == 0.0 && exponent < 0.0 {
        return Err(Violation::Domain("Cannot raise 0 to negative power"));
    }
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(Violation::Domain(
            "Cannot raise negative number to non-integer power",
        ));
    }
    Ok(())
}
