use crate::registry::{Category, Registry, UnaryOperation, Violation};

pub fn register(registry: &mut Registry) {
    registry.register(
        UnaryOperation::new("natural_log", "ln", Category::Logarithmic, f64::ln)
            .with_rule(positive),
    );
    registry.register(
        UnaryOperation::new("log_base_10", "log", Category::Logarithmic, f64::log10)
            .with_rule(positive),
    );
}

fn positive(x: f64) -> Result<(), Violation> {
    if x <= 0.0 {
        Err(Violation::Domain("math domain error"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;

    #[test]
    fn test_logarithms() {
        let mut registry = Registry::new();
        register(&mut registry);

        let log = registry.lookup("log").unwrap();
        assert!((log.execute(&[100.0]).unwrap() - 2.0).abs() < 1e-12);
        assert_eq!(
            log.execute(&[0.0]),
            Err(CalcError::domain("log_base_10", "math domain error"))
        );

        let ln = registry.lookup("natural_log").unwrap();
        assert!((ln.execute(&[std::f64::consts::E]).unwrap() - 1.0).abs() < 1e-12);
        assert!(matches!(ln.execute(&[-3.0]), Err(CalcError::Domain { .. })));
    }
}
