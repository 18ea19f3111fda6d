use crate::registry::{Category, Registry, UnaryOperation};

pub fn register(registry: &mut Registry) {
    registry.register(UnaryOperation::new(
        "degrees_to_radians",
        "rad",
        Category::Conversion,
        f64::to_radians,
    ));
    registry.register(UnaryOperation::new(
        "radians_to_degrees",
        "deg",
        Category::Conversion,
        f64::to_degrees,
    ));
}
