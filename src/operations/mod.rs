pub mod basic;
pub mod conversion;
pub mod logarithmic;
pub mod scientific;

use crate::registry::Registry;

/// Seeds `registry` with every built-in operation.
pub fn register_operations(registry: &mut Registry) {
    basic::register(registry);
    scientific::register(registry);
    logarithmic::register(registry);
    conversion::register(registry);
}
