use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

mod operation;

pub use operation::*;

/// Operations grouped by category, in first-seen order.
pub type Listing = Vec<(Category, Vec<String>)>;

/// Lookup table of every operation, keyed by both symbol and name.
///
/// Keys keep the position of their first insertion; re-registering a key
/// replaces its operation in place. Listing walks the keys in that order.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    keys: Vec<String>,
    operations: HashMap<String, Arc<Operation>>,
}

impl Registry {
    /// Creates an empty registry. Use [`build_registry`] for the seeded one.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `operation` under its symbol and its name.
    pub fn register<O: Into<Operation>>(&mut self, operation: O) {
        let operation = Arc::new(operation.into());
        debug!(
            "Registering {} as '{}' and '{}'",
            operation.name(),
            operation.symbol(),
            operation.name()
        );
        self.insert(operation.symbol(), Arc::clone(&operation));
        self.insert(operation.name(), operation);
    }

    fn insert(&mut self, key: &str, operation: Arc<Operation>) {
        if let Some(previous) = self.operations.insert(key.to_string(), operation) {
            debug!("Key '{}' was bound to {}, replaced", key, previous.name());
        } else {
            self.keys.push(key.to_string());
        }
    }

    pub fn lookup(&self, key: &str) -> Option<&Operation> {
        self.operations.get(key).map(Arc::as_ref)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.operations.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys and their operations in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Operation)> + '_ {
        self.keys.iter().filter_map(move |key| {
            self.operations
                .get(key)
                .map(|operation| (key.as_str(), operation.as_ref()))
        })
    }

    /// Registered keys that name binary operations and belong to `allowed`,
    /// longest first. Equal lengths keep key order.
    pub fn binary_symbols<'a>(&'a self, allowed: &[&str]) -> Vec<&'a str> {
        let mut symbols: Vec<&str> = self
            .iter()
            .filter(|(key, operation)| operation.is_binary() && allowed.contains(key))
            .map(|(key, _)| key)
            .collect();
        symbols.sort_by(|a, b| b.len().cmp(&a.len()));
        symbols
    }

    /// Lists `"symbol: name"` entries grouped by category.
    ///
    /// Without a filter every category that has operations appears, in the
    /// order it is first met. With a filter the result holds exactly that
    /// category, possibly with no entries.
    pub fn list_by_category(&self, category: Option<Category>) -> Listing {
        let mut grouped: Listing = Vec::new();
        if let Some(category) = category {
            grouped.push((category, Vec::new()));
        }

        for (_, operation) in self.iter() {
            let op_category = operation.category();
            if category.is_some_and(|wanted| wanted != op_category) {
                continue;
            }

            let index = match grouped.iter().position(|(c, _)| *c == op_category) {
                Some(index) => index,
                None => {
                    grouped.push((op_category, Vec::new()));
                    grouped.len() - 1
                }
            };

            let entry = operation.display_entry();
            let entries = &mut grouped[index].1;
            if !entries.contains(&entry) {
                entries.push(entry);
            }
        }

        grouped
    }
}

/// Builds the fully seeded registry.
pub fn build_registry() -> Registry {
    let mut registry = Registry::new();
    crate::operations::register_operations(&mut registry);
    registry
}

/// Process-wide seeded registry, built on first use.
pub fn default_registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(build_registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add() -> BinaryOperation {
        BinaryOperation::new("addition", "+", Category::Basic, |a, b| a + b)
    }

    #[test]
    fn test_register_under_symbol_and_name() {
        let mut registry = Registry::new();
        registry.register(add());
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup("+").map(Operation::name), Some("addition"));
        assert_eq!(registry.lookup("addition").map(Operation::symbol), Some("+"));
        assert!(registry.lookup("plus").is_none());
    }

    #[test]
    fn test_last_registration_wins_and_keeps_position() {
        let mut registry = Registry::new();
        registry.register(BinaryOperation::new("power", "**", Category::Basic, f64::powf));
        registry.register(add());
        registry.register(BinaryOperation::new("power", "^", Category::Basic, f64::powf));

        let keys: Vec<&str> = registry.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["**", "power", "+", "addition", "^"]);
        assert_eq!(registry.lookup("power").map(Operation::symbol), Some("^"));
        assert_eq!(registry.lookup("**").map(Operation::symbol), Some("**"));
    }

    #[test]
    fn test_binary_symbols_longest_first() {
        let mut registry = Registry::new();
        registry.register(BinaryOperation::new("multiplication", "*", Category::Basic, |a, b| a * b));
        registry.register(add());
        registry.register(BinaryOperation::new("power", "**", Category::Basic, f64::powf));
        registry.register(UnaryOperation::new("square_root", "sqrt", Category::Scientific, f64::sqrt));

        let symbols = registry.binary_symbols(&["+", "*", "**", "sqrt"]);
        assert_eq!(symbols, vec!["**", "*", "+"]);
    }

    #[test]
    fn test_list_dedupes_and_groups() {
        let mut registry = Registry::new();
        registry.register(add());
        registry.register(UnaryOperation::new("square_root", "sqrt", Category::Scientific, f64::sqrt));
        registry.register(BinaryOperation::new("subtraction", "-", Category::Basic, |a, b| a - b));

        let listing = registry.list_by_category(None);
        assert_eq!(
            listing,
            vec![
                (
                    Category::Basic,
                    vec!["+: addition".to_string(), "-: subtraction".to_string()]
                ),
                (Category::Scientific, vec!["sqrt: square_root".to_string()]),
            ]
        );
    }

    #[test]
    fn test_list_filtered_category_without_entries() {
        let mut registry = Registry::new();
        registry.register(add());
        assert_eq!(
            registry.list_by_category(Some(Category::Conversion)),
            vec![(Category::Conversion, Vec::<String>::new())]
        );
    }
}
