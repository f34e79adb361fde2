use std::sync::OnceLock;

use crate::models::Product;

static CATALOG: OnceLock<Vec<Product>> = OnceLock::new();

/// The full product list, in serving order. Built once, never mutated;
/// every request sees the same slice for the life of the process.
pub fn all() -> &'static [Product] {
    CATALOG.get_or_init(|| {
        vec![
            Product::new(1, "Laptop", 150),
            Product::new(2, "Mouse", 800),
            Product::new(3, "Keyboard", 450),
        ]
    })
}
