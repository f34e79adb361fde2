use serde::{Deserialize, Serialize};

/// A single product record. Pure value type — equality is field-wise,
/// and the JSON shape follows the field order: `id`, `name`, `stock`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub stock: u32,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, stock: u32) -> Self {
        Self {
            id,
            name: name.into(),
            stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_expected_keys() {
        let p = Product::new(1, "Laptop", 150);
        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(value, json!({"id": 1, "name": "Laptop", "stock": 150}));
    }

    #[test]
    fn deserializes_from_json_object() {
        let p: Product =
            serde_json::from_value(json!({"id": 2, "name": "Mouse", "stock": 800})).unwrap();
        assert_eq!(p, Product::new(2, "Mouse", 800));
    }

    #[test]
    fn round_trip_preserves_fields() {
        let original = vec![
            Product::new(1, "Laptop", 150),
            Product::new(2, "Mouse", 800),
            Product::new(3, "Keyboard", 450),
        ];
        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: Vec<Product> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn rejects_negative_stock() {
        let result: Result<Product, _> =
            serde_json::from_value(json!({"id": 1, "name": "Laptop", "stock": -5}));
        assert!(result.is_err(), "stock is unsigned; negatives must not parse");
    }
}
