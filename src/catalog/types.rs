use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Deserialize;
use uuid::Uuid;

/// Opaque, process-unique identity for a product.
///
/// Generated once when a [`Product`] is built and never derived from wire data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LocalId(Uuid);

impl LocalId {
    pub fn generate() -> Self {
        LocalId(Uuid::new_v4())
    }
}

impl fmt::Display for LocalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One product exactly as it appears on the wire.
#[derive(Deserialize, Debug, Clone)]
struct ProductRecord {
    id: String,
    name: String,
    price: String,
    image: String,
}

/// A catalog entry.
///
/// `source_id` is whatever the endpoint sent and may repeat across products.
/// Identity (equality and hashing) goes through `local_id` only.
#[derive(Deserialize, Debug, Clone)]
#[serde(from = "ProductRecord")]
pub struct Product {
    pub source_id: String,
    pub local_id: LocalId,
    pub name: String,
    /// Pre-formatted, currency prefixed (e.g. "£199").
    pub price: String,
    pub image_url: String,
}

impl Product {
    pub fn new(
        source_id: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            local_id: LocalId::generate(),
            name: name.into(),
            price: price.into(),
            image_url: image_url.into(),
        }
    }
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Product::new(record.id, record.name, record.price, record.image)
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.local_id == other.local_id
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.local_id.hash(state);
    }
}

/// The decoded catalog payload.
///
/// `product_count` comes straight from the wire and is not checked against
/// `products.len()`; the two may disagree.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CatalogResponse {
    pub products: Vec<Product>,
    pub title: String,
    pub product_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const SAMPLE: &str = r#"{
        "products": [
            {"id": "1", "name": "Test Shirt", "price": "£199", "image": "https://example.com/1.jpg"},
            {"id": "2", "name": "Test Shoe", "price": "£90", "image": "https://example.com/2.jpg"}
        ],
        "title": "Test Products",
        "product_count": 2
    }"#;

    #[test]
    fn test_decode_maps_wire_fields() {
        let response: CatalogResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.title, "Test Products");
        assert_eq!(response.product_count, 2);
        assert_eq!(response.products.len(), 2);

        let first = &response.products[0];
        assert_eq!(first.source_id, "1");
        assert_eq!(first.name, "Test Shirt");
        assert_eq!(first.price, "£199");
        assert_eq!(first.image_url, "https://example.com/1.jpg");
    }

    #[test]
    fn test_duplicate_source_ids_get_distinct_local_ids() {
        let json = r#"{
            "products": [
                {"id": "7", "name": "A", "price": "£1", "image": ""},
                {"id": "7", "name": "A", "price": "£1", "image": ""}
            ],
            "title": "Dupes",
            "product_count": 2
        }"#;
        let response: CatalogResponse = serde_json::from_str(json).unwrap();
        let (a, b) = (&response.products[0], &response.products[1]);
        assert_eq!(a.source_id, b.source_id);
        assert_ne!(a.local_id, b.local_id);
        assert_ne!(a, b);
    }

    #[test]
    fn test_decoding_twice_never_reuses_local_ids() {
        let first: CatalogResponse = serde_json::from_str(SAMPLE).unwrap();
        let second: CatalogResponse = serde_json::from_str(SAMPLE).unwrap();
        let ids: HashSet<LocalId> = first
            .products
            .iter()
            .chain(second.products.iter())
            .map(|p| p.local_id)
            .collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_equality_follows_local_id_only() {
        let product = Product::new("1", "Shirt", "£10", "img");
        let clone = product.clone();
        assert_eq!(product, clone);

        let mut renamed = product.clone();
        renamed.name = "Renamed".to_string();
        assert_eq!(product, renamed);

        let twin = Product::new("1", "Shirt", "£10", "img");
        assert_ne!(product, twin);
    }

    #[test]
    fn test_local_id_ignored_on_wire() {
        let json = r#"{"id": "1", "local_id": "not-used", "name": "A", "price": "£1", "image": ""}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_ne!(product.local_id.to_string(), "not-used");
    }

    #[test]
    fn test_product_count_not_reconciled() {
        let json = r#"{"products": [], "title": "Mismatch", "product_count": 12}"#;
        let response: CatalogResponse = serde_json::from_str(json).unwrap();
        assert!(response.products.is_empty());
        assert_eq!(response.product_count, 12);
    }

    #[test]
    fn test_missing_field_fails_to_decode() {
        let json = r#"{"products": [{"id": "1", "name": "A", "price": "£1"}], "title": "T", "product_count": 1}"#;
        assert!(serde_json::from_str::<CatalogResponse>(json).is_err());
    }
}
