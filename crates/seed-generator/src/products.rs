//! Product projection from the catalog.

use seed_core::{CatalogProduct, Product};

/// Map catalog entries 1:1 into products, keeping catalog order and values.
pub fn generate_products(catalog: &[CatalogProduct]) -> Vec<Product> {
    catalog
        .iter()
        .map(|entry| Product {
            id: entry.id,
            name: entry.name.to_string(),
            product_type: entry.product_type.to_string(),
            price: entry.price,
            cost: entry.cost,
        })
        .collect()
}
