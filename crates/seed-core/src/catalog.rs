//! Compiled-in product catalog.

/// Catalog entry. Its position in [`PRODUCT_CATALOG`] equals its `id`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogProduct {
    pub id: u64,
    pub name: &'static str,
    pub product_type: &'static str,
    pub price: f64,
    pub cost: f64,
}

const fn entry(
    id: u64,
    name: &'static str,
    product_type: &'static str,
    price: f64,
    cost: f64,
) -> CatalogProduct {
    CatalogProduct {
        id,
        name,
        product_type,
        price,
        cost,
    }
}

pub const PRODUCT_CATALOG: &[CatalogProduct] = &[
    entry(0, "Espresso Machine", "kitchen", 249.0, 161.5),
    entry(1, "Coffee Grinder", "kitchen", 89.9, 52.0),
    entry(2, "Running Shoes", "sports", 119.0, 64.3),
    entry(3, "Yoga Mat", "sports", 29.5, 11.2),
    entry(4, "Wireless Headphones", "electronics", 179.0, 98.7),
    entry(5, "Smart Watch", "electronics", 299.0, 187.4),
    entry(6, "Desk Lamp", "home", 39.9, 18.6),
    entry(7, "Office Chair", "home", 219.0, 132.0),
    entry(8, "Hiking Backpack", "outdoor", 99.0, 51.9),
    entry(9, "Camping Tent", "outdoor", 189.0, 117.8),
];
