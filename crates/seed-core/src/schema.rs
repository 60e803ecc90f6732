//! Column schemas of the output tables.
//!
//! A [`TableSchema`] is an ordered list of `(field-key, column-title)` pairs.
//! Keys are looked up on records through [`crate::ToRow`]; titles form the
//! header row.

/// One output column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Field key looked up on each record
    pub key: &'static str,
    /// Header title
    pub title: &'static str,
}

impl Column {
    pub const fn new(key: &'static str, title: &'static str) -> Self {
        Self { key, title }
    }

    /// Column whose title equals its key.
    pub const fn keyed(key: &'static str) -> Self {
        Self { key, title: key }
    }
}

/// Table name plus its ordered columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [Column],
}

impl TableSchema {
    /// Header titles in column order.
    pub fn titles(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.title).collect()
    }
}

pub const USERS: TableSchema = TableSchema {
    name: "users",
    columns: &[
        Column::keyed("id"),
        Column::keyed("first_name"),
        Column::keyed("last_name"),
        Column::keyed("city"),
        Column::keyed("age"),
        Column::keyed("gender"),
    ],
};

pub const ORDERS: TableSchema = TableSchema {
    name: "orders",
    columns: &[
        Column::keyed("id"),
        Column::keyed("user_id"),
        Column::keyed("status"),
        Column::keyed("created_at"),
        Column::keyed("solved_at"),
    ],
};

pub const ORDER_ITEMS: TableSchema = TableSchema {
    name: "order_items",
    columns: &[
        Column::keyed("id"),
        Column::keyed("order_id"),
        Column::keyed("product_id"),
        Column::keyed("quantity"),
    ],
};

pub const PRODUCTS: TableSchema = TableSchema {
    name: "products",
    columns: &[
        Column::keyed("id"),
        Column::keyed("name"),
        Column::keyed("type"),
        Column::keyed("price"),
        Column::keyed("cost"),
    ],
};

/// All output tables in write order.
pub const ALL_TABLES: [TableSchema; 4] = [USERS, ORDERS, ORDER_ITEMS, PRODUCTS];
