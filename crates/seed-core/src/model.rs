//! Generated entities: users, orders, order items and products.
//!
//! Every entity implements [`ToRow`] so writers can look its fields up by the
//! keys declared in [`crate::schema`].

use crate::values::{CellValue, ToRow};
use chrono::NaiveDateTime;
use std::fmt;

/// User gender as written to `users.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Man,
    Woman,
}

impl Gender {
    /// Map a binary gender code: `0` is `Man`, anything else is `Woman`.
    pub fn from_code(code: i64) -> Self {
        if code == 0 {
            Gender::Man
        } else {
            Gender::Woman
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Man => "Man",
            Gender::Woman => "Woman",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order lifecycle status.
///
/// Only `Sent` orders are resolved and carry a `solved_at` instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Sent,
    Accepted,
    InProgress,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Sent => "sent",
            OrderStatus::Accepted => "accepted",
            OrderStatus::InProgress => "in_progress",
        }
    }

    /// Whether the order reached its terminal state.
    pub fn is_resolved(&self) -> bool {
        matches!(self, OrderStatus::Sent)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub age: u32,
    pub gender: Gender,
}

impl ToRow for User {
    fn field(&self, key: &str) -> Option<CellValue> {
        let value = match key {
            "id" => self.id.into(),
            "first_name" => self.first_name.as_str().into(),
            "last_name" => self.last_name.as_str().into(),
            "city" => self.city.as_str().into(),
            "age" => self.age.into(),
            "gender" => self.gender.as_str().into(),
            _ => return None,
        };
        Some(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: u64,
    pub user_id: u64,
    pub status: OrderStatus,
    pub created_at: NaiveDateTime,
    /// Present if and only if `status` is [`OrderStatus::Sent`].
    pub solved_at: Option<NaiveDateTime>,
}

impl ToRow for Order {
    fn field(&self, key: &str) -> Option<CellValue> {
        let value = match key {
            "id" => self.id.into(),
            "user_id" => self.user_id.into(),
            "status" => self.status.as_str().into(),
            "created_at" => CellValue::DateTime(self.created_at),
            "solved_at" => self.solved_at.into(),
            _ => return None,
        };
        Some(value)
    }
}

/// Single line item of an order. Shares its id with the owning order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: u64,
    pub order_id: u64,
    pub product_id: u64,
    pub quantity: u32,
}

impl ToRow for OrderItem {
    fn field(&self, key: &str) -> Option<CellValue> {
        let value = match key {
            "id" => self.id.into(),
            "order_id" => self.order_id.into(),
            "product_id" => self.product_id.into(),
            "quantity" => self.quantity.into(),
            _ => return None,
        };
        Some(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub product_type: String,
    pub price: f64,
    pub cost: f64,
}

impl ToRow for Product {
    fn field(&self, key: &str) -> Option<CellValue> {
        let value = match key {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "type" => self.product_type.as_str().into(),
            "price" => self.price.into(),
            "cost" => self.cost.into(),
            _ => return None,
        };
        Some(value)
    }
}
