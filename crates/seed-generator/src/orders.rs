//! Order and order-item generation over the month buckets.
//!
//! Orders are assigned to buckets in contiguous blocks of
//! [`ORDERS_PER_MONTH`]; the cursor advances at every index divisible by the
//! block size. Only orders in the current month may still be open: their
//! status comes from [`CURRENT_MONTH_STATUS_RULES`]. Every other order is
//! `sent` and carries a resolution date.

use crate::calendar::MonthBucket;
use crate::generator::GeneratorError;
use crate::provider::ValueProvider;
use chrono::TimeDelta;
use seed_core::{Order, OrderItem, OrderStatus, ORDERS_PER_MONTH};
use tracing::debug;

/// Maximum number of days between `created_at` and `solved_at`.
pub const MAX_SOLVE_DAYS: i64 = 3;

pub const MIN_QUANTITY: i64 = 1;
pub const MAX_QUANTITY: i64 = 10;

/// Assigns `status` to orders whose index is divisible by `modulus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRule {
    pub status: OrderStatus,
    pub modulus: u64,
}

impl StatusRule {
    pub fn matches(&self, index: u64) -> bool {
        index % self.modulus == 0
    }
}

/// Status rules for current-month orders, highest priority first.
///
/// Indices divisible by both 3 and 5 are `in_progress`.
pub const CURRENT_MONTH_STATUS_RULES: [StatusRule; 2] = [
    StatusRule {
        status: OrderStatus::InProgress,
        modulus: 3,
    },
    StatusRule {
        status: OrderStatus::Accepted,
        modulus: 5,
    },
];

/// Status of the order at `index`. The first matching rule wins; past months
/// and unmatched indices are `sent`.
pub fn derive_status(index: u64, is_current_month: bool) -> OrderStatus {
    if !is_current_month {
        return OrderStatus::Sent;
    }
    CURRENT_MONTH_STATUS_RULES
        .iter()
        .find(|rule| rule.matches(index))
        .map_or(OrderStatus::Sent, |rule| rule.status)
}

/// Generate `order_count` orders and their index-aligned items.
///
/// `buckets` must hold at least `order_count / ORDERS_PER_MONTH` entries,
/// as planned by [`crate::calendar::plan_buckets`].
pub fn generate_orders<P: ValueProvider>(
    provider: &mut P,
    buckets: &[MonthBucket],
    order_count: u64,
    user_count: u64,
    product_count: u64,
) -> Result<(Vec<Order>, Vec<OrderItem>), GeneratorError> {
    let covered = (buckets.len() as u64).saturating_mul(ORDERS_PER_MONTH);
    if covered < order_count {
        return Err(GeneratorError::MissingBucket(covered));
    }

    let mut orders = Vec::with_capacity(order_count as usize);
    let mut items = Vec::with_capacity(order_count as usize);
    let mut remaining = buckets.iter();
    let mut cursor: Option<&MonthBucket> = None;

    for id in 0..order_count {
        if id % ORDERS_PER_MONTH == 0 {
            cursor = remaining.next();
            if let Some(b) = cursor {
                debug!("Orders from {} fall into {}", id, b.month);
            }
        }
        let bucket = cursor.ok_or(GeneratorError::MissingBucket(id))?;

        let created_at = provider.datetime_between(bucket.window_start, bucket.window_end)?;

        // Computed for every order; only resolved orders keep it.
        let solve_days = provider.int_range(0, MAX_SOLVE_DAYS)?;
        let solved_at =
            provider.datetime_between(created_at, created_at + TimeDelta::days(solve_days))?;

        let status = derive_status(id, bucket.is_current);

        orders.push(Order {
            id,
            user_id: provider.int_range(0, user_count as i64 - 1)? as u64,
            status,
            created_at,
            solved_at: status.is_resolved().then_some(solved_at),
        });

        items.push(OrderItem {
            id,
            order_id: id,
            product_id: provider.int_range(0, product_count as i64 - 1)? as u64,
            quantity: provider.int_range(MIN_QUANTITY, MAX_QUANTITY)? as u32,
        });
    }

    Ok((orders, items))
}
