//! Main data generator producing the full fixture dataset.

use crate::calendar::{plan_buckets, MonthBucket};
use crate::orders::generate_orders;
use crate::products::generate_products;
use crate::provider::ValueProvider;
use crate::users::generate_users;
use chrono::NaiveDateTime;
use seed_core::{ConfigError, Order, OrderItem, Product, SeedConfig, User, PRODUCT_CATALOG};
use tracing::info;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Invalid configuration, detected before generation starts
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Provider asked for an empty integer range
    #[error("Invalid integer range [{min}, {max}]")]
    InvalidRange { min: i64, max: i64 },

    /// Provider asked for an instant range whose end precedes its start
    #[error("Invalid date range: {start} is after {end}")]
    InvalidInterval {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// Month arithmetic left the representable calendar
    #[error("Month shift of {months} is outside the supported calendar")]
    CalendarOverflow { months: i64 },

    /// Fewer month buckets than order blocks
    #[error("No month bucket planned for order {0}")]
    MissingBucket(u64),
}

/// Explicit inputs of one generation run.
///
/// The reference instant stands in for "now"; the last month bucket is the
/// reference month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationPlan {
    pub user_count: u64,
    pub order_count: u64,
    /// Number of month buckets the orders are spread over
    pub month_count: u64,
    pub product_count: u64,
    pub reference: NaiveDateTime,
}

impl GenerationPlan {
    /// Validate the config and capture its counts.
    pub fn from_config(
        config: &SeedConfig,
        reference: NaiveDateTime,
    ) -> Result<Self, GeneratorError> {
        config.validate()?;
        Ok(Self {
            user_count: config.user_count,
            order_count: config.order_count,
            month_count: config.month_count(),
            product_count: config.product_count,
            reference,
        })
    }
}

/// All generated collections of one run.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub users: Vec<User>,
    pub orders: Vec<Order>,
    /// Index-aligned with `orders`
    pub order_items: Vec<OrderItem>,
    pub products: Vec<Product>,
}

/// Data generator bound to a plan and a value provider.
pub struct DataGenerator<P: ValueProvider> {
    plan: GenerationPlan,
    provider: P,
}

impl<P: ValueProvider> DataGenerator<P> {
    pub fn new(plan: GenerationPlan, provider: P) -> Self {
        Self { plan, provider }
    }

    /// Month buckets the orders of this plan fall into.
    pub fn buckets(&self) -> Result<Vec<MonthBucket>, GeneratorError> {
        plan_buckets(self.plan.reference, self.plan.month_count)
    }

    /// Generate users, orders with their items, and products, in that order.
    pub fn generate(&mut self) -> Result<Dataset, GeneratorError> {
        let plan = self.plan;
        info!(
            "Generating {} users, {} orders over {} months ending {}, {} products",
            plan.user_count,
            plan.order_count,
            plan.month_count,
            plan.reference.date(),
            plan.product_count
        );

        let users = generate_users(&mut self.provider, plan.user_count)?;

        let buckets = self.buckets()?;
        let (orders, order_items) = generate_orders(
            &mut self.provider,
            &buckets,
            plan.order_count,
            plan.user_count,
            plan.product_count,
        )?;

        let products = generate_products(PRODUCT_CATALOG);

        Ok(Dataset {
            users,
            orders,
            order_items,
            products,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::FakerProvider;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use seed_core::OrderStatus;

    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 20)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn generate(config: &SeedConfig, seed: u64) -> Dataset {
        let plan = GenerationPlan::from_config(config, reference()).unwrap();
        let provider = FakerProvider::new(StdRng::seed_from_u64(seed));
        DataGenerator::new(plan, provider).generate().unwrap()
    }

    #[test]
    fn test_plan_rejects_invalid_config() {
        let config = SeedConfig {
            order_count: 1234,
            ..SeedConfig::default()
        };

        let result = GenerationPlan::from_config(&config, reference());
        assert!(matches!(
            result,
            Err(GeneratorError::Config(ConfigError::InvalidOrderCount(1234)))
        ));
    }

    #[test]
    fn test_generate_default_sizes() {
        let config = SeedConfig::default();
        let dataset = generate(&config, 42);

        assert_eq!(dataset.users.len(), 1000);
        assert_eq!(dataset.orders.len(), 6000);
        assert_eq!(dataset.order_items.len(), 6000);
        assert_eq!(dataset.products.len(), PRODUCT_CATALOG.len());
    }

    #[test]
    fn test_references_stay_in_range() {
        let config = SeedConfig {
            user_count: 25,
            order_count: 2000,
            product_count: 4,
            ..SeedConfig::default()
        };
        let dataset = generate(&config, 7);

        assert!(dataset.orders.iter().all(|o| o.user_id < 25));
        assert!(dataset.order_items.iter().all(|i| i.product_id < 4));
    }

    #[test]
    fn test_deterministic_generation() {
        let config = SeedConfig {
            order_count: 1000,
            ..SeedConfig::default()
        };

        let a = generate(&config, 42);
        let b = generate(&config, 42);

        assert_eq!(a.users, b.users);
        assert_eq!(a.orders, b.orders);
        assert_eq!(a.order_items, b.order_items);
    }

    #[test]
    fn test_buckets_end_at_reference_month() {
        let config = SeedConfig::default();
        let plan = GenerationPlan::from_config(&config, reference()).unwrap();
        let generator = DataGenerator::new(plan, FakerProvider::new(StdRng::seed_from_u64(1)));

        let buckets = generator.buckets().unwrap();
        assert_eq!(buckets.len(), 6);
        assert!(buckets[5].is_current);
        assert!(buckets[..5].iter().all(|b| !b.is_current));
    }

    #[test]
    fn test_past_months_fully_sent() {
        let dataset = generate(&SeedConfig::default(), 3);

        assert!(dataset.orders[..5000]
            .iter()
            .all(|o| o.status == OrderStatus::Sent && o.solved_at.is_some()));
        assert!(dataset.orders[5000..]
            .iter()
            .any(|o| o.status != OrderStatus::Sent));
    }
}
