//! User generation.

use crate::generator::GeneratorError;
use crate::provider::ValueProvider;
use seed_core::{Gender, User};

pub const MIN_AGE: i64 = 20;
pub const MAX_AGE: i64 = 55;

/// Generate `count` users with ids `0..count`.
///
/// The gender code drawn first decides the first-name pool.
pub fn generate_users<P: ValueProvider>(
    provider: &mut P,
    count: u64,
) -> Result<Vec<User>, GeneratorError> {
    let mut users = Vec::with_capacity(count as usize);

    for id in 0..count {
        let gender = Gender::from_code(provider.int_range(0, 1)?);
        let first_name = provider.first_name(gender);
        let last_name = provider.last_name();
        let city = provider.city();
        let age = provider.int_range(MIN_AGE, MAX_AGE)? as u32;

        users.push(User {
            id,
            first_name,
            last_name,
            city,
            age,
            gender,
        });
    }

    Ok(users)
}
