//! Fake value provider.
//!
//! [`ValueProvider`] is the seam between the record generators and the source
//! of randomness. [`FakerProvider`] is the default implementation, backed by
//! any `rand::Rng` and the `fake` crate for last names and cities.

use crate::generator::GeneratorError;
use chrono::{NaiveDateTime, TimeDelta};
use fake::faker::address::en::CityName;
use fake::faker::name::en::LastName;
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seed_core::Gender;

const MALE_FIRST_NAMES: &[&str] = &[
    "James", "Lukas", "Noah", "Felix", "Daniel", "Thomas", "Michael", "David", "Jonas", "Paul",
    "Leon", "Samuel", "Martin", "Oliver", "Henry", "Peter",
];

const FEMALE_FIRST_NAMES: &[&str] = &[
    "Emma", "Mia", "Hannah", "Sophia", "Laura", "Anna", "Olivia", "Clara", "Lena", "Julia",
    "Emily", "Sarah", "Marie", "Nora", "Lisa", "Charlotte",
];

/// Source of random scalars for record generation.
pub trait ValueProvider {
    /// Uniform integer in the closed range `[min, max]`.
    fn int_range(&mut self, min: i64, max: i64) -> Result<i64, GeneratorError>;

    /// Uniform instant in the half-open range `[start, end)`.
    ///
    /// An empty range (`start == end`) yields `start`.
    fn datetime_between(
        &mut self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<NaiveDateTime, GeneratorError>;

    /// First name plausible for the given gender.
    fn first_name(&mut self, gender: Gender) -> String;

    fn last_name(&mut self) -> String;

    fn city(&mut self) -> String;
}

/// Default provider drawing from an RNG.
pub struct FakerProvider<R: Rng> {
    rng: R,
}

impl FakerProvider<StdRng> {
    /// Provider seeded from OS entropy. Every run produces different data.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> FakerProvider<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn pick(&mut self, pool: &[&str]) -> String {
        let idx = self.rng.gen_range(0..pool.len());
        pool[idx].to_string()
    }
}

impl<R: Rng> ValueProvider for FakerProvider<R> {
    fn int_range(&mut self, min: i64, max: i64) -> Result<i64, GeneratorError> {
        if min > max {
            return Err(GeneratorError::InvalidRange { min, max });
        }
        Ok(self.rng.gen_range(min..=max))
    }

    fn datetime_between(
        &mut self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<NaiveDateTime, GeneratorError> {
        let span = (end - start).num_milliseconds();
        if span < 0 {
            return Err(GeneratorError::InvalidInterval { start, end });
        }
        if span == 0 {
            return Ok(start);
        }
        let offset = self.rng.gen_range(0..span);
        Ok(start + TimeDelta::milliseconds(offset))
    }

    fn first_name(&mut self, gender: Gender) -> String {
        match gender {
            Gender::Man => self.pick(MALE_FIRST_NAMES),
            Gender::Woman => self.pick(FEMALE_FIRST_NAMES),
        }
    }

    fn last_name(&mut self) -> String {
        LastName().fake_with_rng(&mut self.rng)
    }

    fn city(&mut self) -> String {
        CityName().fake_with_rng(&mut self.rng)
    }
}
