use std::ops::RangeInclusive;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the synthetic `current_users` value.
pub trait UserCountSource: Send + Sync {
    /// Uniform draw from `range` (inclusive on both ends).
    fn next_in_range(&self, range: RangeInclusive<u32>) -> u32;
}

/// Thread-local RNG; the default.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngUsers;

impl UserCountSource for ThreadRngUsers {
    fn next_in_range(&self, range: RangeInclusive<u32>) -> u32 {
        rand::rng().random_range(range)
    }
}

/// Seeded RNG shared across requests, for reproducible sequences.
#[derive(Debug)]
pub struct SeededUsers {
    rng: Mutex<StdRng>,
}

impl SeededUsers {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl UserCountSource for SeededUsers {
    fn next_in_range(&self, range: RangeInclusive<u32>) -> u32 {
        // A poisoned lock still holds a usable RNG state.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.random_range(range)
    }
}
