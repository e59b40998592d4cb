//! Random number generation for sampling.
//!
//! Provides a thread-local ChaCha20 PRNG. Each thread seeds its generator from
//! the OS entropy source on first use; [`reseed`] makes a thread deterministic.

use rand::{Rng, SeedableRng, rng};
use rand_chacha::ChaCha20Rng;
use std::cell::RefCell;

thread_local! {
    /// Thread-local ChaCha20 PRNG for quality random numbers.
    static RNG: RefCell<ChaCha20Rng> = RefCell::new(ChaCha20Rng::from_rng(&mut rng()));
}

/// Replace the calling thread's generator with one seeded from `seed`.
///
/// Other threads keep their own generators.
pub fn reseed(seed: u64) {
    RNG.with(|rng| *rng.borrow_mut() = ChaCha20Rng::seed_from_u64(seed));
}

/// Generate a random f64 in [0.0, 1.0)
pub fn random_f64() -> f64 {
    RNG.with(|rng| rng.borrow_mut().random())
}

/// Generate a random f64 in [min, max)
pub fn random_f64_range(min: f64, max: f64) -> f64 {
    min + (max - min) * random_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_range() {
        reseed(7);
        for _ in 0..10_000 {
            let x = random_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn custom_range() {
        reseed(11);
        for _ in 0..10_000 {
            let x = random_f64_range(-3.0, 5.0);
            assert!((-3.0..5.0).contains(&x));
        }
    }

    #[test]
    fn reseed_is_deterministic() {
        reseed(42);
        let first: Vec<f64> = (0..16).map(|_| random_f64()).collect();
        reseed(42);
        let second: Vec<f64> = (0..16).map(|_| random_f64()).collect();
        assert_eq!(first, second);
    }
}
