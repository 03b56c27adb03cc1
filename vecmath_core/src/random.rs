//! Uniform random sources.
//!
//! Every random-flavored operation in the crate takes its randomness as a
//! plain `FnMut() -> f64` that yields uniform doubles in `[0, 1)`. Tests pin
//! results by injecting a constant closure or a seeded source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Source backed by the thread-local generator.
pub fn thread_source() -> impl FnMut() -> f64 {
    let mut rng = rand::thread_rng();
    move || rng.gen::<f64>()
}

/// Deterministic source for reproducible runs.
pub fn seeded(seed: u64) -> impl FnMut() -> f64 {
    debug!(seed, "Creating seeded random source");
    let mut rng = StdRng::seed_from_u64(seed);
    move || rng.gen::<f64>()
}

/// Borrows any `rand` generator as a source.
pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> impl FnMut() -> f64 + '_ {
    move || rng.gen::<f64>()
}
