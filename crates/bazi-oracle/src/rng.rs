//! Seeded randomness for reproducible question sets.
//!
//! The seed comes from a SHA-256 digest of a text key: the first 16 hex
//! digits of the digest, read as a big-endian `u64`. Changing the hash or the
//! prefix width changes every derived question set.
//!
//! The generator is pinned to ChaCha12 rather than `StdRng`, whose algorithm
//! may change between `rand` releases.

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use sha2::{Digest, Sha256};

/// Number of leading hex digits of the digest used as the seed.
pub const SEED_HEX_WIDTH: usize = 16;

/// Derive a seed from an arbitrary text key.
pub fn seed_from_key(key: &str) -> u64 {
    let digest = Sha256::digest(key.as_bytes());
    let mut prefix = [0u8; SEED_HEX_WIDTH / 2];
    prefix.copy_from_slice(&digest[..SEED_HEX_WIDTH / 2]);
    let seed = u64::from_be_bytes(prefix);
    tracing::debug!(key, prefix = %hex::encode(prefix), seed, "derived seed");
    seed
}

/// The seed key for a chart on a given day: `"<chart key>:<YYYY-MM-DD>"`.
pub fn daily_key(chart_key: &str, day: NaiveDate) -> String {
    format!("{chart_key}:{}", day.format("%Y-%m-%d"))
}

/// A pseudo-random source built from an integer seed.
#[derive(Debug, Clone)]
pub struct SeededRng {
    inner: ChaCha12Rng,
}

impl SeededRng {
    /// Create from an integer seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: ChaCha12Rng::seed_from_u64(seed),
        }
    }

    /// Create from a text key via [`seed_from_key`].
    pub fn from_key(key: &str) -> Self {
        Self::from_seed(seed_from_key(key))
    }

    /// Pick one item uniformly. Returns `None` for an empty slice.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.inner.random_range(0..items.len()))
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    /// A single random bit.
    pub fn random_bit(&mut self) -> bool {
        self.inner.random::<bool>()
    }
}
