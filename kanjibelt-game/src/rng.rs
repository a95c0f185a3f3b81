//! Seedable randomness for spawn decisions.
//!
//! Lane choice and symbol choice draw from independent streams so a test
//! can pin one without disturbing the other. Stream seeds are derived from
//! the user seed with domain-tagged HMAC-SHA256.

use hmac::{Hmac, Mac};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use sha2::Sha256;
use std::cell::{RefCell, RefMut};

fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes()).expect("64-bit seed is valid key");
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let seed_bytes: [u8; 8] = digest[..8].try_into().expect("digest slice length");
    u64::from_le_bytes(seed_bytes)
}

/// Counting wrapper for RNG streams providing instrumentation.
#[derive(Debug, Clone)]
pub struct CountingRng<R> {
    rng: R,
    draws: u64,
}

impl CountingRng<SmallRng> {
    fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            draws: 0,
        }
    }

    /// Uniform index into a non-empty collection.
    pub fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.draws += 1;
        self.rng.gen_range(0..len)
    }

    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

/// Independent RNG streams for the spawn scheduler.
#[derive(Debug, Clone)]
pub struct RngBundle {
    lane: RefCell<CountingRng<SmallRng>>,
    symbol: RefCell<CountingRng<SmallRng>>,
}

impl RngBundle {
    /// Construct the bundle from a user-visible seed.
    #[must_use]
    pub fn from_user_seed(seed: u64) -> Self {
        let lane = CountingRng::new(derive_stream_seed(seed, b"lane"));
        let symbol = CountingRng::new(derive_stream_seed(seed, b"symbol"));
        Self {
            lane: RefCell::new(lane),
            symbol: RefCell::new(symbol),
        }
    }

    /// Access the lane-choice stream.
    #[must_use]
    pub fn lane(&self) -> RefMut<'_, CountingRng<SmallRng>> {
        self.lane.borrow_mut()
    }

    /// Access the symbol-choice stream.
    #[must_use]
    pub fn symbol(&self) -> RefMut<'_, CountingRng<SmallRng>> {
        self.symbol.borrow_mut()
    }
}
