//! Entropy-seeded random source for live hosts.

use combat_core::RngSource;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// [`RngSource`] backed by a seedable host RNG.
///
/// Live sessions seed from entropy; replays and the authoritative peer of a
/// networked session seed explicitly so the decision stream is
/// reproducible. Tests use the core's `PcgRng` directly.
pub struct EntropyRng {
    inner: StdRng,
}

impl EntropyRng {
    /// Fresh generator from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// Reproducible generator for replays and authoritative peers.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RngSource for EntropyRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_streams_are_reproducible() {
        let mut a = EntropyRng::seeded(31);
        let mut b = EntropyRng::seeded(31);
        for _ in 0..32 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }
}
