//! Seeded xorshift64* stream.
//!
//! A fixed seed yields an identical stream on every platform and in every
//! release; generated worlds are reproducible only as long as this holds,
//! so the stream lives here instead of behind a RNG crate.

use crate::config::CountRange;

pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    pub fn new(seed: u64) -> Self {
        // Avoid the degenerate all-zero state.
        let state = if seed == 0 { 0x9e3779b97f4a7c15 } else { seed };
        Self { state }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    /// Uniform draw from an inclusive count range.
    pub fn range_u32(&mut self, range: CountRange) -> u32 {
        let span = u64::from(range.max() - range.min()) + 1;
        range.min() + (self.next_u64() % span) as u32
    }

    /// Uniform pick from a pool. The pool must be non-empty.
    pub fn pick<'a, T>(&mut self, pool: &'a [T]) -> &'a T {
        &pool[(self.next_u64() % pool.len() as u64) as usize]
    }

    /// Uniform double in `[0, 1)` from the top 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Bernoulli draw; consumes exactly one stream value.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    /// Fair coin flip; consumes exactly one stream value.
    pub fn coin(&mut self) -> bool {
        self.next_u64() & 1 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = XorShift64::new(42);
        let mut b = XorShift64::new(42);
        for _ in 0..64 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn zero_seed_is_remapped() {
        let mut rng = XorShift64::new(0);
        // A zero state would be a fixed point; the remap must avoid it.
        assert_ne!(rng.next_u64(), 0);
        let mut again = XorShift64::new(0);
        assert_eq!(again.next_u64(), XorShift64::new(0).next_u64());
    }

    #[test]
    fn range_draws_stay_inclusive() {
        let range = CountRange::new(2, 5).expect("range");
        let mut rng = XorShift64::new(7);
        let mut seen = [false; 6];
        for _ in 0..512 {
            let v = rng.range_u32(range);
            assert!(range.contains(v), "draw {v} outside [2, 5]");
            seen[v as usize] = true;
        }
        // Both endpoints are reachable.
        assert!(seen[2] && seen[5]);
    }

    #[test]
    fn chance_extremes_never_surprise() {
        let mut rng = XorShift64::new(9);
        for _ in 0..256 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn next_f64_stays_in_unit_interval() {
        let mut rng = XorShift64::new(11);
        for _ in 0..256 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
