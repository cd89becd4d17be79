//! Seeded sample pools and the scratch buffers every test reads.
//!
//! A [`Fixture`] owns two pools of [`POOL_SIZE`] samples (floats and
//! integers) drawn once from a seeded generator, and one [`ScratchPair`] per
//! domain. Each iteration copies an [`WINDOW`]-sample slice of both pools
//! into the scratch pairs; the perturbation policy may then rewrite lanes
//! before the test function reads them.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::simd::traits::Lane;
use crate::utils::AlignedBlock;

/// Samples per domain.
pub const POOL_SIZE: usize = 10_000;

/// Samples copied into a scratch pair per iteration.
pub const WINDOW: usize = 8;

/// Number of distinct windows, and so the largest iteration budget.
pub const MAX_ITERATIONS: usize = POOL_SIZE - WINDOW;

/// Lower bound of the sample range (inclusive).
pub const SAMPLE_MIN: f32 = -100_000.0;

/// Upper bound of the sample range (exclusive).
pub const SAMPLE_MAX: f32 = 100_000.0;

const BLOCK: usize = 16;

/// The immutable sample pools.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePool {
    floats: Vec<f32>,
    ints: Vec<i32>,
}

impl SamplePool {
    /// Draws both pools from `seed`. The integer samples are independent
    /// draws from the float range, truncated toward zero.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut floats = Vec::with_capacity(POOL_SIZE);
        let mut ints = Vec::with_capacity(POOL_SIZE);

        for _ in 0..POOL_SIZE {
            floats.push(rng.random_range(SAMPLE_MIN..SAMPLE_MAX));
            ints.push(rng.random_range(SAMPLE_MIN..SAMPLE_MAX) as i32);
        }

        SamplePool { floats, ints }
    }

    pub fn floats(&self) -> &[f32] {
        &self.floats
    }

    pub fn ints(&self) -> &[i32] {
        &self.ints
    }
}

/// Two 16-byte scratch blocks, one per operand.
///
/// Both blocks live in one 16-byte aligned allocation, back to back, so a
/// view may also span them (see [`ScratchPair::whole`] and
/// [`ScratchPair::middle`]). Every view reinterprets the same bytes; a float
/// window read through `first::<u8>()` is its IEEE byte image.
pub struct ScratchPair {
    block: AlignedBlock,
}

impl ScratchPair {
    fn new() -> Self {
        ScratchPair {
            block: AlignedBlock::new(2 * BLOCK),
        }
    }

    /// The first operand block.
    pub fn first<T: Lane>(&self) -> &[T] {
        self.block.lanes(0, BLOCK)
    }

    /// The second operand block.
    pub fn second<T: Lane>(&self) -> &[T] {
        self.block.lanes(BLOCK, BLOCK)
    }

    /// Sixteen bytes straddling both blocks: the high half of the first
    /// and the low half of the second.
    pub fn middle<T: Lane>(&self) -> &[T] {
        self.block.lanes(BLOCK / 2, BLOCK)
    }

    /// Both blocks as one 32-byte run.
    pub fn whole<T: Lane>(&self) -> &[T] {
        self.block.lanes(0, 2 * BLOCK)
    }

    pub fn first_mut<T: Lane>(&mut self) -> &mut [T] {
        self.block.lanes_mut(0, BLOCK)
    }

    pub fn second_mut<T: Lane>(&mut self) -> &mut [T] {
        self.block.lanes_mut(BLOCK, BLOCK)
    }

    pub fn whole_mut<T: Lane>(&mut self) -> &mut [T] {
        self.block.lanes_mut(0, 2 * BLOCK)
    }
}

/// Pools, scratch pairs and the perturbation generator of one sweep worker.
pub struct Fixture {
    seed: u64,
    pool: SamplePool,
    floats: ScratchPair,
    ints: ScratchPair,
    rng: StdRng,
}

impl Fixture {
    /// Builds the pools from `seed` and zeroed scratch pairs.
    pub fn new(seed: u64) -> Self {
        Fixture {
            seed,
            pool: SamplePool::new(seed),
            floats: ScratchPair::new(),
            ints: ScratchPair::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn pool(&self) -> &SamplePool {
        &self.pool
    }

    /// The float scratch pair.
    pub fn floats(&self) -> &ScratchPair {
        &self.floats
    }

    /// The integer scratch pair.
    pub fn ints(&self) -> &ScratchPair {
        &self.ints
    }

    /// Copies `pool.floats[i..i + 4]` into the first float block and
    /// `pool.floats[i + 4..i + 8]` into the second.
    ///
    /// # Panics
    ///
    /// Panics if `i >= MAX_ITERATIONS`.
    pub fn load_float_window(&mut self, i: usize) {
        assert!(i < MAX_ITERATIONS, "window {} is past the pool", i);
        self.floats
            .whole_mut::<f32>()
            .copy_from_slice(&self.pool.floats[i..i + WINDOW]);
    }

    /// Integer counterpart of [`Fixture::load_float_window`].
    pub fn load_int_window(&mut self, i: usize) {
        assert!(i < MAX_ITERATIONS, "window {} is past the pool", i);
        self.ints
            .whole_mut::<i32>()
            .copy_from_slice(&self.pool.ints[i..i + WINDOW]);
    }

    /// Loads window `i` of both domains.
    pub fn load_window(&mut self, i: usize) {
        self.load_float_window(i);
        self.load_int_window(i);
    }

    /// Restarts the perturbation generator for the operation at `index`,
    /// making that operation's sweep independent of what ran before it.
    pub fn reseed(&mut self, index: usize) {
        let stream = (index as u64 + 1).wrapping_mul(0x9e37_79b9_7f4a_7c15);
        self.rng = StdRng::seed_from_u64(self.seed ^ stream);
    }

    /// Mutable access to both scratch pairs and the generator at once.
    pub fn scratch_mut(&mut self) -> (&mut ScratchPair, &mut ScratchPair, &mut StdRng) {
        (&mut self.floats, &mut self.ints, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_is_deterministic_and_in_range() {
        let a = SamplePool::new(0);
        let b = SamplePool::new(0);
        assert_eq!(a, b);
        assert_eq!(a.floats().len(), POOL_SIZE);
        assert_eq!(a.ints().len(), POOL_SIZE);
        assert!(a
            .floats()
            .iter()
            .all(|&x| (SAMPLE_MIN..SAMPLE_MAX).contains(&x)));
        assert!(a.ints().iter().all(|&x| (-100_000..100_000).contains(&x)));
    }

    #[test]
    fn test_pools_depend_on_seed() {
        assert_ne!(SamplePool::new(0), SamplePool::new(1));
    }

    #[test]
    fn test_window_layout() {
        let mut fx = Fixture::new(0);
        fx.load_window(5);

        let floats = &fx.pool().floats()[5..13];
        assert_eq!(fx.floats().first::<f32>(), &floats[..4]);
        assert_eq!(fx.floats().second::<f32>(), &floats[4..]);

        let ints = &fx.pool().ints()[5..13];
        assert_eq!(fx.ints().first::<i32>(), &ints[..4]);
        assert_eq!(fx.ints().second::<i32>(), &ints[4..]);
        assert_eq!(fx.ints().middle::<i32>(), &ints[2..6]);
        assert_eq!(fx.ints().whole::<i32>(), ints);
    }

    #[test]
    fn test_views_alias_the_same_bytes() {
        let mut fx = Fixture::new(3);
        fx.load_window(0);
        let word = fx.ints().first::<i32>()[1];
        let bytes = &fx.ints().first::<u8>()[4..8];
        assert_eq!(bytes, &word.to_ne_bytes());
    }

    #[test]
    fn test_last_window_is_loadable() {
        let mut fx = Fixture::new(0);
        let last = MAX_ITERATIONS - 1;
        fx.load_window(last);
        assert_eq!(
            fx.ints().second::<i32>()[3],
            fx.pool().ints()[last + WINDOW - 1]
        );
        assert_eq!(fx.ints().whole::<i32>(), &fx.pool().ints()[last..last + WINDOW]);
        assert!(last + WINDOW <= POOL_SIZE);
    }

    #[test]
    #[should_panic(expected = "past the pool")]
    fn test_window_past_pool_panics() {
        Fixture::new(0).load_float_window(MAX_ITERATIONS);
    }

    #[test]
    fn test_reseed_restarts_stream() {
        let mut fx = Fixture::new(9);
        fx.reseed(4);
        let first: u32 = fx.scratch_mut().2.random();
        fx.reseed(4);
        let again: u32 = fx.scratch_mut().2.random();
        fx.reseed(5);
        let other: u32 = fx.scratch_mut().2.random();

        assert_eq!(first, again);
        assert_ne!(first, other);
    }
}
