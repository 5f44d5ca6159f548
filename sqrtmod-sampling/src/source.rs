use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use rand_core::RngCore;
use rug::{Assign, Integer, integer::Order, rand::RandState};

pub struct Source {
    source: ChaCha8Rng,
}

/// Returns a fresh seed drawn from the thread-local OS-seeded generator.
pub fn new_seed() -> [u8; 32] {
    let mut seed: [u8; 32] = [0u8; 32];
    rand::rng().fill_bytes(&mut seed);
    seed
}

/// Expands a `u64` into a [Source] seed (little-endian, zero padded).
pub fn seed_from_u64(x: u64) -> [u8; 32] {
    let mut seed: [u8; 32] = [0u8; 32];
    seed[..8].copy_from_slice(&x.to_le_bytes());
    seed
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    pub fn branch(&mut self) -> ([u8; 32], Self) {
        let seed: [u8; 32] = self.new_seed();
        (seed, Source::new(seed))
    }

    pub fn new_seed(&mut self) -> [u8; 32] {
        let mut seed: [u8; 32] = [0u8; 32];
        self.fill_bytes(&mut seed);
        seed
    }

    /// Returns a GMP random state seeded from the next 32 bytes of this source.
    pub fn rand_state(&mut self) -> RandState<'static> {
        let seed: Integer = Integer::from_digits(&self.new_seed(), Order::Lsf);
        let mut state: RandState<'static> = RandState::new();
        state.seed(&seed);
        state
    }

    /// Overwrites every entry of `data` with an integer drawn uniformly from `[0, p)`.
    pub fn fill_uniform_below(&mut self, p: &Integer, data: &mut [Integer]) {
        debug_assert!(*p > 0, "invalid bound: p={} <= 0", p);
        let mut state: RandState<'static> = self.rand_state();
        data.iter_mut()
            .for_each(|x| x.assign(p.random_below_ref(&mut state)));
    }

    /// Returns `n` integers drawn uniformly from `[0, p)`.
    pub fn uniform_below_vec(&mut self, p: &Integer, n: usize) -> Vec<Integer> {
        let mut data: Vec<Integer> = vec![Integer::new(); n];
        self.fill_uniform_below(p, &mut data);
        data
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use rug::Integer;

    use super::{Source, seed_from_u64};

    #[test]
    fn uniform_below_is_in_range() {
        let p: Integer = Integer::from(13);
        let mut source: Source = Source::new([0u8; 32]);
        let data: Vec<Integer> = source.uniform_below_vec(&p, 1024);
        assert_eq!(data.len(), 1024);
        assert!(data.iter().all(|x| *x >= 0 && *x < p));
        // 1024 draws over 13 classes hit every class.
        (0..13).for_each(|i| assert!(data.iter().any(|x| *x == i), "class {} never drawn", i));
    }

    #[test]
    fn same_seed_same_stream() {
        let p: Integer = Integer::from((1u64 << 62) - (1u64 << 16) + 1);
        let a: Vec<Integer> = Source::new(seed_from_u64(42)).uniform_below_vec(&p, 64);
        let b: Vec<Integer> = Source::new(seed_from_u64(42)).uniform_below_vec(&p, 64);
        let c: Vec<Integer> = Source::new(seed_from_u64(43)).uniform_below_vec(&p, 64);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn branch_is_reproducible() {
        let mut s0: Source = Source::new([7u8; 32]);
        let mut s1: Source = Source::new([7u8; 32]);
        let (seed0, _) = s0.branch();
        let (seed1, _) = s1.branch();
        assert_eq!(seed0, seed1);
    }
}
