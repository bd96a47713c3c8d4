//! Random sources handed to maps.
//!
//! Maps never reach for a thread local or global rng. They ask the game
//! [Settings](crate::settings::Settings) for a source scoped to a turn, so a
//! replay with the same seed makes the exact same choices.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The random capability maps are allowed to use
pub trait Rand: std::fmt::Debug {
    /// a number in `[0, n)`. `n` must be greater than zero
    fn int_n(&mut self, n: usize) -> usize;

    /// permute `n` elements by calling `swap(i, j)` for each exchange
    fn shuffle(&mut self, n: usize, swap: &mut dyn FnMut(usize, usize));
}

/// Always picks the lowest option and never shuffles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinRand;

impl Rand for MinRand {
    fn int_n(&mut self, _n: usize) -> usize {
        0
    }

    fn shuffle(&mut self, _n: usize, _swap: &mut dyn FnMut(usize, usize)) {}
}

/// Always picks the highest option and never shuffles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxRand;

impl Rand for MaxRand {
    fn int_n(&mut self, n: usize) -> usize {
        n.saturating_sub(1)
    }

    fn shuffle(&mut self, _n: usize, _swap: &mut dyn FnMut(usize, usize)) {}
}

/// A reproducible pseudo random stream
#[derive(Debug, Clone)]
pub struct SeedRand {
    rng: SmallRng,
}

impl SeedRand {
    /// a fresh stream for the given seed
    pub fn new(seed: i64) -> Self {
        SeedRand {
            rng: SmallRng::seed_from_u64(seed as u64),
        }
    }
}

impl Rand for SeedRand {
    fn int_n(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }

    // Fisher-Yates, walking down from the end
    fn shuffle(&mut self, n: usize, swap: &mut dyn FnMut(usize, usize)) {
        for i in (1..n).rev() {
            let j = self.rng.gen_range(0..=i);
            swap(i, j);
        }
    }
}

/// Shuffle a slice in place with any [Rand]
pub fn shuffle_slice<T>(rand: &mut dyn Rand, items: &mut [T]) {
    rand.shuffle(items.len(), &mut |i, j| items.swap(i, j));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(rand: &mut dyn Rand, count: usize) -> Vec<usize> {
        (0..count).map(|_| rand.int_n(1000)).collect()
    }

    #[test]
    fn test_min_and_max() {
        assert_eq!(MinRand.int_n(10), 0);
        assert_eq!(MaxRand.int_n(10), 9);

        let mut items = vec![1, 2, 3, 4];
        shuffle_slice(&mut MinRand, &mut items);
        assert_eq!(items, vec![1, 2, 3, 4]);
        shuffle_slice(&mut MaxRand, &mut items);
        assert_eq!(items, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let a = draw(&mut SeedRand::new(42), 32);
        let b = draw(&mut SeedRand::new(42), 32);
        assert_eq!(a, b);

        let c = draw(&mut SeedRand::new(43), 32);
        assert_ne!(a, c);
    }

    #[test]
    fn test_int_n_in_range() {
        let mut r = SeedRand::new(7);
        for n in 1..50 {
            assert!(r.int_n(n) < n);
        }
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut items: Vec<u32> = (0..20).collect();
        shuffle_slice(&mut SeedRand::new(1234), &mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }
}
