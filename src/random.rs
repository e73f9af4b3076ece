//! Sampling helpers over an injected random source.
//!
//! Every stochastic operation in the crate takes `&mut R where R: Rng + ?Sized`
//! so callers can pass a seeded [`rand::rngs::StdRng`] for reproducible output
//! or [`rand::thread_rng`] for ad-hoc use.

use rand::Rng;
use rand::distributions::Standard;
use rand::seq::SliceRandom;

/// Draws a value uniformly between `a` and `b`.
///
/// Unlike `gen_range`, the bounds may be equal or reversed; the result is
/// `a + (b - a) * u` for `u` in `[0, 1)`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, a: f32, b: f32) -> f32 {
    let u: f32 = rng.sample(Standard);
    a + (b - a) * u
}

/// Picks one item uniformly, or `None` for an empty slice.
pub fn choose<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}

/// Picks one item from a non-empty, statically known table.
pub(crate) fn pick<T: Copy, R: Rng + ?Sized, const N: usize>(rng: &mut R, items: &[T; N]) -> T {
    items[rng.gen_range(0..N)]
}

/// Picks `amount` distinct items, or all of them when `amount` exceeds the
/// slice length.
pub fn sample<T: Copy, R: Rng + ?Sized>(rng: &mut R, items: &[T], amount: usize) -> Vec<T> {
    items.choose_multiple(rng, amount).copied().collect()
}

/// Flips a fair coin.
pub fn coin<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn uniform_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = uniform(&mut rng, -0.1, 0.1);
            assert!((-0.1..=0.1).contains(&v));
        }
    }

    #[test]
    fn uniform_accepts_reversed_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let v = uniform(&mut rng, 10.0, 4.0);
            assert!((4.0..=10.0).contains(&v));
        }
        assert_eq!(uniform(&mut rng, 3.0, 3.0), 3.0);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: [u8; 0] = [];
        assert!(choose(&mut rng, &empty).is_none());
        assert_eq!(choose(&mut rng, &[5]), Some(&5));
    }

    #[test]
    fn sample_is_distinct_and_bounded() {
        let mut rng = StdRng::seed_from_u64(5);
        let items = [1, 2, 3, 4, 5, 6, 7];
        for amount in 0..=3 {
            let mut picked = sample(&mut rng, &items, amount);
            assert_eq!(picked.len(), amount);
            picked.sort_unstable();
            picked.dedup();
            assert_eq!(picked.len(), amount);
        }
        assert_eq!(sample(&mut rng, &items[..2], 5).len(), 2);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let xs: Vec<f32> = (0..10).map(|_| uniform(&mut a, 0.0, 1.0)).collect();
        let ys: Vec<f32> = (0..10).map(|_| uniform(&mut b, 0.0, 1.0)).collect();
        assert_eq!(xs, ys);
    }
}
