//! RNG module - seeded random selection for rounds and choice lists
//!
//! A simple LCG keeps the games deterministic per seed, so the same seed
//! produces the same sequence of phrases, entries, and choice orders.

use arrayvec::ArrayVec;
use tui_lingo_types::CHOICE_COUNT;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Random index into a non-empty slice
    pub fn pick_index<T>(&mut self, slice: &[T]) -> usize {
        debug_assert!(!slice.is_empty());
        self.next_range(slice.len() as u32) as usize
    }

    /// Shuffle a slice in place using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Get the current RNG state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

/// Return a shuffled copy of `items`; the input is left untouched.
pub fn shuffled<T: Clone>(rng: &mut SimpleRng, items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    rng.shuffle(&mut out);
    out
}

/// Draw `min(n, len)` distinct elements without replacement.
pub fn sample<T: Clone>(rng: &mut SimpleRng, items: &[T], n: usize) -> Vec<T> {
    let mut out = shuffled(rng, items);
    out.truncate(n);
    out
}

/// Build a shuffled choice list for a multiple-choice round: the correct
/// pool index plus up to 3 distinct distractor indices drawn from the rest
/// of the pool. The correct index appears exactly once.
pub fn build_choices(
    rng: &mut SimpleRng,
    pool_len: usize,
    correct: usize,
) -> ArrayVec<usize, CHOICE_COUNT> {
    debug_assert!(correct < pool_len);

    let others: Vec<usize> = (0..pool_len).filter(|&i| i != correct).collect();
    let distractors = sample(rng, &others, CHOICE_COUNT - 1);

    let mut choices: ArrayVec<usize, CHOICE_COUNT> = ArrayVec::new();
    choices.push(correct);
    choices.extend(distractors);
    rng.shuffle(&mut choices);
    choices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_shuffled_does_not_mutate_input() {
        let items = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let before = items.clone();
        let mut rng = SimpleRng::new(7);

        let mut out = shuffled(&mut rng, &items);
        assert_eq!(items, before);

        // Same multiset either way
        out.sort_unstable();
        assert_eq!(out, before);
    }

    #[test]
    fn test_sample_distinct_and_clamped() {
        let items: Vec<u32> = (0..10).collect();
        let mut rng = SimpleRng::new(99);

        let mut picked = sample(&mut rng, &items, 4);
        assert_eq!(picked.len(), 4);
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 4);

        // Asking for more than the pool holds returns the whole pool
        let all = sample(&mut rng, &items, 100);
        assert_eq!(all.len(), items.len());
    }

    #[test]
    fn test_build_choices_contains_correct_exactly_once() {
        let mut rng = SimpleRng::new(3);
        for correct in 0..12 {
            let choices = build_choices(&mut rng, 12, correct);
            assert_eq!(choices.len(), 4);
            assert_eq!(choices.iter().filter(|&&c| c == correct).count(), 1);

            let mut sorted: Vec<usize> = choices.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), 4, "distractors must be distinct");
        }
    }

    #[test]
    fn test_build_choices_small_pool() {
        let mut rng = SimpleRng::new(5);
        let choices = build_choices(&mut rng, 3, 1);
        assert_eq!(choices.len(), 3);
        assert!(choices.contains(&1));
    }
}
