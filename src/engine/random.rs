// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Random source consulted at every branch point of the engine.
//!
//! Production code uses a seeded or entropy-initialized [`StdRng`]; tests and
//! replays use [`ScriptedSource`] to drive each draw explicitly.

use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

/// Uniform random draws used by the suggesters
pub trait RandomSource {
    /// Uniform value in `[0, 1)`
    fn next_f64(&mut self) -> f64;

    /// True with the given probability
    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        let i = (self.next_f64() * len as f64) as usize;
        i.min(len.saturating_sub(1))
    }

    /// Pick one element uniformly, `None` for an empty slice
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let i = self.index(items.len());
        items.get(i)
    }
}

impl RandomSource for StdRng {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

impl RandomSource for ThreadRng {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed list of draws, cycling when it runs out.
///
/// `ScriptedSource::constant(0.0)` always takes the first branch and the
/// first candidate.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    position: usize,
}

impl ScriptedSource {
    /// Draws are clamped into `[0, 1)`; an empty script behaves like `constant(0.0)`.
    pub fn new(values: Vec<f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { values, position: 0 }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedSource {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            self.position += 1;
            return 0.0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_scripted_cycles() {
        let mut source = ScriptedSource::new(vec![0.1, 0.9]);
        assert_eq!(source.next_f64(), 0.1);
        assert_eq!(source.next_f64(), 0.9);
        assert_eq!(source.next_f64(), 0.1);
        assert_eq!(source.draws(), 3);
    }

    #[test]
    fn test_index_stays_in_bounds() {
        let mut high = ScriptedSource::constant(1.0);
        assert_eq!(high.index(4), 3);
        let mut low = ScriptedSource::constant(0.0);
        assert_eq!(low.index(4), 0);
        let mut mid = ScriptedSource::constant(0.5);
        assert_eq!(mid.index(4), 2);
    }

    #[test]
    fn test_choose() {
        let mut source = ScriptedSource::constant(0.0);
        assert_eq!(source.choose(&[7, 8, 9]), Some(&7));
        assert_eq!(source.choose::<u8>(&[]), None);
    }

    #[test]
    fn test_chance_edges() {
        let mut zero = ScriptedSource::constant(0.0);
        assert!(zero.chance(0.1));
        assert!(!zero.chance(0.0));
        let mut top = ScriptedSource::constant(0.99);
        assert!(!top.chance(0.5));
        assert!(top.chance(1.0));
    }

    #[test]
    fn test_std_rng_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..16 {
            let x = a.next_f64();
            assert_eq!(x, b.next_f64());
            assert!((0.0..1.0).contains(&x));
        }
    }
}
