//! Randomness capability for reply variant selection.
//!
//! The generator never reaches for an ambient RNG; callers pass a picker in, so tests
//! can pin every choice.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Chooses an index into a pool of reply variants.
pub trait VariantPicker {
    /// Returns an index in `0..len`. `len` is never zero when called by the generator.
    fn pick(&mut self, len: usize) -> usize;
}

impl<P: VariantPicker + ?Sized> VariantPicker for &mut P {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

impl<P: VariantPicker + ?Sized> VariantPicker for Box<P> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Uniform picker over any `rand` generator
#[derive(Debug, Clone)]
pub struct RngPicker<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RngPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngPicker<StdRng> {
    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: RngCore> VariantPicker for RngPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed list of indices (wrapped into range), cycling when exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicker {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedPicker {
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Always picks the first variant.
    pub fn first() -> Self {
        Self::new(vec![0])
    }
}

impl VariantPicker for ScriptedPicker {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 || self.script.is_empty() {
            return 0;
        }
        let index = self.script[self.cursor % self.script.len()] % len;
        self.cursor += 1;
        index
    }
}

/// Pick one entry of a pool, `None` only for an empty pool.
pub fn choose<'p, T>(picker: &mut dyn VariantPicker, pool: &'p [T]) -> Option<&'p T> {
    if pool.is_empty() {
        return None;
    }
    let index = picker.pick(pool.len()).min(pool.len() - 1);
    pool.get(index)
}
