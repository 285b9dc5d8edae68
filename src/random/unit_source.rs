use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_core::{Error, RngCore};
use crate::core::seeded_or_not::SeededOrNot;

/// Largest `f32` strictly below one.
const BELOW_ONE: f32 = 1.0 - f32::EPSILON / 2.0;

/// A source of uniform floats in `[0, 1)`.
///
/// Every generator consumes randomness only through this trait, so effects can be
/// replayed from a fixed sequence or driven by any `rand` generator.
pub trait UnitSource {
    fn next_unit(&mut self) -> f32;
}

impl<R: RngCore> UnitSource for R {
    fn next_unit(&mut self) -> f32 {
        self.gen::<f32>()
    }
}

/// Replays a fixed list of values, wrapping round when it runs out.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f32>) -> Self {
        let values = values.into_iter().map(|v| v.clamp(0.0, BELOW_ONE)).collect();
        SequenceSource { values, cursor: 0 }
    }

    /// Number of values handed out so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl UnitSource for SequenceSource {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Owned generator for effects, seeded or drawn from OS entropy.
#[derive(Debug, Clone)]
pub struct GenRng(StdRng);

impl GenRng {
    pub fn new(seed: u64) -> Self {
        GenRng(StdRng::seed_from_u64(seed))
    }

    pub fn from_seed_choice(seed: SeededOrNot) -> Self {
        match seed {
            SeededOrNot::Seeded(s) => GenRng::new(s),
            SeededOrNot::Unseeded => GenRng(StdRng::from_entropy()),
        }
    }

    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.0
    }
}

impl RngCore for GenRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.0.try_fill_bytes(dest)
    }
}
