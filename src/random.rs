//! Randomness used by the simulation.
//!
//! Every operation draws from a [Source] passed in by `&mut`. Any
//! [RngCore] is a source, so tests can hand in a seeded [WyRng] and get the
//! same run twice.

use crate::{population::Weight, Error};
use rand::{seq::SliceRandom, Rng, RngCore};
use rand_distr::{Distribution, Triangular};

pub trait Source {
    /// Sample a triangular distribution over `[min, max]` peaking at `mode`.
    fn triangular(&mut self, min: f64, max: f64, mode: f64) -> Result<f64, Error>;

    /// Uniform draw from the inclusive range spanned by `low` and `high`, in
    /// either order. Both must be finite.
    fn uniform_real(&mut self, low: f64, high: f64) -> f64;

    /// Uniform draw from the inclusive range `[low, high]`. Requires `low <= high`.
    fn uniform_int(&mut self, low: Weight, high: Weight) -> Weight;

    /// Uniform draw from `[0, 1)`.
    fn roll(&mut self) -> f64;

    fn shuffle<T>(&mut self, items: &mut [T]);
}

impl<R: RngCore> Source for R {
    fn triangular(&mut self, min: f64, max: f64, mode: f64) -> Result<f64, Error> {
        let dist = Triangular::new(min, max, mode)
            .map_err(|e| Error::invalid(format!("triangular({min}, {max}, {mode}): {e}")))?;
        Ok(dist.sample(self))
    }

    fn uniform_real(&mut self, low: f64, high: f64) -> f64 {
        self.random_range(low.min(high)..=low.max(high))
    }

    fn uniform_int(&mut self, low: Weight, high: Weight) -> Weight {
        self.random_range(low..=high)
    }

    fn roll(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(self)
    }
}

/// wyrand: a tiny, fast generator that is fully determined by its seed.
#[derive(Debug, Clone)]
pub struct WyRng {
    state: u64,
}

impl WyRng {
    pub fn seeded(state: u64) -> Self {
        Self { state }
    }
}

impl RngCore for WyRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        const WY_CONST_0: u64 = 0x2d35_8dcc_aa6c_78a5;
        const WY_CONST_1: u64 = 0x8bb8_4b93_962e_acc9;
        self.state = self.state.wrapping_add(WY_CONST_0);
        let t = u128::from(self.state) * u128::from(self.state ^ WY_CONST_1);
        (t as u64) ^ (t >> 64) as u64
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Generator for a run: seeded when a seed is given, otherwise from the
/// thread-local entropy source.
pub fn default_rng(seed: Option<u64>) -> WyRng {
    WyRng::seeded(seed.unwrap_or_else(rand::random))
}
