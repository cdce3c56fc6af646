//! Random Number Generator.
//!
//! Every variate in the crate is drawn from an explicitly owned `RNG`. There
//! is no global generator: reseeding an `RNG` and replaying the same sequence
//! of calls reproduces the same values bit for bit.

use crate::math::*;
use rand::{Error, RngCore};
use rand_distr::{Distribution, Gamma};

/// 64-bit precision value for 1 - epsilon.
pub const DOUBLE_ONE_MINUS_EPSILON: f64 = hexf64!("0x1.fffffffffffffp-1"); // 0.99999999999999989

/// 1 - epsilon in the precision we've selected for `Float`.
pub const ONE_MINUS_EPSILON: Float = DOUBLE_ONE_MINUS_EPSILON;

const PCG32_DEFAULT_STATE: u64 = 0x853c49e6748fea9b;
const PCG32_DEFAULT_STREAM: u64 = 0xda3e39cb94b95bdb;
const PCG32_MULT: u64 = 0x5851f42d4c957f2d;

/// Implements the pseudo-random number generator.
#[derive(Clone, Debug)]
pub struct RNG {
    state: u64,
    inc: u64,
}

impl Default for RNG {
    /// Return a new instance of `RNG` with default state and stream.
    fn default() -> Self {
        Self {
            state: PCG32_DEFAULT_STATE,
            inc: PCG32_DEFAULT_STREAM,
        }
    }
}

impl RNG {
    /// Create a new `RNG` by seeding it with the given starting sequence.
    ///
    /// * `sequence_index` - The starting sequence to seed with.
    pub fn new(sequence_index: u64) -> Self {
        Self::with_seed(PCG32_DEFAULT_STATE, sequence_index)
    }

    /// Create a new `RNG` from an initial state and a sequence. Generators
    /// with the same seed but different sequences produce independent
    /// streams.
    ///
    /// * `seed`           - The initial state.
    /// * `sequence_index` - The starting sequence to seed with.
    pub fn with_seed(seed: u64, sequence_index: u64) -> Self {
        let mut ret = Self { state: 0, inc: 0 };
        ret.set_seed_and_sequence(seed, sequence_index);
        ret
    }

    /// Initialize the random number generator state and sequence.
    ///
    /// * `seed`     - The initial state.
    /// * `init_seq` - The starting sequence to seed with.
    #[inline(always)]
    fn set_seed_and_sequence(&mut self, seed: u64, init_seq: u64) {
        self.state = 0;
        let (inc, _) = init_seq.overflowing_shl(1);
        self.inc = inc | 1;
        let _ = self.uniform_u32();

        let (state, _) = self.state.overflowing_add(seed);
        self.state = state;
        let _ = self.uniform_u32();
    }

    /// Returns a uniformly distributed u32 value.
    #[inline(always)]
    pub fn uniform_u32(&mut self) -> u32 {
        let old_state = self.state;
        let (new_state, _) = old_state.overflowing_mul(PCG32_MULT);
        let (new_state, _) = new_state.overflowing_add(self.inc);
        self.state = new_state;

        let (xor_shifted, _) = old_state.overflowing_shr(18);
        let (xor_shifted, _) = (xor_shifted ^ old_state).overflowing_shr(27);
        let xor_shifted = xor_shifted as u32;

        let (rot, _) = old_state.overflowing_shr(59);
        let rot = rot as u32;

        let (r1, _) = xor_shifted.overflowing_shr(rot);
        let (bits, _) = (!rot).overflowing_add(1);
        let (r2, _) = xor_shifted.overflowing_shl(bits & 31);

        r1 | r2
    }

    /// Returns a uniformly distributed u64 value built from two consecutive
    /// u32 values (high bits first).
    #[inline(always)]
    pub fn uniform_u64(&mut self) -> u64 {
        let hi = self.uniform_u32() as u64;
        let lo = self.uniform_u32() as u64;
        (hi << 32) | lo
    }

    /// Returns a uniformly distributed value over the half open interval
    /// [0.0, 1.0) with 53 bits of resolution.
    pub fn uniform_float(&mut self) -> Float {
        min(
            (self.uniform_u64() >> 11) as Float * hexf64!("0x1.0p-53"),
            ONE_MINUS_EPSILON,
        )
    }

    /// Returns a uniformly distributed value over [a, b]. Consumes exactly one
    /// `uniform_float()` draw `t` and returns `a + t * (b - a)`.
    ///
    /// * `a` - Lower bound.
    /// * `b` - Upper bound.
    #[inline]
    pub fn uniform_range(&mut self, a: Float, b: Float) -> Float {
        let t = self.uniform_float();
        a + t * (b - a)
    }

    /// Returns a standard normal variate using the Box-Muller transform
    /// `sqrt(2) * cos(2π u1) * sqrt(-ln(u2))`. Consumes exactly two
    /// `uniform_float()` draws, `u1` first.
    ///
    /// `u2 == 0` yields +∞ and is not clamped.
    pub fn gaussian(&mut self) -> Float {
        let u1 = self.uniform_float();
        let u2 = self.uniform_float();
        box_muller(u1, u2)
    }

    /// Returns a variate from the Gamma(shape, 1) distribution.
    ///
    /// Panics if `shape` is not positive.
    ///
    /// * `shape` - The shape parameter.
    pub fn gamma(&mut self, shape: Float) -> Float {
        let distrib = match Gamma::new(shape, 1.0) {
            Ok(distrib) => distrib,
            Err(e) => panic!("invalid gamma shape {shape}: {e}"),
        };
        distrib.sample(self)
    }
}

/// Maps two uniform draws to a standard normal variate.
///
/// * `u1` - Draw for the angle.
/// * `u2` - Draw for the radius.
#[inline]
fn box_muller(u1: Float, u2: Float) -> Float {
    SQRT_2 * cos(TWO_PI * u1) * (-u2.ln()).sqrt()
}

impl RngCore for RNG {
    fn next_u32(&mut self) -> u32 {
        self.uniform_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.uniform_u64()
    }

    /// Fills `dest` with little-endian `uniform_u32()` draws; a trailing
    /// partial chunk takes the low bytes of one more draw.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.uniform_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
