//! Common

use num_traits::Num;
use std::ops::{Add, Mul, Neg};

/// Use 64-bit precision for floating point numbers.
pub type Float = f64;

/// Infinty (∞)
pub const INFINITY: Float = Float::INFINITY;

/// PI (π)
pub const PI: Float = std::f64::consts::PI;

/// 1/PI (1/π)
pub const INV_PI: Float = 1.0 / PI;

/// PI/2 (π/2)
pub const PI_OVER_TWO: Float = PI * 0.5;

/// 2*PI (2π)
pub const TWO_PI: Float = PI * 2.0;

/// 4*PI (4π)
pub const FOUR_PI: Float = PI * 4.0;

/// 1/4*PI (1/4π)
pub const INV_FOUR_PI: Float = 1.0 / FOUR_PI;

/// sqrt(2)
pub const SQRT_2: Float = std::f64::consts::SQRT_2;

/// sqrt(π)
pub const SQRT_PI: Float = 1.772_453_850_905_516;

/// 1/sqrt(π)
pub const INV_SQRT_PI: Float = 1.0 / SQRT_PI;

/// Returns the absolute value of a number.
///
/// * `n` - The number.
#[inline(always)]
pub fn abs<T>(n: T) -> T
where
    T: Num + Neg<Output = T> + PartialOrd + Copy,
{
    if n < T::zero() {
        -n
    } else {
        n
    }
}

/// Returns the minimum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn min<T>(a: T, b: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the maximum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn max<T>(a: T, b: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if a > b {
        a
    } else {
        b
    }
}

/// Clamps a value into the range `[min, max]`.
///
/// * `x`   - The number to clamp.
/// * `min` - Minimum value.
/// * `max` - Maximum value.
#[inline(always)]
pub fn clamp<T>(x: T, min: T, max: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// Linearly interpolate between two points for parameters in [0, 1] and
/// extrapolate for parameters outside that interval.
///
/// * `t` - Parameter.
/// * `p0` - Point at t=0.
/// * `p1` - Point at t=1.
#[inline(always)]
pub fn lerp<P>(t: Float, p0: P, p1: P) -> P
where
    Float: Mul<P, Output = P>,
    P: Add<P, Output = P>,
{
    (1.0 - t) * p0 + t * p1
}

/// Maps a continuous range `[min, max]` into `dx` sized intervals and returns
/// the index of the interval containing `x`. Values outside the range are
/// clamped to it first.
///
/// * `min` - Start of the range.
/// * `max` - End of the range.
/// * `dx`  - Interval width.
/// * `x`   - The value to map.
#[inline]
pub fn discrete_map(min: Float, max: Float, dx: Float, x: Float) -> usize {
    let clamped = clamp(x, min, max);
    ((clamped - min) / dx).floor() as usize
}

/// Return the cosine of an angle.
///
/// * `theta` - The angle in radians.
#[inline(always)]
pub fn cos(theta: Float) -> Float {
    theta.cos()
}

/// Return the sine of an angle.
///
/// * `theta` - The angle in radians.
#[inline(always)]
pub fn sin(theta: Float) -> Float {
    theta.sin()
}

/// Computes the four quadrant arctangent of `y/x`.
///
/// Return values are in the following ranges based on `y` and `x`:
/// * x = 0, y = 0 => 0
/// * x >= 0       => arctan(y/x) -> [-π/2, π/2]
/// * y >= 0       => arctan(y/x) + π -> (π/2, π]
/// * y < 0        =>  arctan(y/x) - π -> (-π, -π/2)
///
/// * `y` - Proportion of y-coordinate.
/// * `x` - Proportion of x-coordinate.
#[inline(always)]
pub fn atan2(y: Float, x: Float) -> Float {
    y.atan2(x)
}

/// Returns the error function for a given floating point value.
///
/// * `x` - The floating point value.
#[inline(always)]
pub fn erf(x: Float) -> Float {
    // constants
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    // Save the sign of x
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = abs(x);

    // A&S formula 7.1.26.
    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();

    sign * y
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
